//! # routrie-core
//!
//! Core types for the routrie request path router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! applications and sub-applications that only need to speak the router's
//! vocabulary, without pulling in the trie implementation from `routrie-std`.
//!
//! # Contents
//!
//! - **Scopes**: [`Method`] and [`Scope`], the keys handlers are stored under
//! - **Parameters**: [`ParamType`] with per-type validation, [`ParamDef`]
//! - **Patterns**: [`PathPattern`] parsing of `{name}` / `{name:type}` syntax
//! - **Paths**: [`PathSegments`], an allocation-free segment iterator
//! - **Results**: [`Endpoint`], [`RouteMatch`], [`MatchResult`], [`AllowedScopes`]
//! - **Resolution**: the [`Resolve`] trait implemented by tries and mounts
//!
//! # Error Types
//!
//! - [`RoutrieError`] - Top-level error type
//! - [`BuildError`] - Route registration errors
//! - [`PatternError`] - Malformed or conflicting patterns

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod endpoint;
mod error;
mod param;
pub mod path;
mod pattern;
mod resolve;
mod scope;

// Re-exports
pub use endpoint::Endpoint;
pub use error::{
    BoxError, BuildError, ParseParamTypeError, ParseScopeError, PatternError, RoutrieError,
};
pub use param::{ParamDef, ParamType};
pub use path::{PathSegments, normalize_path};
pub use pattern::{PathPattern, Segment};
pub use resolve::{AllowedScopes, MatchResult, PathParams, Resolve, RouteMatch};
pub use scope::{Method, Scope};
