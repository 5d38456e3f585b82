//! # routrie - Radix Trie Request Path Router
//!
//! `routrie` resolves a request path and scope (an HTTP method, a websocket,
//! or a generic catch-everything scope) to a registered handler in time
//! proportional to the number of path segments, not the number of routes.
//!
//! ## Patterns
//!
//! - literal segments: `/users/active`
//! - typed parameters: `/users/{id:int}`, `/posts/{slug}` (type defaults to `str`)
//! - a trailing catch-all: `/files/{rest:path}`
//!
//! Literal children beat parameter children, and parameter children beat the
//! catch-all. Among parameter types at the same position the first one
//! registered wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use routrie::prelude::*;
//!
//! let mut trie = RouteTrie::new();
//! trie.register("/users/me", Scope::GET, "me").unwrap();
//! trie.register("/users/{id:int}", Scope::GET, "by_id").unwrap();
//! trie.register("/files/{rest:path}", Scope::GET, "files").unwrap();
//! trie.seal();
//!
//! let found = trie.resolve("/users/42", Scope::GET).matched().unwrap();
//! assert_eq!(*found.handler(), "by_id");
//! assert_eq!(found.param("id"), Some("42"));
//!
//! let files = trie.resolve("/files/a/b/c", Scope::GET).matched().unwrap();
//! assert_eq!(files.param("rest"), Some("a/b/c"));
//!
//! match trie.resolve("/users/me", Scope::POST) {
//!     MatchResult::MethodNotAllowed { allowed } => assert_eq!(allowed.header_value(), "GET"),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Mounts
//!
//! Any [`Resolve`] implementation, including another [`RouteTrie`], can be
//! mounted at a literal prefix. Paths below the prefix are handed to it with
//! the prefix stripped.
//!
//! ## Features
//!
//! - `tracing`: structured logging of registration, sealing and resolution

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Scopes
pub use routrie_core::{Method, Scope};

// Parameters and patterns
pub use routrie_core::{ParamDef, ParamType, PathPattern, PathSegments, Segment, normalize_path};

// Resolution
pub use routrie_core::{AllowedScopes, Endpoint, MatchResult, PathParams, Resolve, RouteMatch};

// Error types
pub use routrie_core::{
    BoxError, BuildError, ParseParamTypeError, ParseScopeError, PatternError, RoutrieError,
};

// Trie
pub use routrie_std::{ParamTypes, Phase, RouteTrie, testing};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        AllowedScopes, BuildError, MatchResult, Method, ParamType, Resolve, RouteMatch,
        RouteTrie, Scope,
    };
}
