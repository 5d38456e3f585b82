//! # routrie-std
//!
//! Radix trie implementation of the routrie path router.
//!
//! This crate provides:
//! - **Route trie**: [`RouteTrie`] with its [`Phase`] lifecycle
//! - **Parameter type sets**: [`ParamTypes`], used for fast-fail matching
//! - **Testing**: [`testing::RecordingResolver`] for exercising mounts

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use routrie_core;

mod insert;
mod node;
pub mod testing;
mod traverse;
pub mod trie;

pub use node::ParamTypes;
pub use trie::{Phase, RouteTrie};
