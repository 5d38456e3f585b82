//! Error types for routrie.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RoutrieError`] - Top-level error type for all routrie operations
//! - [`BuildError`] - Errors raised while registering routes
//! - [`PatternError`] - Reasons a route pattern is rejected
//! - [`ParseScopeError`] / [`ParseParamTypeError`] - Token parsing failures
//!
//! Only the build phase fails. Resolving a request path never returns an
//! error: an unmatched path is an ordinary [`MatchResult`](crate::MatchResult).

use crate::scope::Scope;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all routrie operations.
#[derive(Error, Debug)]
pub enum RoutrieError {
    /// An error occurred while building the route trie.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// A scope token could not be parsed.
    #[error(transparent)]
    Scope(#[from] ParseScopeError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised synchronously by route registration.
///
/// These indicate a misconfigured route table and are fatal to startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The same normalized pattern was registered twice for one scope.
    #[error("route `{pattern}` is already registered for scope `{scope}`")]
    RouteConflict {
        /// The normalized pattern.
        pattern: String,
        /// The scope registered twice.
        scope: Scope,
    },

    /// The pattern is malformed or structurally incompatible with the trie.
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as given by the caller.
        pattern: String,
        /// What is wrong with it.
        #[source]
        source: PatternError,
    },

    /// The trie has been sealed and no longer accepts routes.
    #[error("route trie is sealed; routes can only be registered during the build phase")]
    Sealed,
}

impl BuildError {
    /// Shorthand for [`BuildError::InvalidPattern`].
    pub fn invalid(pattern: impl Into<String>, source: PatternError) -> Self {
        BuildError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns the pattern error if this is an [`BuildError::InvalidPattern`].
    pub fn pattern_error(&self) -> Option<&PatternError> {
        match self {
            BuildError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reasons a route pattern is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A segment contains braces but is not a whole `{name}` / `{name:type}`.
    #[error("malformed parameter segment `{0}`")]
    MalformedSegment(String),

    /// A parameter has an empty name.
    #[error("parameter name must not be empty")]
    EmptyParameterName,

    /// A parameter declares a type that does not exist.
    #[error(transparent)]
    UnknownParameterType(#[from] ParseParamTypeError),

    /// A parameter name appears twice in one pattern.
    #[error("parameter `{0}` is declared more than once")]
    DuplicateParameter(String),

    /// A catch-all (`path` type) parameter is followed by further segments.
    #[error("catch-all parameter `{0}` must be the final segment")]
    CatchAllNotLast(String),

    /// The same parameter name is declared with two types at one position.
    #[error("parameter `{name}` is declared as `{existing}` and `{requested}` at the same position")]
    ConflictingParameterType {
        /// The parameter name.
        name: String,
        /// The type registered first.
        existing: String,
        /// The type requested now.
        requested: String,
    },

    /// A second catch-all with a different name at the same position.
    #[error("catch-all `{existing}` is already registered at this position (got `{requested}`)")]
    ConflictingCatchAll {
        /// The catch-all name registered first.
        existing: String,
        /// The catch-all name requested now.
        requested: String,
    },

    /// A new sibling was added after a catch-all at the same position.
    #[error("cannot add `{0}` after a catch-all parameter at the same position")]
    ChildAfterCatchAll(String),

    /// Mount patterns must consist of literal segments only.
    #[error("mount patterns cannot contain parameters")]
    ParameterInMount,

    /// The route would be unreachable because a mount owns its prefix.
    #[error("route is shadowed by the mount at `{0}`")]
    ShadowedByMount(String),

    /// A mount is already registered at this position.
    #[error("a mount is already registered at this position")]
    DuplicateMount,

    /// A mount cannot be placed where routes already exist.
    #[error("cannot mount over existing routes")]
    MountOverRoutes,
}

/// A scope or method token could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scope `{0}`")]
pub struct ParseScopeError(pub String);

/// A parameter type name could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown parameter type `{0}`")]
pub struct ParseParamTypeError(pub String);

// Convenience conversions
impl From<BoxError> for RoutrieError {
    fn from(err: BoxError) -> Self {
        RoutrieError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::Method;

    #[test]
    fn test_build_error_display() {
        let conflict = BuildError::RouteConflict {
            pattern: "/items".to_string(),
            scope: Scope::Http(Method::Get),
        };
        assert_eq!(
            conflict.to_string(),
            "route `/items` is already registered for scope `GET`"
        );

        let invalid = BuildError::invalid("/a/{x:path}/b", PatternError::CatchAllNotLast("x".into()));
        assert_eq!(
            invalid.to_string(),
            "invalid route pattern `/a/{x:path}/b`: catch-all parameter `x` must be the final segment"
        );
        assert_eq!(
            invalid.pattern_error(),
            Some(&PatternError::CatchAllNotLast("x".into()))
        );
    }

    #[test]
    fn test_top_level_conversion() {
        let err: RoutrieError = BuildError::Sealed.into();
        assert!(matches!(err, RoutrieError::Build(BuildError::Sealed)));
    }
}
