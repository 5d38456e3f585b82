//! The route trie.
//!
//! A [`RouteTrie`] is built in two phases. While [`Phase::Building`], routes
//! and mounts are registered with [`RouteTrie::register`] and
//! [`RouteTrie::mount`]; every structural check happens at registration time.
//! [`RouteTrie::seal`] moves it to [`Phase::Sealed`], after which it only
//! serves lookups.
//!
//! # Example
//!
//! ```rust
//! use routrie_core::Scope;
//! use routrie_std::RouteTrie;
//!
//! let mut trie = RouteTrie::new();
//! trie.register("/users/{id:int}", Scope::GET, "show_user").unwrap();
//! trie.seal();
//!
//! let matched = trie.resolve("/users/42", Scope::GET).matched().unwrap();
//! assert_eq!(*matched.handler(), "show_user");
//! assert_eq!(matched.param("id"), Some("42"));
//! ```

use crate::node::TrieNode;
use routrie_core::{BuildError, Endpoint, MatchResult, PathPattern, Resolve, Scope};
use std::fmt;

/// Lifecycle phase of a [`RouteTrie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Routes and mounts may be registered.
    #[default]
    Building,
    /// The trie is frozen and only resolves.
    Sealed,
}

/// A radix trie mapping path patterns and scopes to handlers.
pub struct RouteTrie<H> {
    root: TrieNode<H>,
    phase: Phase,
    len: usize,
}

impl<H> Default for RouteTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTrie<H> {
    /// Create an empty trie in the build phase.
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            phase: Phase::Building,
            len: 0,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once [`seal`](Self::seal) has been called.
    pub fn is_sealed(&self) -> bool {
        self.phase == Phase::Sealed
    }

    /// Number of registered endpoints and mounts.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register `handler` for `pattern` under `scope`.
    ///
    /// # Errors
    ///
    /// - [`BuildError::Sealed`] once the trie is sealed.
    /// - [`BuildError::InvalidPattern`] if the pattern does not parse or is
    ///   structurally incompatible with routes already registered.
    /// - [`BuildError::RouteConflict`] if the same path already has a handler
    ///   for `scope`.
    pub fn register(
        &mut self,
        pattern: &str,
        scope: impl Into<Scope>,
        handler: H,
    ) -> Result<(), BuildError> {
        self.ensure_building()?;
        let scope = scope.into();
        let parsed =
            PathPattern::parse(pattern).map_err(|err| BuildError::invalid(pattern, err))?;
        let endpoint = Endpoint::new(&parsed, scope, handler);
        self.root.insert(&parsed, endpoint)?;
        self.len += 1;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(pattern = parsed.as_str(), %scope, "registered route");
        }
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_route(
        mut self,
        pattern: &str,
        scope: impl Into<Scope>,
        handler: H,
    ) -> Result<Self, BuildError> {
        self.register(pattern, scope, handler)?;
        Ok(self)
    }

    /// Mount `app` at a literal-only `pattern`.
    ///
    /// Every path below the mount point is handed to `app` with the mount
    /// prefix stripped, and `app`'s result is returned as is.
    pub fn mount<R>(&mut self, pattern: &str, app: R) -> Result<(), BuildError>
    where
        R: Resolve<H> + 'static,
    {
        self.ensure_building()?;
        let parsed =
            PathPattern::parse(pattern).map_err(|err| BuildError::invalid(pattern, err))?;
        self.root.insert_mount(&parsed, Box::new(app))?;
        self.len += 1;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(pattern = parsed.as_str(), "mounted application");
        }
        Ok(())
    }

    /// Builder-style [`mount`](Self::mount).
    pub fn with_mount<R>(mut self, pattern: &str, app: R) -> Result<Self, BuildError>
    where
        R: Resolve<H> + 'static,
    {
        self.mount(pattern, app)?;
        Ok(self)
    }

    /// Freeze the trie. Sealing twice is a no-op.
    pub fn seal(&mut self) {
        if self.phase == Phase::Sealed {
            return;
        }
        self.phase = Phase::Sealed;

        #[cfg(feature = "tracing")]
        {
            tracing::info!(routes = self.len, "route trie sealed");
        }
    }

    /// Builder-style [`seal`](Self::seal).
    pub fn sealed(mut self) -> Self {
        self.seal();
        self
    }

    /// Resolve `path` for `scope`.
    pub fn resolve<'r>(&'r self, path: &str, scope: Scope) -> MatchResult<'r, H> {
        let result = self.root.resolve(path, scope);

        #[cfg(feature = "tracing")]
        {
            let outcome = match &result {
                MatchResult::Matched(m) => m.endpoint.pattern(),
                MatchResult::NotFound => "not found",
                MatchResult::MethodNotAllowed { .. } => "method not allowed",
            };
            tracing::trace!(path, %scope, outcome, "resolved");
        }
        result
    }

    fn ensure_building(&self) -> Result<(), BuildError> {
        match self.phase {
            Phase::Building => Ok(()),
            Phase::Sealed => Err(BuildError::Sealed),
        }
    }
}

impl<H: Send + Sync> Resolve<H> for RouteTrie<H> {
    fn resolve<'r>(&'r self, path: &str, scope: Scope) -> MatchResult<'r, H> {
        RouteTrie::resolve(self, path, scope)
    }
}

impl<H> fmt::Debug for RouteTrie<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTrie")
            .field("phase", &self.phase)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routrie_core::{Method, PatternError};

    #[test]
    fn test_register_and_resolve() {
        let mut trie = RouteTrie::new();
        trie.register("/users/{id:int}", Scope::GET, 1).unwrap();
        trie.register("/users/{id:int}", Method::Delete, 2).unwrap();
        assert_eq!(trie.len(), 2);

        let matched = trie.resolve("/users/7", Scope::GET).matched().unwrap();
        assert_eq!(*matched.handler(), 1);
        assert_eq!(matched.param("id"), Some("7"));

        let deleted = trie.resolve("/users/7", Scope::Http(Method::Delete));
        assert_eq!(deleted.matched().map(|m| *m.handler()), Some(2));
    }

    #[test]
    fn test_seal_rejects_registration() {
        let mut trie = RouteTrie::new();
        assert_eq!(trie.phase(), Phase::Building);
        trie.register("/", Scope::GET, ()).unwrap();
        trie.seal();
        trie.seal();
        assert!(trie.is_sealed());

        assert_eq!(trie.register("/late", Scope::GET, ()), Err(BuildError::Sealed));
        assert_eq!(trie.len(), 1);
        assert!(trie.resolve("/", Scope::GET).is_matched());
    }

    #[test]
    fn test_invalid_pattern_is_reported_with_source() {
        let mut trie: RouteTrie<()> = RouteTrie::new();
        let err = trie.register("/a/{id:nope}", Scope::GET, ()).unwrap_err();
        assert!(matches!(
            err.pattern_error(),
            Some(PatternError::UnknownParameterType(_))
        ));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let trie = RouteTrie::new()
            .with_route("/a", Scope::GET, "a")
            .and_then(|t| t.with_route("/b", Scope::GET, "b"))
            .unwrap()
            .sealed();
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.phase(), Phase::Sealed);
        assert_eq!(
            trie.resolve("/b", Scope::GET).matched().map(|m| *m.handler()),
            Some("b")
        );
    }

    #[test]
    fn test_nested_trie_mount() {
        let mut api = RouteTrie::new();
        api.register("/widgets/{id:int}", Scope::GET, "widget").unwrap();
        let mut app = RouteTrie::new();
        app.mount("/api/v1", api.sealed()).unwrap();
        app.seal();

        let matched = app.resolve("/api/v1/widgets/3", Scope::GET).matched().unwrap();
        assert_eq!(*matched.handler(), "widget");
        assert_eq!(matched.param("id"), Some("3"));
        assert!(app.resolve("/api/v1", Scope::GET).is_not_found());
    }

    #[test]
    fn test_debug_output() {
        let trie: RouteTrie<()> = RouteTrie::new();
        assert_eq!(format!("{trie:?}"), "RouteTrie { phase: Building, len: 0, .. }");
    }
}
