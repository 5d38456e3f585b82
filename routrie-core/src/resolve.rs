//! # Resolution Layer
//!
//! A resolver maps a concrete request path and [`Scope`] to exactly one
//! outcome: a matched endpoint with its raw parameter values, "not found",
//! or "method not allowed" with the scopes that *are* served at that path.
//!
//! The route trie implements [`Resolve`], and so can anything mounted into
//! it: a mount hands the unmatched suffix of the path to the mounted
//! resolver and returns its result unchanged.

use crate::{endpoint::Endpoint, param::ParamType, scope::Scope};
use std::{collections::HashMap, sync::Arc};

/// Raw path parameter values, keyed by declared name.
///
/// Values are not coerced; each one has been validated against its declared
/// type, which is available through [`RouteMatch::param_type`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams<'r> {
    entries: Vec<(&'r str, String)>,
}

impl<'r> PathParams<'r> {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value. Later bindings do not replace earlier ones.
    pub fn push(&mut self, name: &'r str, value: impl Into<String>) {
        self.entries.push((name, value.into()));
    }

    /// Get a value by parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&'r str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters were bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into an owned map.
    pub fn into_map(self) -> HashMap<String, String> {
        self.entries
            .into_iter()
            .map(|(n, v)| (n.to_string(), v))
            .collect()
    }
}

/// A matched endpoint with extracted parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'r, H> {
    /// The matched endpoint.
    pub endpoint: &'r Endpoint<H>,
    /// Extracted path parameters.
    pub params: PathParams<'r>,
}

impl<'r, H> RouteMatch<'r, H> {
    /// The matched handler.
    pub fn handler(&self) -> &'r H {
        self.endpoint.handler()
    }

    /// Get a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// The declared type of a parameter, for coercing its raw value.
    pub fn param_type(&self, name: &str) -> Option<ParamType> {
        self.endpoint
            .parameters()
            .iter()
            .find(|def| def.name() == name)
            .map(|def| def.kind())
    }
}

/// Scopes served at a path that did not serve the requested one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedScopes {
    scopes: Vec<Scope>,
}

impl AllowedScopes {
    /// Create a normalized (sorted, de-duplicated) allow list.
    pub fn new(mut scopes: Vec<Scope>) -> Self {
        scopes.sort();
        scopes.dedup();
        Self { scopes }
    }

    /// Access the normalized scopes.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Check whether a scope is allowed.
    pub fn contains(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }

    /// Format the HTTP methods as an `Allow` header value.
    pub fn header_value(&self) -> String {
        let mut out = String::new();
        for method in self.scopes.iter().filter_map(|scope| scope.method()) {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(method.as_str());
        }
        out
    }
}

impl FromIterator<Scope> for AllowedScopes {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Result of resolving a path and scope.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult<'r, H> {
    /// A handler matched the path and scope.
    Matched(RouteMatch<'r, H>),
    /// No route matched the path.
    NotFound,
    /// The path matched but no handler serves the requested scope.
    MethodNotAllowed {
        /// The scopes served at this path.
        allowed: AllowedScopes,
    },
}

impl<'r, H> MatchResult<'r, H> {
    /// Returns true if a handler matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    /// Returns true if no route matched the path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MatchResult::NotFound)
    }

    /// Returns the match, if any.
    pub fn matched(self) -> Option<RouteMatch<'r, H>> {
        match self {
            MatchResult::Matched(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the allowed scopes for a method mismatch.
    pub fn allowed(&self) -> Option<&AllowedScopes> {
        match self {
            MatchResult::MethodNotAllowed { allowed } => Some(allowed),
            _ => None,
        }
    }
}

/// The resolver interface shared by route tries and mounted applications.
///
/// Resolution is synchronous, never blocks and never mutates, so a resolver
/// can be shared across any number of request-handling tasks.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve paths to handlers of type `{H}`",
    label = "missing `Resolve` implementation",
    note = "Implement `Resolve<{H}>` to mount this type or use it as a router."
)]
pub trait Resolve<H>: Send + Sync {
    /// Resolve `path` for `scope`.
    fn resolve<'r>(&'r self, path: &str, scope: Scope) -> MatchResult<'r, H>;
}

impl<H, T> Resolve<H> for Arc<T>
where
    T: Resolve<H> + ?Sized,
{
    fn resolve<'r>(&'r self, path: &str, scope: Scope) -> MatchResult<'r, H> {
        (**self).resolve(path, scope)
    }
}

impl<H, T> Resolve<H> for Box<T>
where
    T: Resolve<H> + ?Sized,
{
    fn resolve<'r>(&'r self, path: &str, scope: Scope) -> MatchResult<'r, H> {
        (**self).resolve(path, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, PathPattern};

    struct Fixed(Endpoint<u32>);

    impl Resolve<u32> for Fixed {
        fn resolve<'r>(&'r self, path: &str, _scope: Scope) -> MatchResult<'r, u32> {
            if path == "/" {
                MatchResult::Matched(RouteMatch {
                    endpoint: &self.0,
                    params: PathParams::new(),
                })
            } else {
                MatchResult::NotFound
            }
        }
    }

    #[test]
    fn test_path_params() {
        let mut params = PathParams::new();
        params.push("id", "42");
        params.push("rest", "a/b");
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("id", "42"), ("rest", "a/b")]);
        assert_eq!(params.into_map().get("rest").map(String::as_str), Some("a/b"));
    }

    #[test]
    fn test_allowed_scopes() {
        let allowed: AllowedScopes = [
            Scope::WebSocket,
            Scope::POST,
            Scope::GET,
            Scope::POST,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            allowed.scopes(),
            &[Scope::GET, Scope::POST, Scope::WebSocket]
        );
        assert!(allowed.contains(Scope::GET));
        assert!(!allowed.contains(Scope::Http(Method::Put)));
        assert_eq!(allowed.header_value(), "GET, POST");
    }

    #[test]
    fn test_resolve_through_smart_pointers() {
        let pattern = PathPattern::parse("/").unwrap();
        let fixed = Fixed(Endpoint::new(&pattern, Scope::GET, 7));

        let shared: Arc<dyn Resolve<u32>> = Arc::new(fixed);
        let boxed: Box<dyn Resolve<u32>> = Box::new(Arc::clone(&shared));

        let result = boxed.resolve("/", Scope::GET);
        assert_eq!(result.matched().map(|m| *m.handler()), Some(7));
        assert!(boxed.resolve("/other", Scope::GET).is_not_found());
    }

    #[test]
    fn test_match_result_helpers() {
        let result: MatchResult<'_, u32> = MatchResult::MethodNotAllowed {
            allowed: AllowedScopes::new(vec![Scope::GET]),
        };
        assert!(!result.is_matched());
        assert!(!result.is_not_found());
        assert_eq!(result.allowed().map(AllowedScopes::header_value).as_deref(), Some("GET"));
        assert!(result.matched().is_none());
    }
}
