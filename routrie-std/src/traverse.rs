//! Route traversal.
//!
//! Resolution is a single greedy walk from the root. At every node the
//! children are tried in a fixed priority order:
//!
//! 1. the literal child equal to the segment,
//! 2. the parameter children, in registration order, first type that
//!    accepts the segment,
//! 3. the catch-all child, which takes this and every remaining segment.
//!
//! There is no backtracking into lower-priority siblings once a child is
//! taken, so a lookup costs one step per path segment no matter how many
//! routes are registered. A mount node ends the walk and hands the rest of
//! the path to the mounted resolver.

use crate::node::TrieNode;
use routrie_core::{
    AllowedScopes, Endpoint, MatchResult, PathParams, PathSegments, Resolve, RouteMatch, Scope,
    path::{has_trailing_slash, suffix_from},
};
use std::borrow::Cow;

impl<H> TrieNode<H> {
    /// Resolve `path` for `scope` starting at this node.
    pub(crate) fn resolve<'r>(&'r self, path: &str, scope: Scope) -> MatchResult<'r, H> {
        let mut node = self;
        let mut values: Vec<Cow<'_, str>> = Vec::new();
        let mut tail_bound = false;

        for (start, segment) in PathSegments::new(path) {
            if let Some(app) = node.mounted() {
                return delegate(app, &suffix_from(path, start), scope);
            }
            if let Some(child) = node.statics.get(segment) {
                node = child;
                continue;
            }
            if let Some(child) = node.match_param(segment) {
                values.push(Cow::Borrowed(segment));
                node = child;
                continue;
            }
            if let Some(child) = node.catch_all_child() {
                values.push(tail_value(&path[start..]));
                node = child;
                tail_bound = true;
                break;
            }
            return MatchResult::NotFound;
        }

        if let Some(app) = node.mounted() {
            return delegate(app, &suffix_from(path, path.len()), scope);
        }

        // An empty tail still reaches the catch-all: always after a trailing
        // separator, otherwise only when this node serves nothing itself.
        if !tail_bound {
            if let Some(child) = node.catch_all_child() {
                if has_trailing_slash(path) || node.handlers.is_empty() {
                    values.push(Cow::Borrowed(""));
                    node = child;
                }
            }
        }

        node.dispatch(scope, values)
    }

    /// Select the endpoint at a terminal node.
    fn dispatch<'r>(&'r self, scope: Scope, values: Vec<Cow<'_, str>>) -> MatchResult<'r, H> {
        let key = if self.is_generic() { Scope::Generic } else { scope };
        match self.handlers.get(&key) {
            Some(endpoint) => MatchResult::Matched(RouteMatch {
                endpoint,
                params: bind(endpoint, values),
            }),
            None if self.handlers.is_empty() => MatchResult::NotFound,
            None => MatchResult::MethodNotAllowed {
                allowed: self.handlers.keys().copied().collect::<AllowedScopes>(),
            },
        }
    }
}

/// Bind captured values to the endpoint's parameter names, in path order.
fn bind<'r, H>(endpoint: &'r Endpoint<H>, values: Vec<Cow<'_, str>>) -> PathParams<'r> {
    debug_assert_eq!(endpoint.parameters().len(), values.len());
    let mut params = PathParams::new();
    for (def, value) in endpoint.parameters().iter().zip(values) {
        params.push(def.name(), value);
    }
    params
}

/// The catch-all value: remaining segments joined by single separators.
fn tail_value(rest: &str) -> Cow<'_, str> {
    let tail = rest.trim_end_matches('/');
    if !tail.contains("//") {
        return Cow::Borrowed(tail);
    }
    let segments: Vec<&str> = PathSegments::new(tail).map(|(_, s)| s).collect();
    Cow::Owned(segments.join("/"))
}

fn delegate<'r, H>(app: &'r dyn Resolve<H>, suffix: &str, scope: Scope) -> MatchResult<'r, H> {
    #[cfg(feature = "tracing")]
    {
        tracing::trace!(suffix, %scope, "delegating to mounted application");
    }
    app.resolve(suffix, scope)
}
