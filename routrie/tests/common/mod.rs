#![allow(dead_code)]

use routrie::{MatchResult, Method, RouteTrie, Scope};

// ============================================================================
// Test Handlers
// ============================================================================

/// Handler used across the integration tests: just a name.
pub type Handler = &'static str;

pub const PUT: Scope = Scope::Http(Method::Put);
pub const DELETE: Scope = Scope::Http(Method::Delete);

// ============================================================================
// Fixtures
// ============================================================================

/// A sealed trie with literal, typed, catch-all and websocket routes.
pub fn sample_trie() -> RouteTrie<Handler> {
    let mut trie = RouteTrie::new();
    let routes: &[(&str, Scope, Handler)] = &[
        ("/", Scope::GET, "index"),
        ("/health", Scope::GET, "health"),
        ("/users", Scope::GET, "list_users"),
        ("/users", Scope::POST, "create_user"),
        ("/users/me", Scope::GET, "current_user"),
        ("/users/{id:int}", Scope::GET, "get_user"),
        ("/users/{id:int}", DELETE, "delete_user"),
        ("/users/{name}", Scope::GET, "get_user_by_name"),
        ("/users/{id:int}/posts/{post:uuid}", Scope::GET, "get_post"),
        ("/events/{day:date}", Scope::GET, "events_on"),
        ("/files/{rest:path}", Scope::GET, "serve_file"),
        ("/chat", Scope::WebSocket, "chat_socket"),
    ];
    for (pattern, scope, handler) in routes {
        trie.register(pattern, *scope, *handler)
            .unwrap_or_else(|err| panic!("failed to register {pattern}: {err}"));
    }
    trie.sealed()
}

// ============================================================================
// Assertions
// ============================================================================

/// The matched handler name, or `None`.
pub fn handler_of(result: MatchResult<'_, Handler>) -> Option<Handler> {
    result.matched().map(|m| *m.handler())
}

/// Resolve and unwrap a match, returning the handler and its parameters.
pub fn expect_match(
    trie: &RouteTrie<Handler>,
    path: &str,
    scope: Scope,
) -> (Handler, Vec<(String, String)>) {
    match trie.resolve(path, scope) {
        MatchResult::Matched(m) => {
            let params = m
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            (*m.handler(), params)
        }
        other => panic!("expected {scope} {path} to match, got {other:?}"),
    }
}

/// Owned `(name, value)` pairs for comparing with [`expect_match`].
pub fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
