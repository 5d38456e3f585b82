//! Handler entries stored on trie nodes.

use crate::{param::ParamDef, pattern::PathPattern, scope::Scope};

/// A handler registered for one scope at one trie position.
///
/// The handler `H` is opaque to the router: typically a middleware-wrapped
/// service or a function pointer. The pattern string identifies the route
/// and the parameter list gives callers the declared types for coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint<H> {
    handler: H,
    pattern: Box<str>,
    scope: Scope,
    parameters: Box<[ParamDef]>,
}

impl<H> Endpoint<H> {
    /// Create an endpoint for a parsed pattern.
    pub fn new(pattern: &PathPattern, scope: Scope, handler: H) -> Self {
        Self {
            handler,
            pattern: pattern.as_str().into(),
            scope,
            parameters: pattern.parameters().cloned().collect(),
        }
    }

    /// The registered handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The normalized pattern this endpoint was registered under.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The scope this endpoint serves.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The route's parameters, in path order.
    pub fn parameters(&self) -> &[ParamDef] {
        &self.parameters
    }

    /// Consume the endpoint, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }
}
