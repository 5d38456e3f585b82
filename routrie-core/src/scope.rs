//! Dispatch keys for handlers stored on a trie node.
//!
//! Every endpoint is registered for exactly one [`Scope`]: a concrete HTTP
//! method, the websocket scope, or the generic (protocol-level) scope whose
//! handler receives every request reaching its node.

use crate::error::ParseScopeError;
use std::{fmt, str::FromStr};

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `HEAD`
    Head,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `OPTIONS`
    Options,
    /// `TRACE`
    Trace,
    /// `CONNECT`
    Connect,
}

impl Method {
    /// All methods, in their sort order.
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Options,
        Method::Trace,
        Method::Connect,
    ];

    /// The method token as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ParseScopeError;

    /// Method tokens are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ParseScopeError(s.to_string()))
    }
}

/// The kind of handler a request is looking for.
///
/// Ordering is HTTP methods (in [`Method`] order), then websocket, then
/// generic; allowed-scope lists are reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// A plain HTTP request with the given method.
    Http(Method),
    /// A websocket connection.
    WebSocket,
    /// A protocol-level handler that accepts any request at its node.
    Generic,
}

impl Scope {
    /// `GET` scope.
    pub const GET: Scope = Scope::Http(Method::Get);
    /// `POST` scope.
    pub const POST: Scope = Scope::Http(Method::Post);

    /// Returns the HTTP method if this is an HTTP scope.
    pub const fn method(self) -> Option<Method> {
        match self {
            Scope::Http(method) => Some(method),
            _ => None,
        }
    }

    /// The key under which this scope is stored.
    pub const fn as_str(self) -> &'static str {
        match self {
            Scope::Http(method) => method.as_str(),
            Scope::WebSocket => "websocket",
            Scope::Generic => "generic",
        }
    }
}

impl From<Method> for Scope {
    fn from(method: Method) -> Self {
        Scope::Http(method)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "websocket" => Ok(Scope::WebSocket),
            "generic" | "asgi" => Ok(Scope::Generic),
            other => other.parse().map(Scope::Http),
        }
    }
}
