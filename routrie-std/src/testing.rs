//! Testing utilities for routrie.
//!
//! - [`RecordingResolver`]: a mountable resolver that records every path it
//!   is asked to resolve and matches all of them

use routrie_core::{
    Endpoint, MatchResult, PathParams, PathPattern, PatternError, Resolve, RouteMatch, Scope,
};
use std::sync::{Arc, Mutex, PoisonError};

/// Calls recorded by a [`RecordingResolver`].
pub type CallLog = Arc<Mutex<Vec<(String, Scope)>>>;

/// A resolver that records the suffixes handed to it.
///
/// Every path matches its single generic endpoint, with the whole suffix
/// (minus the leading separator) bound to `rest`. Clones share one log, so
/// a clone kept by the test observes calls made through the mounted copy.
///
/// # Example
///
/// ```rust
/// use routrie_core::Scope;
/// use routrie_std::{RouteTrie, testing::RecordingResolver};
///
/// let recorder = RecordingResolver::new("sub-app").unwrap();
/// let mut trie = RouteTrie::new();
/// trie.mount("/sub", recorder.clone()).unwrap();
///
/// assert!(trie.resolve("/sub/a/b", Scope::GET).is_matched());
/// assert_eq!(recorder.calls(), vec![("/a/b".to_string(), Scope::GET)]);
/// ```
pub struct RecordingResolver<H> {
    endpoint: Arc<Endpoint<H>>,
    log: CallLog,
}

impl<H> RecordingResolver<H> {
    /// Create a recorder that answers with `handler`.
    pub fn new(handler: H) -> Result<Self, PatternError> {
        let pattern = PathPattern::parse("/{rest:path}")?;
        Ok(Self {
            endpoint: Arc::new(Endpoint::new(&pattern, Scope::Generic, handler)),
            log: CallLog::default(),
        })
    }

    /// The shared call log.
    pub fn log(&self) -> CallLog {
        Arc::clone(&self.log)
    }

    /// A snapshot of the recorded `(suffix, scope)` calls.
    pub fn calls(&self) -> Vec<(String, Scope)> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<H> Clone for RecordingResolver<H> {
    fn clone(&self) -> Self {
        Self {
            endpoint: Arc::clone(&self.endpoint),
            log: Arc::clone(&self.log),
        }
    }
}

impl<H: Send + Sync> Resolve<H> for RecordingResolver<H> {
    fn resolve<'r>(&'r self, path: &str, scope: Scope) -> MatchResult<'r, H> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_string(), scope));

        let mut params = PathParams::new();
        if let Some(def) = self.endpoint.parameters().first() {
            params.push(def.name(), path.trim_start_matches('/'));
        }
        MatchResult::Matched(RouteMatch {
            endpoint: self.endpoint.as_ref(),
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_matches() {
        let recorder = RecordingResolver::new(5u8).unwrap();
        let observer = recorder.clone();

        let matched = recorder.resolve("/x/y", Scope::POST).matched().unwrap();
        assert_eq!(*matched.handler(), 5);
        assert_eq!(matched.param("rest"), Some("x/y"));
        assert!(recorder.resolve("/", Scope::WebSocket).is_matched());

        assert_eq!(observer.count(), 2);
        assert_eq!(
            observer.calls(),
            vec![
                ("/x/y".to_string(), Scope::POST),
                ("/".to_string(), Scope::WebSocket)
            ]
        );
        let log = recorder.log();
        assert_eq!(log.lock().unwrap()[0].0, "/x/y");

        observer.clear();
        assert_eq!(recorder.count(), 0);
        assert!(log.lock().unwrap().is_empty());
    }
}
