//! Request path segmentation.
//!
//! Handles the common path shapes without allocating:
//! - Duplicate separators: `/path//to` yields `path`, `to`
//! - Trailing separator: `/path/` yields `path` (see [`has_trailing_slash`])
//! - Missing leading separator: `path/to` yields `path`, `to`

use std::borrow::Cow;

/// A lazy iterator over the non-empty segments of a path.
///
/// Each item carries the byte offset of the segment within the original
/// path, so callers can slice out everything that was not consumed yet.
#[derive(Debug, Clone)]
pub struct PathSegments<'p> {
    path: &'p str,
    pos: usize,
}

impl<'p> PathSegments<'p> {
    /// Start iterating over `path`.
    pub fn new(path: &'p str) -> Self {
        Self { path, pos: 0 }
    }

    /// The full path being iterated.
    pub fn path(&self) -> &'p str {
        self.path
    }

    /// The unconsumed part of the path, from the current position.
    pub fn rest(&self) -> &'p str {
        &self.path[self.pos..]
    }
}

impl<'p> Iterator for PathSegments<'p> {
    type Item = (usize, &'p str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.path.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos] == b'/' {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }
        let start = self.pos;
        let end = self.path[start..]
            .find('/')
            .map_or(bytes.len(), |idx| start + idx);
        self.pos = end;
        Some((start, &self.path[start..end]))
    }
}

/// Returns true if a non-root path ends with a separator.
pub fn has_trailing_slash(path: &str) -> bool {
    path.len() > 1 && path.ends_with('/') && path.bytes().any(|b| b != b'/')
}

/// Returns the suffix of `path` starting at segment offset `start`, with a
/// single leading separator. An empty suffix becomes `/`.
pub fn suffix_from(path: &str, start: usize) -> Cow<'_, str> {
    if start >= path.len() {
        return Cow::Borrowed("/");
    }
    match start.checked_sub(1) {
        // `start` is a segment offset, so the byte before it is a separator.
        Some(sep) => Cow::Borrowed(&path[sep..]),
        None => Cow::Owned(format!("/{path}")),
    }
}

/// Normalizes a path: leading `/`, no duplicate or trailing separators.
///
/// Returns the input unchanged when it is already normalized.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let is_normal = path.starts_with('/')
        && !path.contains("//")
        && (path == "/" || !path.ends_with('/'));
    if is_normal {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len() + 1);
    for (_, segment) in PathSegments::new(path) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    Cow::Owned(out)
}
