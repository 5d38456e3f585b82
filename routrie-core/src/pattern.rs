//! Route pattern parsing.
//!
//! Converts pattern strings like `/users/{id:int}/files/{rest:path}` into an
//! ordered list of classified [`Segment`]s.
//!
//! # Syntax
//!
//! | Segment | Meaning |
//! |---------|---------|
//! | `users` | Literal, matched by exact string equality |
//! | `{id}` | Parameter of type `str` |
//! | `{id:int}` | Parameter of the named type |
//! | `{rest:path}` | Catch-all, must be the final segment |

use crate::{
    error::PatternError,
    param::{ParamDef, ParamType},
    path::{PathSegments, normalize_path},
};
use std::fmt;

/// One classified segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matched by exact string equality.
    Literal(Box<str>),
    /// A typed parameter consuming exactly one path segment.
    Param(ParamDef),
    /// A `path` parameter consuming every remaining segment.
    CatchAll(ParamDef),
}

impl Segment {
    /// Returns the parameter definition for parameter and catch-all segments.
    pub fn param(&self) -> Option<&ParamDef> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param(def) | Segment::CatchAll(def) => Some(def),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => f.write_str(s),
            Segment::Param(def) | Segment::CatchAll(def) => def.fmt(f),
        }
    }
}

/// A parsed, normalized route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    normalized: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse and validate a pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] for malformed parameter segments, empty
    /// names, unknown types, duplicate names, or a catch-all that is not last.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let normalized = normalize_path(pattern).into_owned();
        let mut segments: Vec<Segment> = Vec::new();

        for (_, raw) in PathSegments::new(&normalized) {
            if let Some(Segment::CatchAll(def)) = segments.last() {
                return Err(PatternError::CatchAllNotLast(def.name().to_string()));
            }
            let segment = parse_segment(raw)?;
            if let Some(def) = segment.param() {
                let mut seen = segments.iter().filter_map(Segment::param);
                if seen.any(|prev| prev.name() == def.name()) {
                    return Err(PatternError::DuplicateParameter(def.name().to_string()));
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            normalized,
            segments,
        })
    }

    /// The normalized pattern string.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The classified segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The declared parameters, in order of appearance.
    pub fn parameters(&self) -> impl Iterator<Item = &ParamDef> {
        self.segments.iter().filter_map(Segment::param)
    }

    /// Returns true if every segment is a literal.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Literal(_)))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

fn parse_segment(raw: &str) -> Result<Segment, PatternError> {
    let Some(inner) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
        if raw.contains(['{', '}']) {
            return Err(PatternError::MalformedSegment(raw.to_string()));
        }
        return Ok(Segment::Literal(raw.into()));
    };
    if inner.contains(['{', '}']) {
        return Err(PatternError::MalformedSegment(raw.to_string()));
    }

    let (name, kind) = match inner.split_once(':') {
        Some((name, kind)) => (name.trim(), kind.trim().parse::<ParamType>()?),
        None => (inner.trim(), ParamType::Str),
    };
    if name.is_empty() {
        return Err(PatternError::EmptyParameterName);
    }

    let def = ParamDef::new(name, kind);
    Ok(if kind.is_catch_all() {
        Segment::CatchAll(def)
    } else {
        Segment::Param(def)
    })
}
