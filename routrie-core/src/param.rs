//! Declared path parameter types.
//!
//! A parameter segment in a pattern (`{id:int}`) declares one of a closed set
//! of types. The router only *validates* a concrete segment against that type
//! to pick a child; converting the raw string into the declared type is left
//! to the caller, which can read the type back from the matched endpoint.

use crate::error::ParseParamTypeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// The declared type of a path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Any non-empty segment. The default for `{name}`.
    Str,
    /// A signed decimal integer.
    Int,
    /// A floating point number.
    Float,
    /// A decimal number, validated like [`ParamType::Float`].
    Decimal,
    /// A UUID in any of its textual forms.
    Uuid,
    /// A calendar date, `YYYY-MM-DD`.
    Date,
    /// An ISO-8601 date-time, with or without an offset.
    DateTime,
    /// A time of day, `HH:MM[:SS[.fraction]]`.
    Time,
    /// Catch-all: consumes every remaining segment.
    Path,
}

impl ParamType {
    /// The type name used in patterns.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamType::Str => "str",
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::Decimal => "decimal",
            ParamType::Uuid => "uuid",
            ParamType::Date => "date",
            ParamType::DateTime => "datetime",
            ParamType::Time => "time",
            ParamType::Path => "path",
        }
    }

    /// Returns true for the catch-all type.
    pub const fn is_catch_all(self) -> bool {
        matches!(self, ParamType::Path)
    }

    /// Checks whether a raw segment is a valid value of this type.
    pub fn accepts(self, raw: &str) -> bool {
        match self {
            ParamType::Str => !raw.is_empty(),
            ParamType::Int => is_integer(raw),
            ParamType::Float | ParamType::Decimal => is_number(raw),
            ParamType::Uuid => Uuid::parse_str(raw).is_ok(),
            ParamType::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok(),
            ParamType::DateTime => {
                DateTime::parse_from_rfc3339(raw).is_ok() || raw.parse::<NaiveDateTime>().is_ok()
            }
            ParamType::Time => {
                NaiveTime::parse_from_str(raw, "%H:%M:%S%.f").is_ok()
                    || NaiveTime::parse_from_str(raw, "%H:%M").is_ok()
            }
            ParamType::Path => true,
        }
    }
}

fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// `f64::from_str` also takes "inf" and "NaN"; a number needs a digit.
fn is_number(raw: &str) -> bool {
    raw.bytes().any(|b| b.is_ascii_digit()) && raw.parse::<f64>().is_ok()
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = ParseParamTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "str" | "string" => ParamType::Str,
            "int" => ParamType::Int,
            "float" => ParamType::Float,
            "decimal" => ParamType::Decimal,
            "uuid" => ParamType::Uuid,
            "date" => ParamType::Date,
            "datetime" => ParamType::DateTime,
            "time" => ParamType::Time,
            "path" => ParamType::Path,
            other => return Err(ParseParamTypeError(other.to_string())),
        })
    }
}

/// A declared path parameter: its name and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamDef {
    name: Box<str>,
    kind: ParamType,
}

impl ParamDef {
    /// Create a parameter definition.
    pub fn new(name: impl Into<Box<str>>, kind: ParamType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    pub fn kind(&self) -> ParamType {
        self.kind
    }
}

impl fmt::Display for ParamDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}:{}}}", self.name, self.kind)
    }
}
