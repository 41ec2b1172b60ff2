//! Numeric kinds and the promotion lattice.

use std::fmt;

use tmplkit_foundation::Value;

/// The numeric representation a value carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Not a number: booleans, nil, strings that are not numeric input,
    /// collections, and invalid results.
    NotANumber,
    /// 32-bit signed integer (the default integer kind).
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// Decimal text awaiting resolution to `Int64` or `Float64`.
    TextNumber,
}

impl Kind {
    /// Position in the promotion lattice `Int32 < Int64 < Float32 < Float64`.
    ///
    /// `TextNumber` and `NotANumber` have no rank: text must be resolved
    /// before promotion, and nothing promotes out of `NotANumber`.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Int32 => Some(0),
            Self::Int64 => Some(1),
            Self::Float32 => Some(2),
            Self::Float64 => Some(3),
            Self::TextNumber | Self::NotANumber => None,
        }
    }

    /// Returns the common kind for two resolved kinds.
    ///
    /// The result is the same for `(a, b)` and `(b, a)`. Either side being
    /// `NotANumber` (or unresolved text) yields `NotANumber`.
    #[must_use]
    pub fn promote(self, other: Self) -> Self {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => {
                if a >= b {
                    self
                } else {
                    other
                }
            }
            _ => Self::NotANumber,
        }
    }

    /// Returns true for the two integer kinds.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int32 | Self::Int64)
    }

    /// Returns true for the two float kinds.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotANumber => "NaN",
            Self::Int32 => "int",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::TextNumber => "text",
        };
        f.write_str(name)
    }
}

/// Classifies a value's numeric representation.
///
/// Strings and JSON numbers are `TextNumber` until resolved.
#[must_use]
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Int32(_) => Kind::Int32,
        Value::Int64(_) => Kind::Int64,
        Value::Float32(_) => Kind::Float32,
        Value::Float64(_) => Kind::Float64,
        Value::JsonNumber(_) | Value::String(_) => Kind::TextNumber,
        Value::Nil | Value::Bool(_) | Value::NaN | Value::List(_) | Value::Map(_) => {
            Kind::NotANumber
        }
    }
}
