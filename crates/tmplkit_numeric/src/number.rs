//! Resolved numbers, text resolution and width conversion.

use std::fmt;

use tmplkit_foundation::Value;

use crate::kind::Kind;

/// A number resolved to one of the four native widths, or `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 32-bit float.
    Float32(f32),
    /// 64-bit float.
    Float64(f64),
    /// No valid numeric result.
    NaN,
}

impl Number {
    /// Resolves a value to a number.
    ///
    /// Native numbers keep their width. Text (JSON numbers and strings) is
    /// tried as a 64-bit integer, then as a 64-bit float; text that parses as
    /// neither becomes `Int32(0)`. Everything else is `NaN`.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Int32(n) => Self::Int32(*n),
            Value::Int64(n) => Self::Int64(*n),
            Value::Float32(n) => Self::Float32(*n),
            Value::Float64(n) => Self::Float64(*n),
            Value::JsonNumber(text) | Value::String(text) => Self::from_text(text),
            _ => Self::NaN,
        }
    }

    /// Resolves decimal text: `Int64` if it parses as an integer, `Float64`
    /// if it parses as a float, otherwise `Int32(0)`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if let Ok(n) = text.parse::<i64>() {
            Self::Int64(n)
        } else if let Ok(n) = text.parse::<f64>() {
            Self::Float64(n)
        } else {
            Self::Int32(0)
        }
    }

    /// The kind this number carries.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Int32(_) => Kind::Int32,
            Self::Int64(_) => Kind::Int64,
            Self::Float32(_) => Kind::Float32,
            Self::Float64(_) => Kind::Float64,
            Self::NaN => Kind::NotANumber,
        }
    }

    /// Returns false for `NaN`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::NaN)
    }

    /// Returns true for a zero of any width. `NaN` is not zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int32(n) => n == 0,
            Self::Int64(n) => n == 0,
            Self::Float32(n) => n == 0.0,
            Self::Float64(n) => n == 0.0,
            Self::NaN => false,
        }
    }

    /// Converts to another width.
    ///
    /// Float to integer truncates toward zero and saturates at the target's
    /// bounds. Converting to `NotANumber` or `TextNumber` yields `NaN`, as
    /// does converting `NaN` to anything.
    #[must_use]
    pub fn convert(self, kind: Kind) -> Self {
        if !self.is_valid() {
            return Self::NaN;
        }
        match kind {
            Kind::Int32 => Self::Int32(self.to_i32()),
            Kind::Int64 => Self::Int64(self.to_i64()),
            Kind::Float32 => Self::Float32(self.to_f32()),
            Kind::Float64 => Self::Float64(self.to_f64()),
            Kind::NotANumber | Kind::TextNumber => Self::NaN,
        }
    }

    /// Reads this number as an `i32`; `NaN` reads as 0.
    ///
    /// Values outside the `i32` range clamp to its bounds, from either
    /// width of integer or float.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_i32(self) -> i32 {
        match self {
            Self::Int32(n) => n,
            Self::Int64(n) => i32::try_from(n).unwrap_or(if n < 0 { i32::MIN } else { i32::MAX }),
            Self::Float32(n) => n as i32,
            Self::Float64(n) => n as i32,
            Self::NaN => 0,
        }
    }

    /// Reads this number as an `i64`; `NaN` reads as 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_i64(self) -> i64 {
        match self {
            Self::Int32(n) => i64::from(n),
            Self::Int64(n) => n,
            Self::Float32(n) => n as i64,
            Self::Float64(n) => n as i64,
            Self::NaN => 0,
        }
    }

    /// Reads this number as an `f32`; `NaN` reads as 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn to_f32(self) -> f32 {
        match self {
            Self::Int32(n) => n as f32,
            Self::Int64(n) => n as f32,
            Self::Float32(n) => n,
            Self::Float64(n) => n as f32,
            Self::NaN => 0.0,
        }
    }

    /// Reads this number as an `f64`; `NaN` reads as 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int32(n) => f64::from(n),
            Self::Int64(n) => n as f64,
            Self::Float32(n) => f64::from(n),
            Self::Float64(n) => n,
            Self::NaN => 0.0,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int32(n) => Self::Int32(n),
            Number::Int64(n) => Self::Int64(n),
            Number::Float32(n) => Self::Float32(n),
            Number::Float64(n) => Self::Float64(n),
            Number::NaN => Self::NaN,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(n) => write!(f, "{n}"),
            Self::Int64(n) => write!(f, "{n}"),
            Self::Float32(n) => write!(f, "{n}"),
            Self::Float64(n) => write!(f, "{n}"),
            Self::NaN => f.write_str("NaN"),
        }
    }
}

/// Brings two values to a common numeric kind.
///
/// Text is resolved first, then both sides are converted to the higher of
/// the two kinds under `Int32 < Int64 < Float32 < Float64`. If either side
/// is not a number the kind is `NotANumber` and both numbers are `NaN`.
///
/// The kind is the same whichever order the values are given in.
#[must_use]
pub fn normalize(a: &Value, b: &Value) -> (Number, Number, Kind) {
    let x = Number::from_value(a);
    let y = Number::from_value(b);
    let kind = x.kind().promote(y.kind());
    (x.convert(kind), y.convert(kind), kind)
}

/// Converts a value to the given kind.
///
/// `Kind::TextNumber` resolves text without forcing a width; native
/// numbers pass through unchanged. `Kind::NotANumber` always yields `NaN`.
#[must_use]
pub fn coerce(value: &Value, kind: Kind) -> Number {
    let n = Number::from_value(value);
    match kind {
        Kind::TextNumber => n,
        _ => n.convert(kind),
    }
}

/// Reads any value as an `i32`. Non-numbers read as 0.
#[must_use]
pub fn to_i32(value: &Value) -> i32 {
    Number::from_value(value).to_i32()
}

/// Reads any value as an `i64`. Non-numbers read as 0.
#[must_use]
pub fn to_i64(value: &Value) -> i64 {
    Number::from_value(value).to_i64()
}

/// Reads any value as an `f32`. Non-numbers read as 0.
#[must_use]
pub fn to_f32(value: &Value) -> f32 {
    Number::from_value(value).to_f32()
}

/// Reads any value as an `f64`. Non-numbers read as 0.
#[must_use]
pub fn to_f64(value: &Value) -> f64 {
    Number::from_value(value).to_f64()
}
