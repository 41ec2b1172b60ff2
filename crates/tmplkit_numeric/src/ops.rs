//! Arithmetic and comparison over normalized pairs.
//!
//! Integer arithmetic wraps on overflow. Every operation yields
//! [`Number::NaN`] when either side is not a number.

use std::cmp::Ordering;

use tmplkit_foundation::Value;

use crate::LOG_TARGET;
use crate::number::{Number, normalize};

/// Adds two values after promotion.
#[must_use]
pub fn add(a: &Value, b: &Value) -> Number {
    match normalize(a, b) {
        (Number::Int32(x), Number::Int32(y), _) => Number::Int32(x.wrapping_add(y)),
        (Number::Int64(x), Number::Int64(y), _) => Number::Int64(x.wrapping_add(y)),
        (Number::Float32(x), Number::Float32(y), _) => Number::Float32(x + y),
        (Number::Float64(x), Number::Float64(y), _) => Number::Float64(x + y),
        _ => Number::NaN,
    }
}

/// Subtracts `b` from `a` after promotion.
#[must_use]
pub fn subtract(a: &Value, b: &Value) -> Number {
    match normalize(a, b) {
        (Number::Int32(x), Number::Int32(y), _) => Number::Int32(x.wrapping_sub(y)),
        (Number::Int64(x), Number::Int64(y), _) => Number::Int64(x.wrapping_sub(y)),
        (Number::Float32(x), Number::Float32(y), _) => Number::Float32(x - y),
        (Number::Float64(x), Number::Float64(y), _) => Number::Float64(x - y),
        _ => Number::NaN,
    }
}

/// Multiplies two values after promotion.
#[must_use]
pub fn multiply(a: &Value, b: &Value) -> Number {
    match normalize(a, b) {
        (Number::Int32(x), Number::Int32(y), _) => Number::Int32(x.wrapping_mul(y)),
        (Number::Int64(x), Number::Int64(y), _) => Number::Int64(x.wrapping_mul(y)),
        (Number::Float32(x), Number::Float32(y), _) => Number::Float32(x * y),
        (Number::Float64(x), Number::Float64(y), _) => Number::Float64(x * y),
        _ => Number::NaN,
    }
}

/// Divides `a` by `b` after promotion.
///
/// Integer division truncates toward zero. A zero divisor yields `NaN` for
/// every kind, floats included, and is logged at `warn`.
#[must_use]
pub fn divide(a: &Value, b: &Value) -> Number {
    let (x, y, kind) = normalize(a, b);
    if y.is_zero() {
        log::warn!(target: LOG_TARGET, "divide: {a:?} / {b:?} as {kind} has a zero divisor");
        return Number::NaN;
    }
    match (x, y) {
        (Number::Int32(x), Number::Int32(y)) => Number::Int32(x.wrapping_div(y)),
        (Number::Int64(x), Number::Int64(y)) => Number::Int64(x.wrapping_div(y)),
        (Number::Float32(x), Number::Float32(y)) => Number::Float32(x / y),
        (Number::Float64(x), Number::Float64(y)) => Number::Float64(x / y),
        _ => Number::NaN,
    }
}

/// Remainder of `a` divided by `b` after promotion.
///
/// Defined only when both sides promote to an integer kind. Float operands
/// and a zero divisor yield `NaN`; the zero divisor is logged at `warn`.
#[must_use]
pub fn modulo(a: &Value, b: &Value) -> Number {
    let (x, y, kind) = normalize(a, b);
    if kind.is_float() {
        log::debug!(target: LOG_TARGET, "modulo: {a:?} % {b:?} promotes to {kind}");
        return Number::NaN;
    }
    if y.is_zero() {
        log::warn!(target: LOG_TARGET, "modulo: {a:?} % {b:?} as {kind} has a zero divisor");
        return Number::NaN;
    }
    match (x, y) {
        (Number::Int32(x), Number::Int32(y)) => Number::Int32(x.wrapping_rem(y)),
        (Number::Int64(x), Number::Int64(y)) => Number::Int64(x.wrapping_rem(y)),
        _ => Number::NaN,
    }
}

/// Orders two values after promotion.
///
/// Returns `None` when either side is not a number or is a float NaN.
#[must_use]
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match normalize(a, b) {
        (Number::Int32(x), Number::Int32(y), _) => Some(x.cmp(&y)),
        (Number::Int64(x), Number::Int64(y), _) => Some(x.cmp(&y)),
        (Number::Float32(x), Number::Float32(y), _) => x.partial_cmp(&y),
        (Number::Float64(x), Number::Float64(y), _) => x.partial_cmp(&y),
        _ => None,
    }
}

/// `a < b`; false if either side is not a number.
#[must_use]
pub fn is_less(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Less)
}

/// `a > b`; false if either side is not a number.
#[must_use]
pub fn is_greater(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Greater)
}

/// `a == b`; false if either side is not a number.
#[must_use]
pub fn is_equal(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Equal)
}

/// `a <= b`; false if either side is not a number.
#[must_use]
pub fn is_less_or_equal(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Less | Ordering::Equal))
}

/// `a >= b`; false if either side is not a number.
#[must_use]
pub fn is_greater_or_equal(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Greater | Ordering::Equal))
}
