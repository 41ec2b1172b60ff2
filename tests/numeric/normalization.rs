//! Integration tests for classification, promotion, and coercion

use tmplkit_foundation::Value;
use tmplkit_numeric::{Kind, Number, classify, coerce, normalize};

// =============================================================================
// Classification
// =============================================================================

#[test]
fn classifies_representations() {
    assert_eq!(classify(&Value::Int32(1)), Kind::Int32);
    assert_eq!(classify(&Value::Int64(1)), Kind::Int64);
    assert_eq!(classify(&Value::Float32(1.0)), Kind::Float32);
    assert_eq!(classify(&Value::Float64(1.0)), Kind::Float64);
    assert_eq!(classify(&Value::json_number("1")), Kind::TextNumber);
    assert_eq!(classify(&Value::from("1")), Kind::TextNumber);
    assert_eq!(classify(&Value::Bool(true)), Kind::NotANumber);
    assert_eq!(classify(&Value::Nil), Kind::NotANumber);
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn promotion_picks_the_wider_kind() {
    let (a, b, kind) = normalize(&Value::Int32(2), &Value::Float32(0.5));
    assert_eq!(kind, Kind::Float32);
    assert_eq!((a, b), (Number::Float32(2.0), Number::Float32(0.5)));

    let (_, _, kind) = normalize(&Value::Int64(2), &Value::Float64(0.5));
    assert_eq!(kind, Kind::Float64);
}

#[test]
fn text_resolves_before_promotion() {
    let (a, b, kind) = normalize(&Value::json_number("3"), &Value::Int32(2));
    assert_eq!(kind, Kind::Int64);
    assert_eq!((a, b), (Number::Int64(3), Number::Int64(2)));

    let (a, _, kind) = normalize(&Value::json_number("2.5"), &Value::Int32(2));
    assert_eq!(kind, Kind::Float64);
    assert_eq!(a, Number::Float64(2.5));
}

#[test]
fn non_numbers_normalize_to_nan() {
    let (a, b, kind) = normalize(&Value::Bool(true), &Value::Int32(2));
    assert_eq!(kind, Kind::NotANumber);
    assert_eq!((a, b), (Number::NaN, Number::NaN));
}

// =============================================================================
// Coercion
// =============================================================================

#[test]
fn coercion_of_text() {
    assert_eq!(coerce(&Value::from("3"), Kind::Int64), Number::Int64(3));
    assert_eq!(coerce(&Value::from("3.5"), Kind::Float64), Number::Float64(3.5));
    assert_eq!(coerce(&Value::from("abc"), Kind::Int32), Number::Int32(0));
    assert_eq!(coerce(&Value::json_number("7"), Kind::TextNumber), Number::Int64(7));
}

#[test]
fn coercion_truncates_floats() {
    assert_eq!(coerce(&Value::Float64(2.9), Kind::Int32), Number::Int32(2));
    assert_eq!(coerce(&Value::Float64(-2.9), Kind::Int64), Number::Int64(-2));
    assert_eq!(tmplkit_numeric::to_i32(&Value::from("5.3")), 5);
}
