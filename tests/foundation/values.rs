//! Integration tests for Value
//!
//! Tests construction, truthiness, equality, type names, and display.

use std::collections::HashSet;

use tmplkit_foundation::{Type, Value};

// =============================================================================
// Truthiness
// =============================================================================

#[test]
fn falsy_values() {
    for v in [
        Value::Nil,
        Value::Bool(false),
        Value::Int32(0),
        Value::Int64(0),
        Value::Float64(0.0),
        Value::json_number("0"),
        Value::json_number("0.0"),
        Value::NaN,
        Value::from(""),
        Value::from(Vec::<i32>::new()),
        Value::record(Vec::<(&str, i32)>::new()),
    ] {
        assert!(!v.is_truthy(), "{v:?} should be falsy");
    }
}

#[test]
fn truthy_values() {
    for v in [
        Value::Bool(true),
        Value::Int32(-1),
        Value::Float32(0.5),
        Value::json_number("3"),
        Value::from("false"),
        Value::from(vec![0]),
        Value::record([("a", Value::Nil)]),
    ] {
        assert!(v.is_truthy(), "{v:?} should be truthy");
    }
}

// =============================================================================
// Equality and hashing
// =============================================================================

#[test]
fn representations_are_distinct() {
    assert_ne!(Value::Int32(3), Value::Int64(3));
    assert_ne!(Value::json_number("3"), Value::from("3"));
    assert_eq!(Value::NaN, Value::NaN);
}

#[test]
fn values_hash_consistently() {
    let set: HashSet<Value> = [
        Value::Int32(1),
        Value::Int32(1),
        Value::Float64(1.0),
        Value::from("1"),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 3);
}

// =============================================================================
// Types and display
// =============================================================================

#[test]
fn value_types() {
    assert_eq!(Value::Int32(1).value_type(), Type::Int32);
    assert_eq!(Value::json_number("1").value_type(), Type::JsonNumber);
    assert!(Value::json_number("1").is_number());
    assert!(!Value::from("1").is_number());
    assert_eq!(Type::JsonNumber.name(), "json.Number");
}

#[test]
fn display_matches_template_output() {
    assert_eq!(Value::Nil.to_string(), "<no value>");
    assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "[1 2 3]");
    assert_eq!(
        Value::record([("b", 2), ("a", 1)]).to_string(),
        "map[a:1 b:2]"
    );
    assert_eq!(Value::json_number("2.50").to_string(), "2.50");
}

#[test]
fn map_lookup() {
    let rec = Value::record([("name", "ada")]);
    assert_eq!(rec.get("name"), Some(&Value::from("ada")));
    assert_eq!(rec.get("missing"), None);
    assert_eq!(Value::Int32(1).get("name"), None);
}
