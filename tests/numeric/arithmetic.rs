//! Integration tests for arithmetic and comparison

use proptest::prelude::*;
use tmplkit_foundation::Value;
use tmplkit_numeric::{
    Number, add, compare, divide, is_equal, is_greater, is_less, modulo, multiply, subtract,
};

#[test]
fn mixed_arithmetic() {
    assert_eq!(add(&Value::Int32(1), &Value::Int32(1)), Number::Int32(2));
    assert_eq!(add(&Value::json_number("1"), &Value::Int32(1)), Number::Int64(2));
    assert_eq!(
        subtract(&Value::Float32(1.5), &Value::Int32(1)),
        Number::Float32(0.5)
    );
    assert_eq!(
        multiply(&Value::from("2"), &Value::Float64(1.5)),
        Number::Float64(3.0)
    );
    assert_eq!(divide(&Value::Int32(7), &Value::Int32(2)), Number::Int32(3));
    assert_eq!(modulo(&Value::Int64(7), &Value::Int32(4)), Number::Int64(3));
}

#[test]
fn undefined_operations_are_nan() {
    assert_eq!(divide(&Value::Int32(1), &Value::Int32(0)), Number::NaN);
    assert_eq!(divide(&Value::Float64(1.0), &Value::json_number("0")), Number::NaN);
    assert_eq!(modulo(&Value::Float64(5.0), &Value::Int32(2)), Number::NaN);
    assert_eq!(modulo(&Value::Int32(5), &Value::Int32(0)), Number::NaN);
    assert_eq!(add(&Value::Nil, &Value::Int32(1)), Number::NaN);
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(
        add(&Value::Int32(i32::MAX), &Value::Int32(1)),
        Number::Int32(i32::MIN)
    );
}

#[test]
fn comparisons_cross_representations() {
    assert!(is_greater(&Value::json_number("3"), &Value::Int32(2)));
    assert!(!is_greater(&Value::json_number("2"), &Value::Int32(2)));
    assert!(is_equal(&Value::Float64(2.0), &Value::Int64(2)));
    assert!(is_less(&Value::from("1.5"), &Value::Int32(2)));
    assert_eq!(compare(&Value::NaN, &Value::Int32(1)), None);
    assert!(!is_equal(&Value::NaN, &Value::NaN));
}

fn any_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1000i32..1000).prop_map(Value::Int32),
        (-1000i64..1000).prop_map(Value::Int64),
        (-1000i32..1000).prop_map(|n| Value::json_number(&n.to_string())),
        (-100.0f64..100.0).prop_map(Value::Float64),
    ]
}

proptest! {
    #[test]
    fn addition_commutes(a in any_number(), b in any_number()) {
        prop_assert_eq!(add(&a, &b), add(&b, &a));
    }

    #[test]
    fn multiplication_commutes(a in any_number(), b in any_number()) {
        prop_assert_eq!(multiply(&a, &b), multiply(&b, &a));
    }

    #[test]
    fn dividing_by_zero_is_nan(a in any_number()) {
        prop_assert_eq!(divide(&a, &Value::Int32(0)), Number::NaN);
        prop_assert_eq!(divide(&a, &Value::Float64(0.0)), Number::NaN);
    }
}
