//! Integration tests for filters with the full helper library

use tmplkit_foundation::Value;
use tmplkit_language::Filter;

fn record() -> Value {
    Value::from_json_str(r#"{"one": true, "two": true, "three": false, "cnt2014": "3"}"#)
        .expect("valid json")
}

fn check(source: &str) -> bool {
    Filter::compile(source, &tmplkit_stdlib::all())
        .expect("compiles")
        .apply(&record())
        .expect("applies")
}

#[test]
fn boolean_filters() {
    assert!(check("(and .one .two)"));
    assert!(!check("(and .one .three)"));
    assert!(check("(or .one .three)"));
    assert!(check("(and .one .two (eq .three false))"));
    assert!(!check("false"));
    assert!(!check("(false)"));
}

#[test]
fn numeric_filters() {
    assert!(check("(gt (int .cnt2014) 2)"));
    assert!(!check("(gt (int .cnt2014) 3)"));
    assert!(check("add 1 1"));
    assert!(check("(add 1 1)"));
    assert!(!check("(subtract 1 1)"));
    assert!(!check("(divide 1 0)"));
}

#[test]
fn pipelines_as_conditions() {
    assert!(check(".cnt2014 | int | lt 2"));
    assert!(!check(r#"(.three | not | not)"#));
}
