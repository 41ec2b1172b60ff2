//! Integration tests for JSON conversion

use tmplkit_foundation::Value;

#[test]
fn numbers_keep_their_text() {
    let v = Value::from_json_str(r#"{"n": 3, "f": 1.25, "s": "3"}"#).expect("valid");
    assert_eq!(v.get("n"), Some(&Value::json_number("3")));
    assert_eq!(v.get("f"), Some(&Value::json_number("1.25")));
    assert_eq!(v.get("s"), Some(&Value::from("3")));
}

#[test]
fn converts_decoded_documents() {
    let doc = serde_json::json!({"tags": ["a", null], "ok": true});
    let v = Value::from_json(doc);
    assert_eq!(
        v.get("tags"),
        Some(&Value::from(vec![Value::from("a"), Value::Nil]))
    );
    assert_eq!(v.get("ok"), Some(&Value::Bool(true)));
}

#[test]
fn encodes_compact_and_pretty() {
    let v = Value::record([("a", Value::from(vec![1, 2]))]);
    assert_eq!(v.to_json_string(false).expect("encodes"), r#"{"a":[1,2]}"#);
    assert_eq!(
        v.to_json_string(true).expect("encodes"),
        "{\n\t\"a\": [\n\t\t1,\n\t\t2\n\t]\n}"
    );
}

#[test]
fn rejects_invalid_documents() {
    assert!(Value::from_json_str("{").is_err());
}
