//! Integration tests for registries and expression evaluation

use tmplkit_foundation::{Arity, Error, ErrorKind, Result, Type, Value};
use tmplkit_language::{EvalConfig, Expression, FieldAccessor, FunctionRegistry, MissingKey, eval};

#[allow(clippy::unnecessary_wraps)]
fn first(args: &[Value]) -> Result<Value> {
    Ok(args.first().cloned().unwrap_or(Value::Nil))
}

fn shout(args: &[Value]) -> Result<Value> {
    match args.first() {
        Some(Value::String(s)) => Ok(Value::from(format!("{}!", s.to_uppercase()))),
        Some(other) => Err(Error::type_mismatch("shout", Type::String, other.value_type())),
        None => Ok(Value::Nil),
    }
}

fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with("first", Arity::Variadic(1), first)
        .with("shout", Arity::Exact(1), shout)
}

// =============================================================================
// Registries
// =============================================================================

#[test]
fn join_lets_later_registries_win() {
    let a = FunctionRegistry::new().with("f", Arity::Exact(1), first);
    let b = FunctionRegistry::new().with("f", Arity::Exact(1), shout);
    let joined = FunctionRegistry::join([a, b]);
    let out = joined
        .get("f")
        .expect("registered")
        .call(&[Value::from("hi")])
        .expect("ok");
    assert_eq!(out, Value::from("HI!"));
}

#[test]
fn merge_adds_names() {
    let mut base = FunctionRegistry::new().with("first", Arity::Variadic(1), first);
    base.merge(&FunctionRegistry::new().with("shout", Arity::Exact(1), shout));
    assert_eq!(base.names().collect::<Vec<_>>(), vec!["first", "shout"]);
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn evaluates_against_json_documents() {
    let doc = serde_json::json!({"user": {"name": "ada"}});
    let out = eval(".user.name | shout", &registry(), &doc).expect("evaluates");
    assert_eq!(out, Value::from("ADA!"));
}

#[test]
fn field_access_through_non_maps_fails() {
    let rec = Value::record([("name", "ada")]);
    let err = rec
        .field(&["name".to_string(), "first".to_string()])
        .expect_err("string has no fields");
    assert!(matches!(err.kind, ErrorKind::NotAMap { .. }));
}

#[test]
fn function_errors_carry_the_call_stack() {
    let err = eval("first (shout 1)", &registry(), &Value::Nil).expect_err("type error");
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(
        err.context.expect("context").stack,
        vec!["shout".to_string(), "first".to_string()]
    );
}

#[test]
fn missing_key_policy_is_fixed_at_compile_time() {
    let config = EvalConfig::new().with_missing_key(MissingKey::Zero);
    let expr = Expression::compile_with_config("first .absent 1", &registry(), config)
        .expect("compiles");
    assert_eq!(expr.evaluate(&Value::record([("x", 1)])).expect("ok"), Value::Nil);
    assert_eq!(expr.config().missing_key, MissingKey::Zero);
}
