//! Arithmetic, numeric conversion, and type names.
//!
//! Every operand goes through the normalizer, so `add .count 1` works
//! whether `.count` is a native integer, a float, or JSON number text.

use tmplkit_foundation::{Arity, Result, Value};
use tmplkit_language::FunctionRegistry;
use tmplkit_numeric::Number;

/// Registry for the math family.
#[must_use]
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with("add", Arity::Variadic(2), native_add)
        .with("sub", Arity::Variadic(2), native_subtract)
        .with("subtract", Arity::Variadic(2), native_subtract)
        .with("multiply", Arity::Variadic(2), native_multiply)
        .with("divide", Arity::Variadic(2), native_divide)
        .with("modulo", Arity::Variadic(2), native_modulo)
        .with("int", Arity::Exact(1), native_int)
        .with("int64", Arity::Exact(1), native_int64)
        .with("float32", Arity::Exact(1), native_float32)
        .with("float64", Arity::Exact(1), native_float64)
        .with("typeof", Arity::Exact(1), native_typeof)
}

// =============================================================================
// Arithmetic
// =============================================================================

/// Applies `op` left to right: `op(op(a, b), c)`.
fn fold(args: &[Value], op: fn(&Value, &Value) -> Number) -> Value {
    let mut iter = args.iter();
    let Some(first) = iter.next() else {
        return Value::Nil;
    };
    iter.fold(first.clone(), |acc, next| Value::from(op(&acc, next)))
}

/// Math: add - sum of all arguments
pub(crate) fn native_add(args: &[Value]) -> Result<Value> {
    Ok(fold(args, tmplkit_numeric::add))
}

/// Math: subtract - first argument minus each following one
pub(crate) fn native_subtract(args: &[Value]) -> Result<Value> {
    Ok(fold(args, tmplkit_numeric::subtract))
}

/// Math: multiply - product of all arguments
pub(crate) fn native_multiply(args: &[Value]) -> Result<Value> {
    Ok(fold(args, tmplkit_numeric::multiply))
}

/// Math: divide - first argument divided by each following one
pub(crate) fn native_divide(args: &[Value]) -> Result<Value> {
    Ok(fold(args, tmplkit_numeric::divide))
}

/// Math: modulo - integer remainder, folded left
pub(crate) fn native_modulo(args: &[Value]) -> Result<Value> {
    Ok(fold(args, tmplkit_numeric::modulo))
}

// =============================================================================
// Conversion
// =============================================================================

/// Conversion: int - default-width integer, truncating
///
/// Out-of-range values clamp to the `i32` bounds rather than wrapping.
pub(crate) fn native_int(args: &[Value]) -> Result<Value> {
    Ok(Value::Int32(args.first().map_or(0, tmplkit_numeric::to_i32)))
}

/// Conversion: int64 - 64-bit integer, truncating
pub(crate) fn native_int64(args: &[Value]) -> Result<Value> {
    Ok(Value::Int64(args.first().map_or(0, tmplkit_numeric::to_i64)))
}

/// Conversion: float32
pub(crate) fn native_float32(args: &[Value]) -> Result<Value> {
    Ok(Value::Float32(args.first().map_or(0.0, tmplkit_numeric::to_f32)))
}

/// Conversion: float64
pub(crate) fn native_float64(args: &[Value]) -> Result<Value> {
    Ok(Value::Float64(args.first().map_or(0.0, tmplkit_numeric::to_f64)))
}

// =============================================================================
// Type names
// =============================================================================

/// Type name of a value as shown to template authors.
///
/// Scalars use the names of their representation (`int`, `float64`,
/// `json.Number`). A list whose elements all share one type is `[]T`;
/// any other list is `[]interface {}`. Nil is `<nil>`.
#[must_use]
pub fn type_name(value: &Value) -> String {
    match value {
        Value::Nil => "<nil>".to_string(),
        Value::List(items) => {
            let mut names = items.iter().map(type_name);
            let element = names
                .next()
                .filter(|first| names.all(|n| n == *first))
                .unwrap_or_else(|| "interface {}".to_string());
            format!("[]{element}")
        }
        Value::Map(_) => "map[string]interface {}".to_string(),
        other => other.value_type().name().to_string(),
    }
}

/// Types: typeof - type name of the argument
pub(crate) fn native_typeof(args: &[Value]) -> Result<Value> {
    Ok(Value::from(type_name(args.first().unwrap_or(&Value::Nil))))
}
