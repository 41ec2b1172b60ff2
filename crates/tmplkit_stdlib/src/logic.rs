//! Boolean connectives, comparison, and collection access.

use tmplkit_foundation::{Arity, Error, Result, Type, Value};
use tmplkit_language::FunctionRegistry;

use crate::args::{arg, int_value};

/// Registry for the logic family.
#[must_use]
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with("and", Arity::Variadic(1), native_and)
        .with("or", Arity::Variadic(1), native_or)
        .with("not", Arity::Exact(1), native_not)
        .with("eq", Arity::Variadic(2), native_eq)
        .with("ne", Arity::Exact(2), native_ne)
        .with("lt", Arity::Exact(2), native_lt)
        .with("le", Arity::Exact(2), native_le)
        .with("gt", Arity::Exact(2), native_gt)
        .with("ge", Arity::Exact(2), native_ge)
        .with("index", Arity::Variadic(1), native_index)
        .with("len", Arity::Exact(1), native_len)
}

// =============================================================================
// Connectives
// =============================================================================

/// Logic: and - returns first falsy value or last value
pub(crate) fn native_and(args: &[Value]) -> Result<Value> {
    Ok(args
        .iter()
        .find(|v| !v.is_truthy())
        .or(args.last())
        .cloned()
        .unwrap_or(Value::Nil))
}

/// Logic: or - returns first truthy value or last value
pub(crate) fn native_or(args: &[Value]) -> Result<Value> {
    Ok(args
        .iter()
        .find(|v| v.is_truthy())
        .or(args.last())
        .cloned()
        .unwrap_or(Value::Nil))
}

/// Logic: not - negated truthiness
pub(crate) fn native_not(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(!arg(args, 0).is_truthy()))
}

// =============================================================================
// Comparison
// =============================================================================

/// Equality across representations.
///
/// Numbers compare through the normalizer, so `JsonNumber("3")` equals
/// `Int32(3)`. A string meeting a number is resolved the same way `lt` and
/// `gt` resolve it, so `"3"` equals `3`. Two strings compare by content.
/// Lists and maps compare element-wise under the same rule. `NaN` equals
/// nothing, itself included.
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::NaN, _) | (_, Value::NaN) => false,
        _ if a.is_number() && b.is_number() => tmplkit_numeric::is_equal(a, b),
        (Value::String(_), other) | (other, Value::String(_)) if other.is_number() => {
            tmplkit_numeric::is_equal(a, b)
        }
        (Value::String(x), Value::String(y)) => x == y,
        (Value::List(xs), Value::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| values_equal(x, y))
        }
        (Value::Map(xs), Value::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k.as_ref()).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

/// Comparison: eq - true when the first argument equals any following one
pub(crate) fn native_eq(args: &[Value]) -> Result<Value> {
    let Some((first, rest)) = args.split_first() else {
        return Ok(Value::Bool(false));
    };
    Ok(Value::Bool(rest.iter().any(|v| values_equal(first, v))))
}

/// Comparison: ne - negation of two-argument eq
pub(crate) fn native_ne(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(!values_equal(arg(args, 0), arg(args, 1))))
}

/// Comparison: lt - numeric less-than
pub(crate) fn native_lt(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(tmplkit_numeric::is_less(arg(args, 0), arg(args, 1))))
}

/// Comparison: le - numeric less-than-or-equal
pub(crate) fn native_le(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(tmplkit_numeric::is_less_or_equal(
        arg(args, 0),
        arg(args, 1),
    )))
}

/// Comparison: gt - numeric greater-than
pub(crate) fn native_gt(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(tmplkit_numeric::is_greater(
        arg(args, 0),
        arg(args, 1),
    )))
}

/// Comparison: ge - numeric greater-than-or-equal
pub(crate) fn native_ge(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(tmplkit_numeric::is_greater_or_equal(
        arg(args, 0),
        arg(args, 1),
    )))
}

// =============================================================================
// Collections
// =============================================================================

/// Collection: index - walks maps by key and lists by position
///
/// `index m "a" 0` is `m.a[0]`. An absent map key yields nil; a position
/// outside a list is an error.
pub(crate) fn native_index(args: &[Value]) -> Result<Value> {
    let Some((collection, keys)) = args.split_first() else {
        return Ok(Value::Nil);
    };
    let mut current = collection.clone();
    for key in keys {
        current = match (&current, key) {
            (Value::Nil, _) => Value::Nil,
            (Value::Map(entries), Value::String(k) | Value::JsonNumber(k)) => {
                entries.get(k.as_ref()).cloned().unwrap_or(Value::Nil)
            }
            (Value::Map(_), other) => {
                return Err(Error::type_mismatch("index", Type::String, other.value_type()));
            }
            (Value::List(items), position) if position.is_number() => {
                let i = tmplkit_numeric::to_i64(position);
                usize::try_from(i)
                    .ok()
                    .and_then(|i| items.get(i))
                    .cloned()
                    .ok_or_else(|| {
                        Error::invalid_argument(
                            "index",
                            format!("index out of range: {i} (length {})", items.len()),
                        )
                    })?
            }
            (Value::List(_), other) => {
                return Err(Error::type_mismatch("index", Type::Int32, other.value_type()));
            }
            (other, _) => {
                return Err(Error::type_mismatch("index", Type::Map, other.value_type()));
            }
        };
    }
    Ok(current)
}

/// Collection: len - characters in a string, items in a list or map
pub(crate) fn native_len(args: &[Value]) -> Result<Value> {
    match arg(args, 0) {
        Value::String(s) => Ok(int_value(s.chars().count())),
        Value::List(items) => Ok(int_value(items.len())),
        Value::Map(entries) => Ok(int_value(entries.len())),
        Value::Nil => Ok(Value::Int32(0)),
        other => Err(Error::type_mismatch("len", Type::List, other.value_type())),
    }
}
