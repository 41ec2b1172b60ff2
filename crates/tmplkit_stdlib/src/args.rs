//! Argument extraction shared by the helper families.
//!
//! Registries check arity before a native function runs, so positional
//! lookups here only fail on type.

use std::sync::Arc;

use tmplkit_foundation::{Error, LtMap, LtVec, Result, Type, Value};

static NIL: Value = Value::Nil;

/// The argument at `index`, or nil.
pub(crate) fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&NIL)
}

/// A text argument. JSON number text is accepted as-is; nil reads as "".
pub(crate) fn string_arg<'a>(function: &str, args: &'a [Value], index: usize) -> Result<&'a str> {
    match arg(args, index) {
        Value::String(s) | Value::JsonNumber(s) => Ok(s),
        Value::Nil => Ok(""),
        other => Err(Error::type_mismatch(
            function,
            Type::String,
            other.value_type(),
        )),
    }
}

/// An integer argument; any numeric representation is accepted and
/// converted through the normalizer.
pub(crate) fn int_arg(function: &str, args: &[Value], index: usize) -> Result<i64> {
    let value = arg(args, index);
    if value.is_number() {
        Ok(tmplkit_numeric::to_i64(value))
    } else {
        Err(Error::type_mismatch(
            function,
            Type::Int64,
            value.value_type(),
        ))
    }
}

/// A list argument; nil reads as the empty list.
pub(crate) fn list_arg(function: &str, args: &[Value], index: usize) -> Result<LtVec<Value>> {
    match arg(args, index) {
        Value::List(items) => Ok(items.clone()),
        Value::Nil => Ok(LtVec::new()),
        other => Err(Error::type_mismatch(function, Type::List, other.value_type())),
    }
}

/// A map argument; nil reads as the empty map.
pub(crate) fn map_arg(
    function: &str,
    args: &[Value],
    index: usize,
) -> Result<LtMap<Arc<str>, Value>> {
    match arg(args, index) {
        Value::Map(entries) => Ok(entries.clone()),
        Value::Nil => Ok(LtMap::new()),
        other => Err(Error::type_mismatch(function, Type::Map, other.value_type())),
    }
}

/// Length as the default integer kind, saturating.
pub(crate) fn int_value(n: usize) -> Value {
    Value::Int32(i32::try_from(n).unwrap_or(i32::MAX))
}

/// An integer result: default width when it fits, 64-bit otherwise.
pub(crate) fn integer(n: i64) -> Value {
    i32::try_from(n).map_or(Value::Int64(n), Value::Int32)
}
