//! Integer ranges and column/row reshaping.

use tmplkit_foundation::{Arity, Error, LtVec, Result, Value};
use tmplkit_language::FunctionRegistry;

use crate::args::{int_arg, integer, list_arg};

/// Registry for the iterables family.
#[must_use]
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with("ints", Arity::Exact(3), native_ints)
        .with("cols2rows", Arity::Variadic(1), native_cols2rows)
}

/// Largest list `ints` will build.
pub const MAX_INTS: u32 = 1_000_000;

/// Iterables: ints - inclusive range from `start` to `end` by `step`
///
/// `ints 1 10 2` is `[1 3 5 7 9]`. A negative step counts down; a step of
/// zero is an error. A range that runs the wrong way is empty. Ranges
/// longer than [`MAX_INTS`] elements are an error.
pub(crate) fn native_ints(args: &[Value]) -> Result<Value> {
    let start = int_arg("ints", args, 0)?;
    let end = int_arg("ints", args, 1)?;
    let step = int_arg("ints", args, 2)?;
    if step == 0 {
        return Err(Error::invalid_argument("ints", "step must not be zero"));
    }
    let count = range_len(start, end, step);
    if count > u128::from(MAX_INTS) {
        return Err(Error::invalid_argument(
            "ints",
            format!("range {start}..={end} by {step} has {count} elements, limit is {MAX_INTS}"),
        ));
    }
    let items: Vec<Value> = (0..count)
        .map(|i| {
            // count <= MAX_INTS keeps every step inside [start, end]
            let offset = i128::try_from(i).unwrap_or(i128::MAX) * i128::from(step);
            integer(i64::try_from(i128::from(start) + offset).unwrap_or(end))
        })
        .collect();
    Ok(Value::from(items))
}

/// Number of elements in the inclusive range; zero when it runs the wrong way.
fn range_len(start: i64, end: i64, step: i64) -> u128 {
    let span = i128::from(end) - i128::from(start);
    let step = i128::from(step);
    if span != 0 && (span < 0) != (step < 0) {
        return 0;
    }
    (span / step).unsigned_abs() + 1
}

/// Iterables: cols2rows - transposes columns into rows
///
/// Row `i` holds element `i` of every column, in argument order. Columns
/// shorter than the longest are padded with nil.
pub(crate) fn native_cols2rows(args: &[Value]) -> Result<Value> {
    let columns = (0..args.len())
        .map(|i| list_arg("cols2rows", args, i))
        .collect::<Result<Vec<_>>>()?;
    let height = columns.iter().map(LtVec::len).max().unwrap_or(0);
    let rows: LtVec<Value> = (0..height)
        .map(|row| {
            Value::List(
                columns
                    .iter()
                    .map(|column| column.get(row).cloned().unwrap_or(Value::Nil))
                    .collect(),
            )
        })
        .collect();
    Ok(Value::List(rows))
}
