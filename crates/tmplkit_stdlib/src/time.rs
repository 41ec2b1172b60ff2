//! Date helpers.
//!
//! Inputs are partial ISO dates (`2016`, `2016-04`, `2016-04-03`) or the
//! word `now`. Partial dates are completed with the first month or day;
//! dates are taken as midnight UTC. Input that still does not parse renders
//! as the empty string and is logged at `warn`.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, Utc};
use tmplkit_foundation::{Arity, Error, Result, Value};
use tmplkit_language::FunctionRegistry;

use crate::LOG_TARGET;
use crate::args::string_arg;

/// Registry for the time family.
#[must_use]
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with("year", Arity::Exact(1), native_year)
        .with("rfc3339", Arity::Exact(1), native_rfc3339)
        .with("rfc1123", Arity::Exact(1), native_rfc1123)
        .with("rfc1123z", Arity::Exact(1), native_rfc1123z)
        .with("rfc822", Arity::Exact(1), native_rfc822)
        .with("rfc822z", Arity::Exact(1), native_rfc822z)
        .with("datefmt", Arity::Exact(4), native_datefmt)
}

const RFC1123: &str = "%a, %d %b %Y %H:%M:%S UTC";
const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";
const RFC822: &str = "%d %b %y %H:%M UTC";
const RFC822Z: &str = "%d %b %y %H:%M %z";

/// Expands a partial date to `YYYY-MM-DD`.
///
/// Missing month and day become `01`. A component that is not a number
/// becomes `1`. The year is zero-padded to four digits and the others to
/// two. Input with more than three components keeps them all, so it fails
/// to parse afterwards.
///
/// ```
/// assert_eq!(tmplkit_stdlib::normalize_date("2016"), "2016-01-01");
/// assert_eq!(tmplkit_stdlib::normalize_date("2016-4"), "2016-04-01");
/// ```
#[must_use]
pub fn normalize_date(input: &str) -> String {
    let mut parts: Vec<&str> = input.split('-').collect();
    while parts.len() < 3 {
        parts.push("01");
    }
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let n = part.parse::<i64>().unwrap_or(1);
            if i == 0 {
                format!("{n:04}")
            } else {
                format!("{n:02}")
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolves `now` or a partial date to an instant.
fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    if input == "now" {
        return Some(Utc::now());
    }
    let normalized = normalize_date(input);
    match NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Err(e) => {
            log::warn!(target: LOG_TARGET, "cannot read {input:?} as a date ({normalized}): {e}");
            None
        }
    }
}

/// Renders with a strftime pattern, failing instead of panicking on
/// patterns chrono cannot render.
fn render(function: &str, dt: &DateTime<Utc>, pattern: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).map_err(|_| {
        Error::invalid_argument(function, format!("invalid date format {pattern:?}"))
    })?;
    Ok(out)
}

fn format_date(function: &str, args: &[Value], pattern: &str) -> Result<Value> {
    let input = string_arg(function, args, 0)?;
    match parse_date(input) {
        Some(dt) => Ok(Value::from(render(function, &dt, pattern)?)),
        None => Ok(Value::from("")),
    }
}

/// Time: year - four-digit year
pub(crate) fn native_year(args: &[Value]) -> Result<Value> {
    format_date("year", args, "%Y")
}

/// Time: rfc3339 - e.g. `2016-01-02T00:00:00Z`
pub(crate) fn native_rfc3339(args: &[Value]) -> Result<Value> {
    format_date("rfc3339", args, "%Y-%m-%dT%H:%M:%SZ")
}

/// Time: rfc1123 - e.g. `Sat, 02 Jan 2016 00:00:00 UTC`
pub(crate) fn native_rfc1123(args: &[Value]) -> Result<Value> {
    format_date("rfc1123", args, RFC1123)
}

/// Time: rfc1123z - numeric zone
pub(crate) fn native_rfc1123z(args: &[Value]) -> Result<Value> {
    format_date("rfc1123z", args, RFC1123Z)
}

/// Time: rfc822 - two-digit year, zone name
pub(crate) fn native_rfc822(args: &[Value]) -> Result<Value> {
    format_date("rfc822", args, RFC822)
}

/// Time: rfc822z - two-digit year, numeric zone
pub(crate) fn native_rfc822z(args: &[Value]) -> Result<Value> {
    format_date("rfc822z", args, RFC822Z)
}

/// Time: datefmt - formats `date` with the pattern matching its precision
///
/// Arguments are the date followed by strftime patterns for a full date,
/// a year and month, and a year alone. Precision is read from the input's
/// length: 4 characters is a year, 5 to 7 a year and month, anything else
/// a full date. An unreadable date renders as `"{date}, {reason}"`.
pub(crate) fn native_datefmt(args: &[Value]) -> Result<Value> {
    let input = string_arg("datefmt", args, 0)?;
    let (completed, pattern) = match input.len() {
        4 => (format!("{input}-01-01"), string_arg("datefmt", args, 3)?),
        5..=7 => (format!("{input}-01"), string_arg("datefmt", args, 2)?),
        _ => (input.to_string(), string_arg("datefmt", args, 1)?),
    };
    let date = match NaiveDate::parse_from_str(&completed, "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            log::warn!(target: LOG_TARGET, "datefmt: cannot read {input:?}: {e}");
            return Ok(Value::from(format!("{input}, {e}")));
        }
    };
    let Some(dt) = date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()) else {
        return Ok(Value::from(format!("{input}, invalid time")));
    };
    Ok(Value::from(render("datefmt", &dt, pattern)?))
}
