//! Slash-separated path components.
//!
//! Paths are treated as forward-slash separated regardless of platform,
//! the way URLs and site paths are.

use tmplkit_foundation::{Arity, Result, Value};
use tmplkit_language::FunctionRegistry;

use crate::args::string_arg;

/// Registry for the path family.
#[must_use]
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with("basename", Arity::Range(1, 2), native_basename)
        .with("dirname", Arity::Exact(1), native_dirname)
        .with("ext", Arity::Exact(1), native_ext)
}

/// Last element of `path`, ignoring trailing slashes.
fn base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Shortest equivalent path: repeated slashes collapse, `.` elements drop,
/// and `..` removes the element before it where one exists.
fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }
    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Everything before the last element, cleaned.
fn dir(path: &str) -> String {
    let head = path.rfind('/').map_or("", |i| &path[..=i]);
    clean(head)
}

/// Extension of the last element, dot included; empty when it has none.
fn extension(path: &str) -> &str {
    let last = path.rsplit('/').next().unwrap_or(path);
    last.rfind('.').map_or("", |i| &last[i..])
}

/// Path: basename - last element, with an optional suffix removed
pub(crate) fn native_basename(args: &[Value]) -> Result<Value> {
    let path = string_arg("basename", args, 0)?;
    let suffix = string_arg("basename", args, 1)?;
    let name = base(path);
    Ok(Value::from(name.strip_suffix(suffix).unwrap_or(name)))
}

/// Path: dirname - all but the last element
pub(crate) fn native_dirname(args: &[Value]) -> Result<Value> {
    Ok(Value::from(dir(string_arg("dirname", args, 0)?)))
}

/// Path: ext - extension of the last element
pub(crate) fn native_ext(args: &[Value]) -> Result<Value> {
    Ok(Value::from(extension(string_arg("ext", args, 0)?)))
}
