//! Field access into the record an expression runs against.

use tmplkit_foundation::{Error, ErrorKind, Result, Type, Value};

/// Resolves dotted field paths against a record.
///
/// An empty path names the whole record.
pub trait FieldAccessor {
    /// Looks up `path`.
    ///
    /// Returns `Ok(None)` when a key along the path is absent (or the walk
    /// reaches `nil`), leaving the caller's missing-key policy to decide.
    ///
    /// # Errors
    /// Returns [`ErrorKind::NotAMap`] when the path steps into a value that
    /// has no fields.
    fn field(&self, path: &[String]) -> Result<Option<Value>>;
}

impl FieldAccessor for Value {
    fn field(&self, path: &[String]) -> Result<Option<Value>> {
        let mut current = self;
        for (i, name) in path.iter().enumerate() {
            current = match current {
                Value::Map(entries) => match entries.get(name.as_str()) {
                    Some(next) => next,
                    None => return Ok(None),
                },
                Value::Nil => return Ok(None),
                other => return Err(not_a_map(&path[..=i], other.value_type())),
            };
        }
        Ok(Some(current.clone()))
    }
}

impl FieldAccessor for serde_json::Value {
    fn field(&self, path: &[String]) -> Result<Option<Value>> {
        let mut current = self;
        for (i, name) in path.iter().enumerate() {
            current = match current {
                serde_json::Value::Object(entries) => match entries.get(name) {
                    Some(next) => next,
                    None => return Ok(None),
                },
                serde_json::Value::Null => return Ok(None),
                other => {
                    let actual = Value::from_json(other.clone()).value_type();
                    return Err(not_a_map(&path[..=i], actual));
                }
            };
        }
        Ok(Some(Value::from_json(current.clone())))
    }
}

/// Renders a path the way it is written in an expression.
#[must_use]
pub fn dotted_path(path: &[String]) -> String {
    if path.is_empty() {
        ".".to_string()
    } else {
        path.iter().map(|name| format!(".{name}")).collect()
    }
}

fn not_a_map(path: &[String], actual: Type) -> Error {
    Error::new(ErrorKind::NotAMap {
        path: dotted_path(path),
        actual,
    })
}
