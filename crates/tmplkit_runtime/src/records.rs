//! Reading records from JSON text.

use tmplkit_foundation::{Error, ErrorKind, Result, Value};

/// Reads every record in `text`.
///
/// Accepts one JSON array (each element is a record) or a stream of JSON
/// documents separated by whitespace, which covers JSON lines. Numbers keep
/// their decimal text as [`Value::JsonNumber`].
///
/// # Errors
/// Returns a JSON error naming the document that failed to decode.
pub fn read_records(text: &str) -> Result<Vec<Value>> {
    let documents = serde_json::Deserializer::from_str(text)
        .into_iter::<serde_json::Value>()
        .enumerate()
        .map(|(index, document)| {
            document.map_err(|e| Error::new(ErrorKind::Json(format!("record {}: {e}", index + 1))))
        })
        .collect::<Result<Vec<_>>>()?;

    if let [serde_json::Value::Array(items)] = documents.as_slice() {
        return Ok(items.iter().cloned().map(Value::from_json).collect());
    }
    Ok(documents.into_iter().map(Value::from_json).collect())
}
