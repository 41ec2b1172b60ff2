//! Conversion between JSON documents and [`Value`].
//!
//! JSON numbers are kept as their decimal text ([`Value::JsonNumber`]) so
//! that `"3"` and `"3.0"` remain distinguishable until an arithmetic call
//! resolves them.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::Result;
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::JsonNumber(n.to_string().into()),
            serde_json::Value::String(s) => Self::String(s.into()),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Converts a decoded JSON document.
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        json.into()
    }

    /// Decodes a JSON document.
    ///
    /// # Errors
    /// Returns a JSON error if `text` is not a valid document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(json.into())
    }

    /// Encodes this value as JSON text, optionally tab-indented.
    ///
    /// # Errors
    /// Returns a JSON error if encoding fails.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        if pretty {
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            self.serialize(&mut ser)?;
            String::from_utf8(buf).map_err(|e| {
                crate::Error::new(crate::ErrorKind::Internal(format!(
                    "serializer produced invalid utf-8: {e}"
                )))
            })
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Nil | Self::NaN => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int32(n) => serializer.serialize_i32(*n),
            Self::Int64(n) => serializer.serialize_i64(*n),
            Self::Float32(n) => serializer.serialize_f32(*n),
            Self::Float64(n) => serializer.serialize_f64(*n),
            Self::JsonNumber(text) => {
                if let Ok(n) = text.parse::<i64>() {
                    serializer.serialize_i64(n)
                } else if let Ok(n) = text.parse::<u64>() {
                    serializer.serialize_u64(n)
                } else if let Ok(n) = text.parse::<f64>() {
                    serializer.serialize_f64(n)
                } else {
                    serializer.serialize_str(text)
                }
            }
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries.iter() {
                    map.serialize_entry(&**k, v)?;
                }
                map.end()
            }
        }
    }
}
