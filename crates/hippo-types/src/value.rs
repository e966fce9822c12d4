//! Dynamic documents
//!
//! A [`Document`] is a string-keyed map of [`Value`]s, nested to any depth.
//! It is what the key resolver walks. Documents are normally built from
//! decoded JSON, but nothing here depends on the decoder's own types beyond
//! the `From<serde_json::Value>` conversion.

use hippo_diagnostics::{HippoError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// A nested, string-keyed map. Insertion order is preserved.
pub type Document = IndexMap<String, Value>;

/// A dynamically-typed document value.
///
/// Numbers keep the text they were decoded from, so `1.10`, `3.0` and
/// integers past `i64` reach coercion exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null; treated as "not there" by lookups
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Number, as written in the source
    Number(Number),
    /// String
    String(String),
    /// Ordered sequence
    List(Vec<Value>),
    /// Nested map
    Map(Document),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as a nested map
    pub fn as_map(&self) -> Option<&Document> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get as a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as a number
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Consume into a nested map
    pub fn into_map(self) -> Option<Document> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Textual form handed to scalar coercion.
    ///
    /// Null renders empty, lists join their elements with `,`, and maps
    /// render as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(Value::to_text)
                .collect::<Vec<_>>()
                .join(","),
            Self::Map(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// NaN and infinities have no JSON form and become [`Value::Null`].
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

// Decoded through `serde_json::Value` so numbers keep their source text.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

/// Decode a JSON object into a [`Document`].
pub fn parse_document(text: &str) -> Result<Document> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    document_from_json(json)
}

/// Convert an already-decoded JSON value into a [`Document`].
pub fn document_from_json(json: serde_json::Value) -> Result<Document> {
    Value::from(json)
        .into_map()
        .ok_or_else(|| HippoError::document("expected a JSON object at the top level"))
}
