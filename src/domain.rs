//! Core data types for parsed properties documents

use serde::Serialize;
use std::collections::BTreeMap;

/// Nested mapping produced by parsing one properties text.
///
/// Keys are kept sorted so serialized output is deterministic; ordering carries
/// no meaning.
pub type Document = BTreeMap<String, Value>;

/// A leaf scalar or a nested document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Document(Document),
}

impl Value {
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    /// Borrow this value as a document, replacing any scalar with an empty one.
    pub(crate) fn make_document(&mut self) -> &mut Document {
        match self {
            Value::Document(doc) => doc,
            scalar => {
                *scalar = Value::Document(Document::new());
                scalar.make_document()
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Document(value)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(n) => serde_json::Value::Number(n.into()),
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::String(s) => serde_json::Value::String(s),
            Value::Document(doc) => document_to_json(doc),
        }
    }
}

/// Convert a document into a JSON object for storage.
pub fn document_to_json(doc: Document) -> serde_json::Value {
    serde_json::Value::Object(doc.into_iter().map(|(k, v)| (k, v.into())).collect())
}
