//! Normalization of "one or many" configuration values

use serde::Deserialize;

/// A configuration value that may be given as a single item or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Normalize an optional one-or-many value into a list.
pub fn one_or_many<T>(value: Option<OneOrMany<T>>) -> Vec<T> {
    value.map(OneOrMany::into_vec).unwrap_or_default()
}

/// Normalize a loosely typed value into a list.
///
/// `null` and `false` give an empty list, an array is returned as-is (no
/// dedup), and any other value becomes a one-element list.
pub fn to_list(value: serde_json::Value) -> Vec<serde_json::Value> {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => Vec::new(),
        serde_json::Value::Array(items) => items,
        other => vec![other],
    }
}
