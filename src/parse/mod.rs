//! Properties text parsing
//!
//! Turns Java-style `.properties` text into a nested [`Document`]:
//! continuation lines are joined, comments and blank lines dropped, dotted keys
//! expanded into sub-documents and leaf values coerced to integers, booleans or
//! strings. Parsing is best-effort and never fails.

pub mod coerce;
pub mod continuation;

pub use coerce::coerce_scalar;
pub use continuation::join_continuations;

use crate::domain::{Document, Value};

/// Parse one properties text into a fresh document.
///
/// Later assignments to the same key path overwrite earlier ones. A scalar that
/// sits where a later key needs a sub-document is replaced by that sub-document.
pub fn parse_properties(text: &str) -> Document {
    let mut doc = Document::new();
    if text.is_empty() {
        return doc;
    }

    let joined = join_continuations(text);
    for line in joined.lines() {
        let Some((key, raw_value)) = split_assignment(line) else {
            continue;
        };
        let segments: Vec<&str> = key.split('.').collect();
        insert_path(&mut doc, &segments, coerce_scalar(raw_value));
    }

    doc
}

/// Parse an optional text; `None` stands for a file that could not be read.
pub fn parse_optional(text: Option<&str>) -> Document {
    text.map(parse_properties).unwrap_or_default()
}

/// Split a logical line into trimmed key and value, skipping comments and blanks.
///
/// Only the first `=` separates; a line without one has an empty value.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    match line.split_once('=') {
        Some((key, value)) => Some((key.trim(), value.trim())),
        None => Some((line, "")),
    }
}

fn insert_path(doc: &mut Document, segments: &[&str], value: Value) {
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };

    let mut current = doc;
    for segment in parents {
        current = current
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Document(Document::new()))
            .make_document();
    }
    current.insert((*leaf).to_string(), value);
}
