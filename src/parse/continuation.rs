//! Backslash line continuations

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static CONTINUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\\r?\n\s*").expect("valid regex"));

/// Join every line ending in a backslash with the line that follows it.
///
/// The backslash, the line break and the indentation of the continuation line
/// are removed in one pass, so chains of continued lines collapse into a single
/// logical line. Text without continuations is borrowed unchanged.
pub fn join_continuations(text: &str) -> Cow<'_, str> {
    CONTINUATION.replace_all(text, "")
}
