//! Scalar type inference for property values

use crate::domain::Value;

/// Coerce a raw property value into an integer, boolean or string.
///
/// The value is trimmed first. A string that parses completely as a base-10
/// `i64` becomes an integer; `true`/`false` in any letter case become booleans;
/// everything else, including the empty string, stays a string.
pub fn coerce_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Integer(n);
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }

    Value::String(trimmed.to_string())
}
