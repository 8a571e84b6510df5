//! Truthiness semantics for dynamic JSON values
//!
//! Presence checks throughout this crate are truthiness-based, not
//! key-presence-based: `null`, `false`, numeric zero, and the empty string
//! all count as "no value". Empty objects and arrays count as present.
//! This conflation of "absent" with "falsy but present" is a documented
//! limitation of the access operations, pinned down by the tests here.

use serde_json::Value;

/// Whether a value counts as present for traversal and guard purposes.
///
/// `Null`, `false`, `0`, `0.0`, and `""` are falsy; everything else,
/// including `{}` and `[]`, is truthy.
#[inline]
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
