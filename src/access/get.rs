//! Read operations
//!
//! Safe descendant-property reads: a path that does not fully exist returns
//! `None` rather than panicking partway down.

use serde_json::Value;

use super::walk;
use crate::semantics::is_truthy;

/// Get the value at a dot-separated `path` below `root`.
///
/// Splits `path` on `'.'` and follows one key per segment. Returns `None`
/// as soon as any segment is missing. A falsy value reached along the way
/// stops the walk and is returned as-is, so `get(&json!({"a": 0}), "a.b")`
/// yields `Some(0)` rather than descending further. There is no escaping
/// mechanism for a literal `'.'` inside a key name.
#[must_use]
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    walk(root, path.split('.'))
}

/// Mutable form of [`get`], with identical traversal semantics.
#[must_use]
pub fn get_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    super::walk_mut(root, path.split('.'))
}

/// Get the value at `path`, falling back to `default` when absent.
///
/// "Absent" follows the crate-wide truthiness rule: a stored `0`, `""`,
/// `false`, or `null` also yields the default.
#[must_use]
pub fn get_or(root: &Value, path: &str, default: Value) -> Value {
    match get(root, path) {
        Some(value) if is_truthy(value) => value.clone(),
        _ => default,
    }
}
