//! Write operation
//!
//! Sets the value at a descendant path, mutating the container in place.
//! Intermediate nodes are never auto-created: if the parent of the target
//! key cannot be resolved, nothing is written.

use serde_json::Value;

use super::walk_mut;
use crate::semantics::is_truthy;

/// Set `value` at a dot-separated `path` below `root`.
///
/// Returns a reference to the stored value, or `None` when the call was a
/// no-op. No-op cases: `root` is falsy, `path` is empty, the resolved
/// parent is missing or not an object, or `value` itself is falsy.
///
/// The falsy-value guard is a known limitation inherited from the original
/// semantics: setting `0`, `false`, `""`, or `null` is silently ignored.
pub fn set<'a>(root: &'a mut Value, path: &str, value: Value) -> Option<&'a mut Value> {
    if path.is_empty() {
        return None;
    }
    match path.rsplit_once('.') {
        None => set_with(root, std::iter::empty(), path, value),
        Some((parent, last)) => set_with(root, parent.split('.'), last, value),
    }
}

/// Shared write core: resolve the parent by walking `parent`, then store
/// `value` under `last`. An empty `parent` iterator writes at top level.
pub(crate) fn set_with<'a, 'p>(
    root: &'a mut Value,
    parent: impl Iterator<Item = &'p str>,
    last: &str,
    value: Value,
) -> Option<&'a mut Value> {
    if !is_truthy(root) {
        return None;
    }
    if !is_truthy(&value) {
        log::trace!("set skipped: falsy value for key {last:?}");
        return None;
    }

    let parent = walk_mut(root, parent)?;
    let Some(map) = parent.as_object_mut() else {
        log::trace!("set skipped: parent of {last:?} is not an object");
        return None;
    };
    map.insert(last.to_owned(), value);
    map.get_mut(last)
}
