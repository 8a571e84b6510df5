//! Conditional copy operation
//!
//! Copies one leaf value from a source to a destination at a shared path.
//! Built for best-effort model updates: every way the copy can fail is a
//! silent no-op, and an existing destination value is never cleared just
//! because the source lacks one.

use serde_json::Value;

use super::set::set_with;
use super::walk;
use crate::semantics::is_truthy;

/// Copy the value at `path` from `source` into `dest`.
///
/// The copy happens only when all of the following hold:
/// - the source parent resolves and actually defines the final segment as
///   a key (key presence, not truthiness),
/// - the source value is truthy,
/// - the destination's intermediate path already exists.
///
/// Otherwise `dest` is untouched and `None` is returned. On success the
/// reference to the freshly written destination value is returned.
pub fn update<'a>(dest: &'a mut Value, source: &Value, path: &str) -> Option<&'a mut Value> {
    if path.is_empty() {
        return None;
    }
    match path.rsplit_once('.') {
        None => update_with(dest, source, std::iter::empty(), path),
        Some((parent, last)) => update_with(dest, source, parent.split('.'), last),
    }
}

/// Shared copy core over pre-split segments.
pub(crate) fn update_with<'a, 'p, I>(
    dest: &'a mut Value,
    source: &Value,
    parent: I,
    last: &'p str,
) -> Option<&'a mut Value>
where
    I: Iterator<Item = &'p str> + Clone,
{
    if !is_truthy(dest) || !is_truthy(source) {
        return None;
    }

    let source_parent = walk(source, parent.clone())?;
    let source_map = source_parent.as_object()?;
    // Key presence on the source side, unlike every other guard in this
    // crate, is strict: a key holding a falsy value still counts as defined.
    if !source_map.contains_key(last) {
        log::trace!("update skipped: source does not define key {last:?}");
        return None;
    }
    let source_value = source_map.get(last)?;
    if !is_truthy(source_value) {
        log::trace!("update skipped: source value for {last:?} is falsy");
        return None;
    }

    set_with(dest, parent, last, source_value.clone())
}
