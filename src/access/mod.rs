//! Dot-path access operations over nested JSON values
//!
//! All three operations (`get`, `set`, `update`) share one traversal
//! primitive: a segment-by-segment walk that stops as soon as it reaches a
//! falsy value. A missing key yields `None`; a falsy value reached along
//! the way is returned as-is, so callers see exactly what the walk stopped
//! on. Nothing here ever panics or returns an error.

mod get;
mod set;
mod update;

use serde_json::Value;

pub use self::get::{get, get_mut, get_or};
pub use self::set::set;
pub use self::update::update;

pub(crate) use self::set::set_with;
pub(crate) use self::update::update_with;

use crate::semantics::is_truthy;

/// Walk `root` one segment at a time.
///
/// Returns `None` when a key is missing or the current node cannot be
/// indexed by string. A falsy value encountered mid-walk ends the walk and
/// is returned, remaining segments unconsumed. An empty segment iterator
/// returns `root` itself.
pub(crate) fn walk<'a, 'p>(
    root: &'a Value,
    segments: impl Iterator<Item = &'p str>,
) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = current.get(segment)?;
        if !is_truthy(current) {
            break;
        }
    }
    Some(current)
}

/// Mutable counterpart of [`walk`], used for parent resolution when writing.
pub(crate) fn walk_mut<'a, 'p>(
    root: &'a mut Value,
    segments: impl Iterator<Item = &'p str>,
) -> Option<&'a mut Value> {
    let mut current = root;
    for segment in segments {
        current = Value::get_mut(current, segment)?;
        if !is_truthy(current) {
            break;
        }
    }
    Some(current)
}
