//! Strict, validated representation of a dot-separated path
//!
//! The free functions in [`crate::access`] take raw `&str` paths and fail
//! silent on malformed input. `DotPath` is for callers that want malformed
//! input surfaced as an error instead: it is parsed and validated once,
//! then reused across any number of lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::access;
use crate::error::{PathError, PathResult};

/// A validated dot-separated path into a nested JSON value.
///
/// Parsing rejects empty paths and empty segments (`"a..b"`, `".a"`,
/// `"a."`), so a `DotPath` always holds at least one non-empty segment.
/// Serializes as its dotted string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DotPath {
    segments: Vec<String>,
}

impl DotPath {
    /// Parse and validate a dot-separated path string.
    ///
    /// # Errors
    ///
    /// Returns `PathError::Empty` for an empty input, or
    /// `PathError::EmptySegment` when a leading, trailing, or doubled
    /// separator produces an empty segment.
    pub fn parse(raw: &str) -> PathResult<Self> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        let mut segments = Vec::new();
        for (position, segment) in raw.split('.').enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment(position));
            }
            segments.push(segment.to_owned());
        }
        Ok(Self { segments })
    }

    /// The ordered segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this path has exactly one segment (no separator present).
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.segments.len() == 1
    }

    /// The final segment of the path.
    #[must_use]
    pub fn last(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// All segments except the last, as a path of its own.
    ///
    /// Returns `None` for a top-level path.
    #[must_use]
    pub fn parent(&self) -> Option<DotPath> {
        let (_, initial) = self.segments.split_last()?;
        if initial.is_empty() {
            return None;
        }
        Some(Self {
            segments: initial.to_vec(),
        })
    }

    /// [`access::get`] along this path.
    #[must_use]
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        access::walk(root, self.iter())
    }

    /// [`access::get_mut`] along this path.
    #[must_use]
    pub fn get_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        access::walk_mut(root, self.iter())
    }

    /// [`access::set`] along this path.
    pub fn set<'a>(&self, root: &'a mut Value, value: Value) -> Option<&'a mut Value> {
        let (last, parent) = self.segments.split_last()?;
        access::set_with(root, parent.iter().map(String::as_str), last, value)
    }

    /// [`access::update`] along this path.
    pub fn update<'a>(&self, dest: &'a mut Value, source: &Value) -> Option<&'a mut Value> {
        let (last, parent) = self.segments.split_last()?;
        access::update_with(dest, source, parent.iter().map(String::as_str), last)
    }

    fn iter(&self) -> impl Iterator<Item = &str> + Clone {
        self.segments.iter().map(String::as_str)
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for DotPath {
    type Err = PathError;

    fn from_str(raw: &str) -> PathResult<Self> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for DotPath {
    type Error = PathError;

    fn try_from(raw: String) -> PathResult<Self> {
        Self::parse(&raw)
    }
}

impl From<DotPath> for String {
    fn from(path: DotPath) -> String {
        path.to_string()
    }
}
