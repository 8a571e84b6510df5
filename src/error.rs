//! Path validation error types
//!
//! The access operations never raise: absence degrades to `None` by design.
//! These errors exist solely for strict path parsing via
//! [`DotPath::parse`](crate::DotPath::parse), for callers that want
//! malformed input surfaced instead of silently missing.

/// Result type for strict path parsing.
pub type PathResult<T> = Result<T, PathError>;

/// Errors produced when validating a dot-separated path string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path string contained no segments at all.
    #[error("path is empty")]
    Empty,

    /// A leading, trailing, or doubled separator produced an empty segment.
    #[error("empty segment at position {0}")]
    EmptySegment(usize),
}
