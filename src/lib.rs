//! Dot-path access to deeply nested JSON values
//!
//! Reading `config["server"]["tls"]["cert"]` by hand means checking for a
//! missing node at every level. This crate does the traversal for you when
//! the path is only known at runtime as a string: `get` reads a value at
//! arbitrary depth, `set` writes one, and `update` conditionally copies one
//! from a source value to a destination at the same path.
//!
//! # Semantics
//!
//! - All failure modes degrade to `None` — nothing here panics or errors.
//! - Presence is truthiness-based: `null`, `false`, `0`, and `""` count as
//!   "no value" (see [`is_truthy`]). In particular, `set` silently ignores
//!   a falsy value; this is a documented limitation, not a bug.
//! - Intermediate nodes are never auto-created by `set` or `update`.
//! - Paths have no escaping mechanism: a literal `'.'` in a key name is
//!   unsupported input.
//!
//! # Examples
//!
//! ```rust
//! use deeppath::Deep;
//! use serde_json::json;
//!
//! let mut settings = json!({ "server": { "host": "localhost" } });
//!
//! assert_eq!(Deep::get(&settings, "server.host"), Some(&json!("localhost")));
//!
//! Deep::set(&mut settings, "server.port", json!(8080));
//! assert_eq!(Deep::get(&settings, "server.port"), Some(&json!(8080)));
//!
//! // The parent path must already exist; nothing is created on the fly.
//! assert!(Deep::set(&mut settings, "tls.cert", json!("cert.pem")).is_none());
//!
//! let defaults = json!({ "server": { "workers": 4 } });
//! Deep::update(&mut settings, &defaults, "server.workers");
//! assert_eq!(Deep::get(&settings, "server.workers"), Some(&json!(4)));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod access;
pub mod error;
pub mod path;
pub mod semantics;

pub use access::{get, get_mut, get_or, set, update};
pub use error::{PathError, PathResult};
pub use path::DotPath;
pub use semantics::is_truthy;

use serde_json::Value;

/// Main entry point, namespacing the three operations.
///
/// Each method is shorthand for the free function of the same name in
/// [`access`].
pub struct Deep;

impl Deep {
    /// Get the value at `path` below `root`.
    ///
    /// Shorthand for [`access::get`]
    #[must_use]
    pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
        access::get(root, path)
    }

    /// Get a mutable reference to the value at `path` below `root`.
    ///
    /// Shorthand for [`access::get_mut`]
    #[must_use]
    pub fn get_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
        access::get_mut(root, path)
    }

    /// Get the value at `path`, or `default` when absent or falsy.
    ///
    /// Shorthand for [`access::get_or`]
    #[must_use]
    pub fn get_or(root: &Value, path: &str, default: Value) -> Value {
        access::get_or(root, path, default)
    }

    /// Set `value` at `path` below `root`, in place.
    ///
    /// Shorthand for [`access::set`]
    pub fn set<'a>(root: &'a mut Value, path: &str, value: Value) -> Option<&'a mut Value> {
        access::set(root, path, value)
    }

    /// Copy the value at `path` from `source` into `dest`.
    ///
    /// Shorthand for [`access::update`]
    pub fn update<'a>(
        dest: &'a mut Value,
        source: &Value,
        path: &str,
    ) -> Option<&'a mut Value> {
        access::update(dest, source, path)
    }
}
