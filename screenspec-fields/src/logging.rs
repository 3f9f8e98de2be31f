//! Log formatting helpers.

use serde::Serialize;
use std::fmt;

/// Renders a serializable value as YAML in a log line.
///
/// ```ignore
/// trace!("saved field: {}", Pretty(&field));
/// ```
pub struct Pretty<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> fmt::Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_yaml_ng::to_string(self.0) {
            Ok(yaml) => write!(f, "\n{yaml}"),
            Err(e) => write!(f, "<unrenderable: {e}>"),
        }
    }
}
