//! Local argument checks run before any request is sent.

use crate::error::{LakeError, Result};

/// Require a non-blank identifier that is usable as a path segment.
///
/// `.` and `..` are rejected: URL resolution would turn them into a
/// request for a different endpoint.
pub(crate) fn require_id<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(LakeError::invalid(name, "must not be empty"));
    }
    if value == "." || value == ".." {
        return Err(LakeError::invalid(name, format!("'{value}' is not a valid id")));
    }
    Ok(value)
}

/// Drop blank optional filters so they are not sent as `?branch=`.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
