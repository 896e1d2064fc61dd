//! Breadcrumb path helpers
//!
//! Display paths are absolute, `/`-separated strings with `/` as the root.
//! Empty segments are ignored; relative components are rejected outright so a
//! crafted path can never walk the view above its root.

use thiserror::Error;

/// Errors that can occur while handling a display path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains a forbidden component
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Splits a display path into breadcrumb segments
///
/// The root (`"/"` or `""`) has no segments. Empty segments from doubled or
/// trailing slashes are skipped; `.` and `..` components and NUL bytes are
/// rejected.
///
/// # Examples
///
/// ```
/// use services_navigation::path::split_segments;
///
/// assert_eq!(split_segments("/docs/notes").unwrap(), vec!["docs", "notes"]);
/// assert!(split_segments("/").unwrap().is_empty());
/// ```
pub fn split_segments(path: &str) -> Result<Vec<&str>, PathError> {
    if path.contains('\0') {
        return Err(PathError::InvalidPath("NUL byte in path".to_string()));
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    for segment in &segments {
        if *segment == "." || *segment == ".." {
            return Err(PathError::InvalidPath(
                "relative path components (. or ..) are not supported".to_string(),
            ));
        }
    }

    Ok(segments)
}

/// Returns the parent of a display path
///
/// Drops the last `/`-separated component; the parent of a top-level entry,
/// and of the root itself, is `"/"`.
pub fn parent_of(path: &str) -> String {
    let mut parts: Vec<&str> = path.split('/').collect();
    parts.pop();
    let parent = parts.join("/");
    if parent.is_empty() {
        "/".to_string()
    } else {
        parent
    }
}

/// Joins breadcrumb segments `0..=index` back into an absolute path
///
/// The index is clamped to the available segments.
pub fn join_up_to(segments: &[&str], index: usize) -> String {
    let end = (index + 1).min(segments.len());
    let mut path = String::from("/");
    path.push_str(&segments[..end].join("/"));
    path
}

/// Checks whether a name is valid as a single directory entry
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/') && !name.contains('\0')
}
