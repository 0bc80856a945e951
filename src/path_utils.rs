//! Path helpers for archive-relative locations.
//!
//! Archive files store their base directory as the top-level entry, so a
//! file's in-archive location is its path relative to the directory *above*
//! the archived one. Locations use forward slashes regardless of platform,
//! matching the archive entry-name convention.

use std::path::Path;

use crate::error::{NavIndexError, Result};

/// Location of `path` inside the archive at `archive_file`.
///
/// The prefix stripped is the parent of the archive's own directory, leaving
/// `<archived-dir-name>/...` as the entry path.
///
/// # Errors
/// Fails if `archive_file` has no grandparent directory or `path` does not
/// live under it. The traversal only derives locations from listings rooted
/// below the archive directory, so either case indicates a caller bug and is
/// reported rather than producing a malformed location.
pub fn archive_relative(path: &Path, archive_file: &Path) -> Result<String> {
    let base = archive_file
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| NavIndexError::PathOutsideArchive {
            path: path.to_path_buf(),
            base: archive_file.to_path_buf(),
        })?;
    let relative = path
        .strip_prefix(base)
        .map_err(|_| NavIndexError::PathOutsideArchive {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        })?;
    Ok(slash_join(relative))
}

/// Joins a relative path's components with forward slashes.
#[must_use]
pub fn slash_join(relative: &Path) -> String {
    let mut joined = String::new();
    for component in relative.components() {
        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(&component.as_os_str().to_string_lossy());
    }
    joined
}

#[cfg(test)]
#[path = "path_utils_tests.rs"]
mod tests;
