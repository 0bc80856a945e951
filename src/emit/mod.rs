//! Index serialization.
//!
//! A dataset index is embedded beside its marker file and must not leak
//! build-machine paths, so archive paths are anonymized first. The overall
//! index is published separately and points at the archives' final
//! location.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::tree::rewrite;
use crate::tree::Run;

/// Filename of the per-dataset index written beside the archive marker.
pub const INDEX_FILENAME: &str = "index.json";

/// Anonymizes archive paths and writes the run as pretty JSON to
/// `<dataset_dir>/index.json`, replacing any existing file.
///
/// # Errors
/// Fails if serialization or the write fails.
pub fn write_dataset_index(run: &mut Run, dataset_dir: &Path) -> Result<()> {
    rewrite::anonymize(run);
    let json = serde_json::to_string_pretty(run)?;
    fs::write(dataset_dir.join(INDEX_FILENAME), json)?;
    Ok(())
}

/// Relocates archive paths from `original_base` to `new_base` (when given)
/// and writes the run as pretty JSON to `output`, creating parent
/// directories as needed.
///
/// # Errors
/// Fails if serialization or the write fails.
pub fn write_overall_index(
    run: &mut Run,
    output: &Path,
    original_base: &str,
    new_base: Option<&str>,
) -> Result<()> {
    if let Some(new_base) = new_base {
        rewrite::relocate(run, original_base, new_base);
    }
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(run)?;
    fs::write(output, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
