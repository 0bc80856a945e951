//! Archive preparation around the external packer.
//!
//! The index encodes where each dataset's archive will live
//! (`<dataset>/<archive name>`); producing the archive bytes is the job of a
//! configurable external command. This module sweeps stale archives out of
//! the tree before a rebuild and drives the packer per dataset with the same
//! failure isolation as the index batch.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use walkdir::WalkDir;

use crate::batch::DatasetFailure;
use crate::error::{NavIndexError, Result};

/// Produces one archive file from a dataset directory.
pub trait ArchiveWriter: Sync {
    /// Packages `source_dir` into `archive_file`.
    ///
    /// # Errors
    /// Returns an error if the archive cannot be produced.
    fn write(&self, source_dir: &Path, archive_file: &Path) -> Result<()>;
}

/// Archiver that shells out to a configured command, invoked as
/// `<program> [args...] <source_dir> <archive_file>`.
pub struct CommandArchiver {
    program: String,
    args: Vec<String>,
}

impl CommandArchiver {
    /// Parses a whitespace-separated command line.
    ///
    /// # Errors
    /// Fails on an empty command.
    pub fn new(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| NavIndexError::Config("empty archiver command".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl ArchiveWriter for CommandArchiver {
    fn write(&self, source_dir: &Path, archive_file: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(source_dir)
            .arg(archive_file)
            .status()
            .map_err(|source| NavIndexError::Archiver {
                dataset: source_dir.to_path_buf(),
                detail: format!("failed to start '{}': {source}", self.program),
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(NavIndexError::Archiver {
                dataset: source_dir.to_path_buf(),
                detail: format!("'{}' exited with {status}", self.program),
            })
        }
    }
}

/// Deletes every file named `archive_name` under `root`, so a rebuild never
/// packages a previous archive into a new one. Returns how many were
/// removed; individual delete failures are skipped.
#[must_use]
pub fn clean_stale_archives(root: &Path, archive_name: &str) -> usize {
    let mut removed = 0;
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if entry.file_type().is_file()
            && entry.file_name().to_string_lossy() == archive_name
            && fs::remove_file(entry.path()).is_ok()
        {
            removed += 1;
        }
    }
    removed
}

/// Runs the archiver once per dataset directory, collecting failures
/// instead of aborting. Datasets whose directory disappeared are skipped.
pub fn bundle_datasets<'a, I>(
    datasets: I,
    archive_name: &str,
    writer: &dyn ArchiveWriter,
) -> Vec<DatasetFailure>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    let mut failures = Vec::new();
    for dataset in datasets {
        if !dataset.is_dir() {
            continue;
        }
        let archive_file = dataset.join(archive_name);
        if let Err(error) = writer.write(dataset, &archive_file) {
            failures.push(DatasetFailure {
                dataset: dataset.clone(),
                error,
            });
        }
    }
    failures
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
