#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Default archive-marker filename used by the fixtures.
pub const MARKER: &str = "MBATCH_SUCCESS.txt";

/// Temporary results tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory.
    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path)).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Marks a directory as a completed dataset and returns its path.
    pub fn create_dataset(&self, relative_path: &str) -> PathBuf {
        self.create_file(&format!("{relative_path}/{MARKER}"), "");
        self.dir.path().join(relative_path)
    }

    /// Adds a boxplot result file below a dataset directory.
    pub fn create_boxplot(&self, dataset_relative: &str, batch_type: &str) {
        self.create_file(
            &format!("{dataset_relative}/BoxPlot/BoxPlot_AllSamples_BoxData-{batch_type}.tsv"),
            "data",
        );
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Tooltip table with entries for the standard run label.
pub const BASIC_TOOLTIPS: &str = "mLabel\tmName\tmTooltip\n\
    Data Run\tTest Run\tA test data run\n\
    Program\t*\tA data program\n\
    Diagram\t*\tAn analysis diagram\n";
