use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavIndexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Duplicate tooltip entry for label '{label}' and name '{name}'")]
    TooltipDuplicate { label: String, name: String },

    #[error("Tooltip file {path} is missing required column '{column}'")]
    TooltipColumn { path: PathBuf, column: String },

    #[error("Malformed tooltip row {row} in {path}: expected {expected} columns, found {found}")]
    TooltipRow {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Path {path} is not inside archive base {base}")]
    PathOutsideArchive { path: PathBuf, base: PathBuf },

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Archiver command failed for {dataset}: {detail}")]
    Archiver { dataset: PathBuf, detail: String },
}

pub type Result<T> = std::result::Result<T, NavIndexError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
