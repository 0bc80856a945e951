use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NavIndexError, Result};

use super::RunConfig;

/// Default configuration filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "navindex.toml";

/// Loads the run configuration.
///
/// An explicit path must exist; without one, `navindex.toml` in the working
/// directory is used when present, defaults otherwise. `no_config` skips
/// file loading entirely.
///
/// # Errors
/// Fails if an explicitly given file is missing or unreadable, or if the
/// TOML does not parse into the configuration model.
pub fn load_config(explicit: Option<&Path>, no_config: bool) -> Result<RunConfig> {
    if no_config {
        return Ok(RunConfig::default());
    }
    let path: Option<PathBuf> = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(NavIndexError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => {
            let discovered = PathBuf::from(CONFIG_FILENAME);
            discovered.is_file().then_some(discovered)
        }
    };

    match path {
        None => Ok(RunConfig::default()),
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|source| NavIndexError::FileRead {
                path: path.clone(),
                source,
            })?;
            Ok(toml::from_str(&content)?)
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
