use std::fs;
use std::path::{Path, PathBuf};

/// One-level directory access used by the tree builders.
///
/// Listings are name-sorted so sibling order is stable across runs. An
/// unreadable directory lists as empty: one bad subtree must never abort its
/// siblings or the whole run.
pub trait DirLister: Sync {
    /// Immediate subdirectories, name-sorted.
    fn list_dirs(&self, dir: &Path) -> Vec<PathBuf>;

    /// Immediate regular files, name-sorted.
    fn list_files(&self, dir: &Path) -> Vec<PathBuf>;

    /// Whether `dir` directly contains a regular file called `name`.
    fn has_file(&self, dir: &Path, name: &str) -> bool;

    /// Whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Live file-system lister.
pub struct FsLister;

impl FsLister {
    fn list(dir: &Path, want_dirs: bool) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut paths: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| if want_dirs { path.is_dir() } else { path.is_file() })
            .collect();
        paths.sort();
        paths
    }
}

impl DirLister for FsLister {
    fn list_dirs(&self, dir: &Path) -> Vec<PathBuf> {
        Self::list(dir, true)
    }

    fn list_files(&self, dir: &Path) -> Vec<PathBuf> {
        Self::list(dir, false)
    }

    fn has_file(&self, dir: &Path, name: &str) -> bool {
        dir.join(name).is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
