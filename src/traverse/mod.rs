//! Tree construction over a results hierarchy.
//!
//! Containers are listed from the live file system one level at a time.
//! A directory carrying the archive-marker file becomes an archive root:
//! descent below it continues against the (pre-archive or extracted) copy of
//! the same subtree, tagging nodes with the archive path and in-archive
//! locations, and classifying files against the diagram catalog.

mod lister;

pub use lister::{DirLister, FsLister};

use std::collections::BTreeSet;
use std::path::Path;

use crate::catalog::{self, DiagramCatalog, Termination};
use crate::error::{NavIndexError, Result};
use crate::path_utils::archive_relative;
use crate::tooltips::TooltipCatalog;
use crate::tree::{Node, Run};

/// Root convention for a full scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// The root directory itself becomes the single level-0 node.
    RootAsNode,
    /// The root's subdirectories become the level-0 nodes.
    ChildrenOfRoot,
}

/// Recursive tree builder over an injected directory lister.
pub struct TreeBuilder<'a, L: DirLister> {
    lister: &'a L,
    tooltips: &'a TooltipCatalog,
    catalog: &'a DiagramCatalog,
    labels: &'a [String],
    marker_name: &'a str,
    archive_name: &'a str,
}

impl<'a, L: DirLister> TreeBuilder<'a, L> {
    #[must_use]
    pub const fn new(
        lister: &'a L,
        tooltips: &'a TooltipCatalog,
        catalog: &'a DiagramCatalog,
        labels: &'a [String],
        marker_name: &'a str,
        archive_name: &'a str,
    ) -> Self {
        Self {
            lister,
            tooltips,
            catalog,
            labels,
            marker_name,
            archive_name,
        }
    }

    /// Full scan: every subdirectory is visited, archive boundaries are
    /// detected anywhere in the subtree.
    ///
    /// # Errors
    /// Fails only on an in-archive location that falls outside its archive
    /// base (a caller bug, see [`archive_relative`]).
    pub fn scan(&self, root: &Path, mode: ScanMode) -> Result<BTreeSet<Node>> {
        match mode {
            ScanMode::RootAsNode => Ok(BTreeSet::from([self.container_node(root, 0)?])),
            ScanMode::ChildrenOfRoot => self.container_children(root, 0),
        }
    }

    /// Targeted walk: one container node per path segment from `root` down
    /// to `dataset_dir`, probing for the archive marker only at the final
    /// segment. Wildcard entries in `defaults` are resolved in place against
    /// the dataset path once the marker is found.
    ///
    /// # Errors
    /// Fails if `dataset_dir` is not under `root`, or on an in-archive
    /// location error.
    pub fn targeted(
        &self,
        root: &Path,
        dataset_dir: &Path,
        defaults: &mut [String],
    ) -> Result<BTreeSet<Node>> {
        let relative = dataset_dir.strip_prefix(root).map_err(|_| {
            NavIndexError::Config(format!(
                "dataset directory {} is not under root {}",
                dataset_dir.display(),
                root.display()
            ))
        })?;
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let mut chain: Vec<Node> = Vec::new();
        let mut current = root.to_path_buf();
        for (depth, segment) in segments.iter().enumerate() {
            current.push(segment);
            if !self.lister.is_dir(&current) {
                break;
            }
            let level = u32::try_from(depth).unwrap_or(u32::MAX);
            let last = depth + 1 == segments.len();
            if last && self.lister.has_file(&current, self.marker_name) {
                resolve_wildcards(defaults, &segments);
                chain.push(self.archive_node(&current, level)?);
            } else {
                chain.push(Node::container(&current, level, self.labels, self.tooltips));
            }
        }

        let mut top: Option<Node> = None;
        for mut node in chain.into_iter().rev() {
            if let Some(child) = top.take() {
                node.children.insert(child);
            }
            top = Some(node);
        }
        Ok(top.map(|node| BTreeSet::from([node])).unwrap_or_default())
    }

    fn container_node(&self, dir: &Path, level: u32) -> Result<Node> {
        let mut node = Node::container(dir, level, self.labels, self.tooltips);
        node.children = self.container_children(dir, level + 1)?;
        Ok(node)
    }

    fn container_children(&self, dir: &Path, level: u32) -> Result<BTreeSet<Node>> {
        let mut children = BTreeSet::new();
        for sub in self.lister.list_dirs(dir) {
            let child = if self.lister.has_file(&sub, self.marker_name) {
                self.archive_node(&sub, level)?
            } else {
                self.container_node(&sub, level)?
            };
            children.insert(child);
        }
        Ok(children)
    }

    /// Node for a directory whose contents are packaged into the companion
    /// archive. Subdirectories continue archive-backed; the run summary
    /// image and the dispersion overview table are surfaced directly at this
    /// level, bypassing the general classifier.
    fn archive_node(&self, dir: &Path, level: u32) -> Result<Node> {
        let archive_path = dir.join(self.archive_name).to_string_lossy().into_owned();
        let mut node = Node::archive_root(dir, level, self.labels, archive_path.clone(), self.tooltips);

        for sub in self.lister.list_dirs(dir) {
            node.children.insert(self.internal_node(&sub, level + 1, &archive_path)?);
        }
        for file in self.lister.list_files(dir) {
            let Some(filename) = file_name(&file) else {
                continue;
            };
            let algorithm = if filename.eq_ignore_ascii_case(catalog::RUN_INFO_IMAGE) {
                catalog::STANDARDIZED_DATA
            } else if filename.eq_ignore_ascii_case(catalog::DSC_OVERVIEW_TABLE) {
                catalog::DSC
            } else {
                continue;
            };
            let internal = archive_relative(&file, Path::new(&archive_path))?;
            node.children.insert(Node::diagram(
                &filename,
                level + 1,
                &archive_path,
                internal,
                algorithm,
                BTreeSet::new(),
                self.tooltips,
            ));
        }
        Ok(node)
    }

    /// Directory inside an archived subtree: classify its files, then decide
    /// whether to keep descending.
    ///
    /// The directory holds one tri-state verdict, not one per file. The
    /// first classified file (filename order) fixes it: stop for ordinary
    /// rules, continue for the dispersion overview when sibling
    /// subdirectories exist. Later matches never change the verdict. With no
    /// verdict, or a continue verdict, every subdirectory is descended.
    fn internal_node(&self, dir: &Path, level: u32, archive_path: &str) -> Result<Node> {
        let mut node = Node::archive_internal(dir, level, self.labels, archive_path, self.tooltips);
        let subdirs = self.lister.list_dirs(dir);

        let mut stop_search: Option<bool> = None;
        for file in self.lister.list_files(dir) {
            let Some(filename) = file_name(&file) else {
                continue;
            };
            let Some(rule) = self.catalog.classify(&filename) else {
                continue;
            };
            let internal = archive_relative(&file, Path::new(archive_path))?;
            let other_files = rule.companions(&internal);
            node.children.insert(Node::diagram(
                &filename,
                level + 1,
                archive_path,
                internal,
                rule.algorithm,
                other_files,
                self.tooltips,
            ));
            if stop_search.is_none() {
                stop_search = Some(match rule.termination {
                    Termination::Stop => true,
                    Termination::ContinueIfSubdirs => subdirs.is_empty(),
                });
            }
        }

        if stop_search != Some(true) {
            for sub in subdirs {
                node.children.insert(self.internal_node(&sub, level + 1, archive_path)?);
            }
        }
        Ok(node)
    }

    /// Assembles a [`Run`] from a full scan.
    ///
    /// # Errors
    /// See [`Self::scan`].
    pub fn build_scan_run(
        &self,
        root: &Path,
        mode: ScanMode,
        name: &str,
        run_label: &str,
        defaults: Vec<String>,
        notice: String,
    ) -> Result<Run> {
        let mut run = Run::new(
            run_label,
            name,
            defaults,
            notice,
            self.marker_name,
            self.archive_name,
            self.tooltips,
        );
        run.children = self.scan(root, mode)?;
        Ok(run)
    }

    /// Assembles a [`Run`] for a single dataset directory via the targeted
    /// walk, resolving wildcard entries of the default diagram path.
    ///
    /// # Errors
    /// See [`Self::targeted`].
    pub fn build_dataset_run(
        &self,
        root: &Path,
        dataset_dir: &Path,
        name: &str,
        run_label: &str,
        defaults: Vec<String>,
        notice: String,
    ) -> Result<Run> {
        let mut run = Run::new(
            run_label,
            name,
            defaults,
            notice,
            self.marker_name,
            self.archive_name,
            self.tooltips,
        );
        run.children = self.targeted(root, dataset_dir, &mut run.default_diagram_path)?;
        Ok(run)
    }
}

fn resolve_wildcards(defaults: &mut [String], segments: &[String]) {
    for (index, entry) in defaults.iter_mut().enumerate() {
        if entry.as_str() == "*"
            && let Some(segment) = segments.get(index)
        {
            entry.clone_from(segment);
        }
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
