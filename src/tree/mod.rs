pub mod rewrite;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::tooltips::TooltipCatalog;

/// Label applied to every diagram leaf, and the fallback for depths beyond
/// the configured label list.
pub const DIAGRAM_LABEL: &str = "Diagram";

/// Which traversal populates a node's children. Not serialized; stored shape
/// is identical for all three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Plain directory level, listed from the live file system.
    Container,
    /// Directory whose contents are packaged into the companion archive;
    /// descent below it is archive-backed.
    ArchiveRoot,
    /// Directory or diagram inside an archived subtree.
    ArchiveInternal,
}

/// One level of the drop-down navigation tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub level: u32,
    pub label: String,
    pub name: String,
    pub tooltip: String,
    pub children: BTreeSet<Node>,
    pub is_diagram: bool,
    pub archive_path: String,
    pub internal_location: String,
    pub algorithm: String,
    pub other_files: BTreeSet<String>,
    #[serde(skip)]
    pub kind: NodeKind,
}

impl Node {
    /// Skeletal container node for a live directory. Children are attached by
    /// the traversal driver.
    #[must_use]
    pub fn container(location: &Path, level: u32, labels: &[String], tooltips: &TooltipCatalog) -> Self {
        Self::skeleton(location, level, labels, tooltips, NodeKind::Container, String::new())
    }

    /// Skeletal node for the directory backing an archive. Every descendant
    /// inherits `archive_path`.
    #[must_use]
    pub fn archive_root(
        location: &Path,
        level: u32,
        labels: &[String],
        archive_path: String,
        tooltips: &TooltipCatalog,
    ) -> Self {
        Self::skeleton(location, level, labels, tooltips, NodeKind::ArchiveRoot, archive_path)
    }

    /// Skeletal non-diagram node inside an archived subtree.
    #[must_use]
    pub fn archive_internal(
        location: &Path,
        level: u32,
        labels: &[String],
        archive_path: &str,
        tooltips: &TooltipCatalog,
    ) -> Self {
        Self::skeleton(
            location,
            level,
            labels,
            tooltips,
            NodeKind::ArchiveInternal,
            archive_path.to_string(),
        )
    }

    /// Diagram leaf for a recognized analysis output.
    #[must_use]
    pub fn diagram(
        filename: &str,
        level: u32,
        archive_path: &str,
        internal_location: String,
        algorithm: &str,
        other_files: BTreeSet<String>,
        tooltips: &TooltipCatalog,
    ) -> Self {
        let name = display_name(filename);
        let tooltip = tooltips.lookup(DIAGRAM_LABEL, &name).to_string();
        Self {
            level,
            label: DIAGRAM_LABEL.to_string(),
            name,
            tooltip,
            children: BTreeSet::new(),
            is_diagram: true,
            archive_path: archive_path.to_string(),
            internal_location,
            algorithm: algorithm.to_string(),
            other_files,
            kind: NodeKind::ArchiveInternal,
        }
    }

    fn skeleton(
        location: &Path,
        level: u32,
        labels: &[String],
        tooltips: &TooltipCatalog,
        kind: NodeKind,
        archive_path: String,
    ) -> Self {
        let label = level_label(level, labels).to_string();
        let name = display_name(&file_name(location));
        let tooltip = tooltips.lookup(&label, &name).to_string();
        Self {
            level,
            label,
            name,
            tooltip,
            children: BTreeSet::new(),
            is_diagram: false,
            archive_path,
            internal_location: String::new(),
            algorithm: String::new(),
            other_files: BTreeSet::new(),
            kind,
        }
    }
}

// Children are keyed by display name; names are unique within one directory
// because they derive from distinct file-system entries.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Tree root, one per index-build invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub label: String,
    pub name: String,
    pub tooltip: String,
    pub default_diagram_path: Vec<String>,
    pub notice: String,
    pub children: BTreeSet<Node>,
    #[serde(skip)]
    pub archive_marker_name: String,
    #[serde(skip)]
    pub archive_file_name: String,
}

impl Run {
    #[must_use]
    pub fn new(
        label: &str,
        name: &str,
        default_diagram_path: Vec<String>,
        notice: String,
        archive_marker_name: &str,
        archive_file_name: &str,
        tooltips: &TooltipCatalog,
    ) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            tooltip: tooltips.lookup(label, name).to_string(),
            default_diagram_path,
            notice,
            children: BTreeSet::new(),
            archive_marker_name: archive_marker_name.to_string(),
            archive_file_name: archive_file_name.to_string(),
        }
    }
}

/// Label for a depth: the configured list, falling back to the diagram label
/// once depth runs past it.
#[must_use]
pub fn level_label(level: u32, labels: &[String]) -> &str {
    labels
        .get(level as usize)
        .map_or(DIAGRAM_LABEL, String::as_str)
}

/// Converts a file or directory name into its display form: the last
/// underscore becomes a space, every other underscore becomes a dash, and a
/// trailing `.tsv`/`.png` extension is dropped (case-insensitive).
#[must_use]
pub fn display_name(raw: &str) -> String {
    let last_underscore = raw.rfind('_');
    let mut name: String = raw
        .char_indices()
        .map(|(i, c)| match c {
            '_' if Some(i) == last_underscore => ' ',
            '_' => '-',
            other => other,
        })
        .collect();
    for ext in [".tsv", ".png"] {
        if name.len() > ext.len() && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext) {
            name.truncate(name.len() - ext.len());
            break;
        }
    }
    name
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
