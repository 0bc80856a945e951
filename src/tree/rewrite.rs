//! Post-build passes over a finished [`Run`].
//!
//! `relocate` points archive paths at their publish location; `anonymize`
//! strips them to bare filenames for indexes embedded inside the archives
//! themselves. The passes are independent tree walks and compose in either
//! order.

use std::collections::BTreeSet;
use std::path::Path;

use super::{Node, Run};

/// Replaces `original_base` with `new_base` in every non-empty archive path.
pub fn relocate(run: &mut Run, original_base: &str, new_base: &str) {
    run.children = relocate_nodes(std::mem::take(&mut run.children), original_base, new_base);
}

fn relocate_nodes(nodes: BTreeSet<Node>, original_base: &str, new_base: &str) -> BTreeSet<Node> {
    nodes
        .into_iter()
        .map(|mut node| {
            if !node.archive_path.is_empty() {
                node.archive_path = node.archive_path.replace(original_base, new_base);
            }
            node.children = relocate_nodes(std::mem::take(&mut node.children), original_base, new_base);
            node
        })
        .collect()
}

/// Reduces every non-empty archive path to its final path component.
pub fn anonymize(run: &mut Run) {
    run.children = anonymize_nodes(std::mem::take(&mut run.children));
}

fn anonymize_nodes(nodes: BTreeSet<Node>) -> BTreeSet<Node> {
    nodes
        .into_iter()
        .map(|mut node| {
            if !node.archive_path.is_empty() {
                node.archive_path = Path::new(&node.archive_path)
                    .file_name()
                    .map_or_else(|| node.archive_path.clone(), |n| n.to_string_lossy().into_owned());
            }
            node.children = anonymize_nodes(std::mem::take(&mut node.children));
            node
        })
        .collect()
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
