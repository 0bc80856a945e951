//! Marker discovery and the parallel per-dataset index build.
//!
//! Each dataset directory (a directory directly containing the archive
//! marker file) gets its own [`Run`] built and written by exactly one
//! worker. Workers share only the read-only tooltip catalog and rule table;
//! a failing dataset is recorded and never cancels its siblings.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::catalog::DiagramCatalog;
use crate::emit;
use crate::error::{NavIndexError, Result};
use crate::progress::BatchProgress;
use crate::tooltips::TooltipCatalog;
use crate::traverse::{DirLister, TreeBuilder};

/// Default worker-pool size for dataset builds.
pub const DEFAULT_WORKERS: usize = 5;

/// Settings shared by every dataset build in one batch.
pub struct BatchOptions<'a> {
    pub root: &'a Path,
    pub name: &'a str,
    pub run_label: &'a str,
    pub labels: &'a [String],
    pub default_path: &'a [String],
    pub marker_name: &'a str,
    pub archive_name: &'a str,
    pub notice: &'a str,
    pub workers: usize,
}

/// One dataset that could not be indexed, with enough context to diagnose.
#[derive(Debug)]
pub struct DatasetFailure {
    pub dataset: PathBuf,
    pub error: NavIndexError,
}

/// Outcome of a batch: which datasets were indexed and which failed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub indexed: Vec<PathBuf>,
    pub failures: Vec<DatasetFailure>,
}

/// Directories directly containing `marker_name`, in path order. Descent
/// stops at a matched directory; markers nested below another marker belong
/// to that dataset's own subtree.
pub fn find_marker_dirs<L: DirLister>(lister: &L, root: &Path, marker_name: &str) -> BTreeSet<PathBuf> {
    let mut found = BTreeSet::new();
    collect_marker_dirs(lister, root, marker_name, &mut found);
    found
}

fn collect_marker_dirs<L: DirLister>(
    lister: &L,
    dir: &Path,
    marker_name: &str,
    found: &mut BTreeSet<PathBuf>,
) {
    if lister.has_file(dir, marker_name) {
        found.insert(dir.to_path_buf());
        return;
    }
    for sub in lister.list_dirs(dir) {
        collect_marker_dirs(lister, &sub, marker_name, found);
    }
}

/// Builds and writes one `index.json` per dataset directory, in parallel on
/// an explicitly sized pool.
///
/// # Errors
/// Fails only when the worker pool cannot be built; per-dataset errors land
/// in the report instead.
pub fn index_datasets<L: DirLister>(
    lister: &L,
    tooltips: &TooltipCatalog,
    catalog: &DiagramCatalog,
    datasets: &BTreeSet<PathBuf>,
    options: &BatchOptions<'_>,
    progress: &BatchProgress,
) -> Result<BatchReport> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers)
        .build()?;

    let outcomes: Vec<(PathBuf, Result<()>)> = pool.install(|| {
        datasets
            .par_iter()
            .map(|dataset| {
                let outcome = index_one_dataset(lister, tooltips, catalog, dataset, options);
                progress.inc();
                (dataset.clone(), outcome)
            })
            .collect()
    });

    let mut report = BatchReport::default();
    for (dataset, outcome) in outcomes {
        match outcome {
            Ok(()) => report.indexed.push(dataset),
            Err(error) => report.failures.push(DatasetFailure { dataset, error }),
        }
    }
    Ok(report)
}

fn index_one_dataset<L: DirLister>(
    lister: &L,
    tooltips: &TooltipCatalog,
    catalog: &DiagramCatalog,
    dataset: &Path,
    options: &BatchOptions<'_>,
) -> Result<()> {
    let builder = TreeBuilder::new(
        lister,
        tooltips,
        catalog,
        options.labels,
        options.marker_name,
        options.archive_name,
    );
    let mut run = builder.build_dataset_run(
        options.root,
        dataset,
        options.name,
        options.run_label,
        options.default_path.to_vec(),
        options.notice.to_string(),
    )?;
    emit::write_dataset_index(&mut run, dataset)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
