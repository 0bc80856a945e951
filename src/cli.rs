use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "navindex")]
#[command(author, version, about = "Discovery index builder for batch-effects analysis results")]
#[command(long_about = "Builds navigable JSON indexes over a batch-effects analysis results \
    tree and stages the per-dataset result sets for archival.\n\n\
    Exit codes:\n  \
    0 - All datasets indexed\n  \
    1 - Batch completed with dataset failures\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full pipeline: clean stale archives, index every dataset, archive, write the overall index
    Run(RunArgs),

    /// Write the overall index only
    Index(IndexArgs),

    /// Delete stale archive files under the results root
    Clean(CleanArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Root directory of the analysis results
    pub root: PathBuf,

    /// Display name of this data run
    #[arg(short, long)]
    pub name: String,

    /// Output path for the overall index JSON
    #[arg(short = 'o', long)]
    pub index_out: PathBuf,

    /// Directory the navigation levels are counted from (defaults to the
    /// root)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Base directory the archives are published under (rewrites archive
    /// paths in the overall index)
    #[arg(long)]
    pub final_dir: Option<String>,

    /// Dataset variant name (attaches the auto-correction notice for
    /// corrected variants)
    #[arg(long)]
    pub variant: Option<String>,

    /// Label for the run node (overrides config)
    #[arg(long)]
    pub label: Option<String>,

    /// Path to the tooltip table (overrides config)
    #[arg(long)]
    pub tooltips: Option<PathBuf>,

    /// Archive marker filename (overrides config)
    #[arg(long)]
    pub marker: Option<String>,

    /// Archive filename (overrides config)
    #[arg(long)]
    pub archive: Option<String>,

    /// Level labels, comma-separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,

    /// Default diagram path, comma-separated, `*` resolved per dataset
    /// (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub default_path: Option<Vec<String>>,

    /// Worker-pool size for the dataset batch (overrides config)
    #[arg(long)]
    pub workers: Option<usize>,

    /// External archiver command, invoked per dataset with the dataset
    /// directory and archive path appended (overrides config)
    #[arg(long)]
    pub archiver: Option<String>,

    /// Skip archiving even when an archiver is configured
    #[arg(long)]
    pub skip_bundle: bool,
}

#[derive(Parser, Debug)]
pub struct IndexArgs {
    /// Root directory of the analysis results
    pub root: PathBuf,

    /// Display name of this data run
    #[arg(short, long)]
    pub name: String,

    /// Output path for the overall index JSON
    #[arg(short = 'o', long)]
    pub index_out: PathBuf,

    /// List the root's subdirectories as top-level entries instead of the
    /// root itself
    #[arg(long)]
    pub children_of_root: bool,

    /// Directory archive paths are rewritten from (defaults to the root)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Base directory the archives are published under
    #[arg(long)]
    pub final_dir: Option<String>,

    /// Dataset variant name
    #[arg(long)]
    pub variant: Option<String>,

    /// Label for the run node (overrides config)
    #[arg(long)]
    pub label: Option<String>,

    /// Path to the tooltip table (overrides config)
    #[arg(long)]
    pub tooltips: Option<PathBuf>,

    /// Archive marker filename (overrides config)
    #[arg(long)]
    pub marker: Option<String>,

    /// Archive filename (overrides config)
    #[arg(long)]
    pub archive: Option<String>,

    /// Level labels, comma-separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,

    /// Default diagram path, comma-separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub default_path: Option<Vec<String>>,
}

#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Root directory of the analysis results
    pub root: PathBuf,

    /// Archive filename to delete (overrides config)
    #[arg(long)]
    pub archive: Option<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
