use std::path::Path;

use clap::Parser;

use navindex::batch::{self, BatchOptions, BatchReport};
use navindex::bundle::{self, CommandArchiver};
use navindex::catalog::DiagramCatalog;
use navindex::cli::{CleanArgs, Cli, Commands, IndexArgs, RunArgs};
use navindex::config::{load_config, RunConfig};
use navindex::emit;
use navindex::progress::BatchProgress;
use navindex::tooltips::TooltipCatalog;
use navindex::traverse::{FsLister, ScanMode, TreeBuilder};
use navindex::{EXIT_CONFIG_ERROR, EXIT_DATASET_FAILURES, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Run(args) => run_run(args, &cli),
        Commands::Index(args) => run_index(args, &cli),
        Commands::Clean(args) => run_clean(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_run(args: &RunArgs, cli: &Cli) -> i32 {
    match run_run_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_run_impl(args: &RunArgs, cli: &Cli) -> navindex::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_run_overrides(&mut config, args);

    // 2. Load shared read-only inputs
    let tooltips = load_tooltips(config.tooltips.as_deref())?;
    let catalog = DiagramCatalog::new();
    let lister = FsLister;

    // 3. Sweep stale archives so a rebuild never re-packages them
    let removed = bundle::clean_stale_archives(&args.root, &config.archive);
    if !cli.quiet && removed > 0 {
        println!("Removed {removed} stale archive(s)");
    }

    // 4. Discover dataset directories by marker file
    let datasets = batch::find_marker_dirs(&lister, &args.root, &config.marker);
    if !cli.quiet {
        println!("Found {} dataset(s) under {}", datasets.len(), args.root.display());
    }

    // 5. Build per-dataset indexes in parallel, levels counted from the base
    let base = args.base_dir.clone().unwrap_or_else(|| args.root.clone());
    let notice = config.notice.for_variant(args.variant.as_deref());
    let options = BatchOptions {
        root: &base,
        name: &args.name,
        run_label: &config.run_label,
        labels: &config.labels,
        default_path: &config.default_path,
        marker_name: &config.marker,
        archive_name: &config.archive,
        notice: &notice,
        workers: config.workers,
    };
    let progress = BatchProgress::new(datasets.len() as u64, cli.quiet);
    let mut report = batch::index_datasets(&lister, &tooltips, &catalog, &datasets, &options, &progress)?;
    progress.finish();

    // 6. Package each dataset with the external archiver
    if !args.skip_bundle
        && let Some(command) = &config.archiver
    {
        let archiver = CommandArchiver::new(command)?;
        report
            .failures
            .extend(bundle::bundle_datasets(&datasets, &config.archive, &archiver));
    }

    // 7. Build and write the overall index
    let builder = TreeBuilder::new(
        &lister,
        &tooltips,
        &catalog,
        &config.labels,
        &config.marker,
        &config.archive,
    );
    let mut run = builder.build_scan_run(
        &args.root,
        ScanMode::RootAsNode,
        &args.name,
        &config.run_label,
        config.default_path.clone(),
        notice,
    )?;
    let original_base = base.to_string_lossy();
    emit::write_overall_index(&mut run, &args.index_out, &original_base, args.final_dir.as_deref())?;
    if !cli.quiet {
        println!("Wrote overall index to {}", args.index_out.display());
    }

    // 8. Report the batch outcome
    Ok(report_exit_code(&report, cli.quiet))
}

fn report_exit_code(report: &BatchReport, quiet: bool) -> i32 {
    if !quiet {
        println!("Indexed {} dataset(s)", report.indexed.len());
    }
    if report.failures.is_empty() {
        return EXIT_SUCCESS;
    }
    for failure in &report.failures {
        eprintln!("Failed dataset {}: {}", failure.dataset.display(), failure.error);
    }
    eprintln!("{} dataset(s) failed", report.failures.len());
    EXIT_DATASET_FAILURES
}

fn run_index(args: &IndexArgs, cli: &Cli) -> i32 {
    match run_index_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_index_impl(args: &IndexArgs, cli: &Cli) -> navindex::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_index_overrides(&mut config, args);

    // 2. Load shared inputs
    let tooltips = load_tooltips(config.tooltips.as_deref())?;
    let catalog = DiagramCatalog::new();
    let lister = FsLister;

    // 3. Build the tree and write the index
    let mode = if args.children_of_root {
        ScanMode::ChildrenOfRoot
    } else {
        ScanMode::RootAsNode
    };
    let builder = TreeBuilder::new(
        &lister,
        &tooltips,
        &catalog,
        &config.labels,
        &config.marker,
        &config.archive,
    );
    let mut run = builder.build_scan_run(
        &args.root,
        mode,
        &args.name,
        &config.run_label,
        config.default_path.clone(),
        config.notice.for_variant(args.variant.as_deref()),
    )?;
    let base = args.base_dir.as_deref().unwrap_or(&args.root);
    let original_base = base.to_string_lossy();
    emit::write_overall_index(&mut run, &args.index_out, &original_base, args.final_dir.as_deref())?;
    if !cli.quiet {
        println!("Wrote index to {}", args.index_out.display());
    }
    Ok(EXIT_SUCCESS)
}

fn run_clean(args: &CleanArgs, cli: &Cli) -> i32 {
    match run_clean_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_clean_impl(args: &CleanArgs, cli: &Cli) -> navindex::Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(archive) = &args.archive {
        config.archive.clone_from(archive);
    }
    let removed = bundle::clean_stale_archives(&args.root, &config.archive);
    if !cli.quiet {
        println!("Removed {removed} stale archive(s)");
    }
    Ok(EXIT_SUCCESS)
}

fn load_tooltips(path: Option<&Path>) -> navindex::Result<TooltipCatalog> {
    path.map_or_else(|| Ok(TooltipCatalog::empty()), TooltipCatalog::from_file)
}

fn apply_run_overrides(config: &mut RunConfig, args: &RunArgs) {
    if let Some(label) = &args.label {
        config.run_label.clone_from(label);
    }
    if let Some(tooltips) = &args.tooltips {
        config.tooltips = Some(tooltips.clone());
    }
    if let Some(marker) = &args.marker {
        config.marker.clone_from(marker);
    }
    if let Some(archive) = &args.archive {
        config.archive.clone_from(archive);
    }
    if let Some(labels) = &args.labels {
        config.labels.clone_from(labels);
    }
    if let Some(default_path) = &args.default_path {
        config.default_path.clone_from(default_path);
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(archiver) = &args.archiver {
        config.archiver = Some(archiver.clone());
    }
}

fn apply_index_overrides(config: &mut RunConfig, args: &IndexArgs) {
    if let Some(label) = &args.label {
        config.run_label.clone_from(label);
    }
    if let Some(tooltips) = &args.tooltips {
        config.tooltips = Some(tooltips.clone());
    }
    if let Some(marker) = &args.marker {
        config.marker.clone_from(marker);
    }
    if let Some(archive) = &args.archive {
        config.archive.clone_from(archive);
    }
    if let Some(labels) = &args.labels {
        config.labels.clone_from(labels);
    }
    if let Some(default_path) = &args.default_path {
        config.default_path.clone_from(default_path);
    }
}
