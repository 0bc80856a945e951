use std::path::PathBuf;

use super::*;

#[test]
fn cli_run_minimal_arguments() {
    let cli = Cli::parse_from([
        "navindex", "run", "/data/run", "--name", "GDC 2024", "--index-out", "run.json",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.root, PathBuf::from("/data/run"));
            assert_eq!(args.name, "GDC 2024");
            assert_eq!(args.index_out, PathBuf::from("run.json"));
            assert!(args.final_dir.is_none());
            assert!(!args.skip_bundle);
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn cli_run_with_label_lists() {
    let cli = Cli::parse_from([
        "navindex",
        "run",
        "/data/run",
        "--name",
        "Test",
        "--index-out",
        "run.json",
        "--labels",
        "Program,Disease,Workflow",
        "--default-path",
        "*,PCA",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(
                args.labels,
                Some(vec![
                    "Program".to_string(),
                    "Disease".to_string(),
                    "Workflow".to_string()
                ])
            );
            assert_eq!(args.default_path, Some(vec!["*".to_string(), "PCA".to_string()]));
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn cli_run_requires_name_and_output() {
    assert!(Cli::try_parse_from(["navindex", "run", "/data/run"]).is_err());
    assert!(Cli::try_parse_from(["navindex", "run", "/data/run", "--name", "X"]).is_err());
}

#[test]
fn cli_run_with_workers_and_variant() {
    let cli = Cli::parse_from([
        "navindex", "run", "/r", "--name", "X", "--index-out", "o.json", "--workers", "3",
        "--variant", "EB_withPara",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.workers, Some(3));
            assert_eq!(args.variant, Some("EB_withPara".to_string()));
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn cli_run_with_base_dir() {
    let cli = Cli::parse_from([
        "navindex", "run", "/data/runs/current", "--name", "X", "--index-out", "o.json",
        "--base-dir", "/data/runs",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.base_dir, Some(PathBuf::from("/data/runs")));
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn cli_index_defaults_to_root_as_node() {
    let cli = Cli::parse_from(["navindex", "index", "/r", "--name", "X", "--index-out", "o.json"]);
    match cli.command {
        Commands::Index(args) => {
            assert!(!args.children_of_root);
            assert_eq!(args.root, PathBuf::from("/r"));
        }
        _ => panic!("Expected Index command"),
    }
}

#[test]
fn cli_clean_with_archive_override() {
    let cli = Cli::parse_from(["navindex", "clean", "/r", "--archive", "standardized.zip"]);
    match cli.command {
        Commands::Clean(args) => {
            assert_eq!(args.archive, Some("standardized.zip".to_string()));
        }
        _ => panic!("Expected Clean command"),
    }
}

#[test]
fn cli_global_flags_apply_after_the_subcommand() {
    let cli = Cli::parse_from([
        "navindex", "clean", "/r", "--quiet", "--config", "custom.toml",
    ]);
    assert!(cli.quiet);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}
