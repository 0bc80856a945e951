#![allow(deprecated)] // cargo_bin deprecation - still works fine

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{TestFixture, BASIC_TOOLTIPS};

fn cmd() -> Command {
    Command::cargo_bin("navindex").expect("binary should exist")
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).expect("index file readable"))
        .expect("index file is valid JSON")
}

#[test]
fn run_builds_dataset_and_overall_indexes() {
    let fixture = TestFixture::new();
    let dataset = fixture.create_dataset("TCGA/KIRC");
    fixture.create_boxplot("TCGA/KIRC", "BatchId");
    let index_out = fixture.path().join("indexes/run.json");

    cmd()
        .arg("run")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--labels")
        .arg("Program,Disease")
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 dataset(s)"))
        .stdout(predicate::str::contains("Indexed 1 dataset(s)"));

    // dataset index: embedded beside the marker, archive paths anonymized
    let dataset_index = read_json(&dataset.join("index.json"));
    assert_eq!(dataset_index["name"], "Test Run");
    assert_eq!(dataset_index["label"], "Data Run");
    let program = &dataset_index["children"][0];
    assert_eq!(program["name"], "TCGA");
    assert_eq!(program["label"], "Program");
    assert_eq!(program["archivePath"], "");
    let disease = &program["children"][0];
    assert_eq!(disease["name"], "KIRC");
    assert_eq!(disease["archivePath"], "ResultSet.zip");
    let boxplot_dir = &disease["children"][0];
    let diagram = &boxplot_dir["children"][0];
    assert_eq!(diagram["isDiagram"], true);
    assert_eq!(diagram["algorithm"], "Boxplot");
    assert_eq!(
        diagram["internalLocation"],
        "KIRC/BoxPlot/BoxPlot_AllSamples_BoxData-BatchId.tsv"
    );
    assert_eq!(
        diagram["otherFiles"],
        serde_json::json!([
            "KIRC/BoxPlot/BoxPlot_AllSamples_Annotations-BatchId.tsv",
            "KIRC/BoxPlot/BoxPlot_AllSamples_Histogram-BatchId.tsv",
        ])
    );

    // overall index: full paths kept without a final dir
    let overall = read_json(&index_out);
    let text = overall.to_string();
    assert!(text.contains("Boxplot"));
    assert!(text.contains(&fixture.path().join("TCGA/KIRC/ResultSet.zip").display().to_string()));
}

#[test]
fn run_with_final_dir_relocates_overall_archive_paths() {
    let fixture = TestFixture::new();
    fixture.create_dataset("TCGA/KIRC");
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("run")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--final-dir")
        .arg("/publish/2024")
        .arg("--no-config")
        .assert()
        .success();

    let overall = read_json(&index_out).to_string();
    assert!(overall.contains("/publish/2024/TCGA/KIRC/ResultSet.zip"));
    assert!(!overall.contains(&fixture.path().join("TCGA").display().to_string()));
}

#[test]
fn corrected_variants_carry_the_notice() {
    let fixture = TestFixture::new();
    fixture.create_dataset("TCGA/KIRC");
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("run")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--variant")
        .arg("EB_withPara")
        .arg("--no-config")
        .assert()
        .success();

    let overall = read_json(&index_out);
    assert!(overall["notice"]
        .as_str()
        .unwrap()
        .contains("corrected using an automated system"));
}

#[test]
fn uncorrected_variants_have_an_empty_notice() {
    let fixture = TestFixture::new();
    fixture.create_dataset("TCGA/KIRC");
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("run")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--variant")
        .arg("All-original")
        .arg("--no-config")
        .assert()
        .success();

    assert_eq!(read_json(&index_out)["notice"], "");
}

#[test]
fn tooltips_resolve_into_the_index() {
    let fixture = TestFixture::new();
    fixture.create_dataset("TCGA/KIRC");
    fixture.create_file("tooltips.tsv", BASIC_TOOLTIPS);
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("run")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--labels")
        .arg("Program,Disease")
        .arg("--tooltips")
        .arg(fixture.path().join("tooltips.tsv"))
        .arg("--no-config")
        .assert()
        .success();

    let overall = read_json(&index_out);
    assert_eq!(overall["tooltip"], "A test data run");

    let dataset_index = read_json(&fixture.path().join("TCGA/KIRC/index.json"));
    assert_eq!(dataset_index["children"][0]["tooltip"], "A data program");
}

#[test]
fn index_subcommand_writes_only_the_overall_index() {
    let fixture = TestFixture::new();
    let dataset = fixture.create_dataset("TCGA/KIRC");
    fixture.create_boxplot("TCGA/KIRC", "BatchId");
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("index")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--labels")
        .arg("Program,Disease")
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote index to"));

    assert!(index_out.is_file());
    assert!(!dataset.join("index.json").exists());
}

#[test]
fn index_children_of_root_lists_top_level_directories() {
    let fixture = TestFixture::new();
    fixture.create_dataset("TCGA/KIRC");
    fixture.create_dir("TARGET");
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("index")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--children-of-root")
        .arg("--no-config")
        .assert()
        .success();

    let overall = read_json(&index_out);
    let names: Vec<&str> = overall["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["TARGET", "TCGA"]);
}

#[test]
fn base_dir_shifts_the_level_origin() {
    let fixture = TestFixture::new();
    fixture.create_dataset("current/TCGA/KIRC");
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("run")
        .arg(fixture.path().join("current"))
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--base-dir")
        .arg(fixture.path())
        .arg("--labels")
        .arg("Version,Program,Disease")
        .arg("--no-config")
        .assert()
        .success();

    // levels are counted from the base, so "current" is the Version level
    let dataset_index = read_json(&fixture.path().join("current/TCGA/KIRC/index.json"));
    let version = &dataset_index["children"][0];
    assert_eq!(version["name"], "current");
    assert_eq!(version["label"], "Version");
    assert_eq!(version["children"][0]["name"], "TCGA");
    assert_eq!(version["children"][0]["label"], "Program");
}

#[test]
fn run_reports_multiple_datasets() {
    let fixture = TestFixture::new();
    fixture.create_dataset("TCGA/KIRC");
    fixture.create_dataset("TCGA/BRCA");
    fixture.create_dataset("TARGET/AML");
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("run")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 dataset(s)"))
        .stdout(predicate::str::contains("Indexed 3 dataset(s)"));

    for dataset in ["TCGA/KIRC", "TCGA/BRCA", "TARGET/AML"] {
        assert!(fixture.path().join(dataset).join("index.json").is_file());
    }
}

#[cfg(unix)]
#[test]
fn run_invokes_the_configured_archiver() {
    let fixture = TestFixture::new();
    fixture.create_dataset("TCGA/KIRC");
    let index_out = fixture.path().join("run.json");

    // `touch` stands in for a packer: it creates the destination archive
    cmd()
        .arg("run")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--archiver")
        .arg("touch -a")
        .arg("--no-config")
        .assert()
        .success();

    assert!(fixture.path().join("TCGA/KIRC/ResultSet.zip").is_file());
}

#[cfg(unix)]
#[test]
fn failing_archiver_yields_exit_code_one() {
    let fixture = TestFixture::new();
    fixture.create_dataset("TCGA/KIRC");
    let index_out = fixture.path().join("run.json");

    cmd()
        .arg("run")
        .arg(fixture.path())
        .arg("--name")
        .arg("Test Run")
        .arg("--index-out")
        .arg(&index_out)
        .arg("--archiver")
        .arg("false")
        .arg("--no-config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 dataset(s) failed"));

    // the index build itself still completed
    assert!(fixture.path().join("TCGA/KIRC/index.json").is_file());
    assert!(index_out.is_file());
}
