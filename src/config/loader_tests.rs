use std::fs;

use tempfile::TempDir;

use super::*;
use crate::error::NavIndexError;

#[test]
fn no_config_flag_skips_loading() {
    let config = load_config(None, true).unwrap();
    assert_eq!(config, RunConfig::default());
}

#[test]
fn explicit_path_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "marker = \"DONE.txt\"\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();
    assert_eq!(config.marker, "DONE.txt");
}

#[test]
fn explicit_missing_path_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_config(Some(&temp_dir.path().join("absent.toml")), false).unwrap_err();
    assert!(matches!(err, NavIndexError::Config(_)));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "marker = [not toml\n").unwrap();

    let err = load_config(Some(&path), false).unwrap_err();
    assert!(matches!(err, NavIndexError::TomlParse(_)));
}

#[test]
fn no_config_wins_over_an_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "marker = \"DONE.txt\"\n").unwrap();

    let config = load_config(Some(&path), true).unwrap();
    assert_eq!(config, RunConfig::default());
}
