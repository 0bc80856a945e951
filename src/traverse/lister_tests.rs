use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn listings_are_name_sorted() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("beta")).unwrap();
    fs::create_dir(temp_dir.path().join("alpha")).unwrap();
    fs::write(temp_dir.path().join("z.tsv"), "").unwrap();
    fs::write(temp_dir.path().join("a.tsv"), "").unwrap();

    let lister = FsLister;
    let dirs = lister.list_dirs(temp_dir.path());
    assert_eq!(dirs, vec![temp_dir.path().join("alpha"), temp_dir.path().join("beta")]);

    let files = lister.list_files(temp_dir.path());
    assert_eq!(files, vec![temp_dir.path().join("a.tsv"), temp_dir.path().join("z.tsv")]);
}

#[test]
fn dirs_and_files_do_not_mix() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("sub")).unwrap();
    fs::write(temp_dir.path().join("data.tsv"), "").unwrap();

    let lister = FsLister;
    assert_eq!(lister.list_dirs(temp_dir.path()).len(), 1);
    assert_eq!(lister.list_files(temp_dir.path()).len(), 1);
}

#[test]
fn missing_directory_lists_as_empty() {
    let lister = FsLister;
    let missing = std::path::Path::new("/no/such/directory/anywhere");
    assert!(lister.list_dirs(missing).is_empty());
    assert!(lister.list_files(missing).is_empty());
}

#[test]
fn has_file_requires_a_regular_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("MBATCH_SUCCESS.txt"), "").unwrap();
    fs::create_dir(temp_dir.path().join("marker_dir")).unwrap();

    let lister = FsLister;
    assert!(lister.has_file(temp_dir.path(), "MBATCH_SUCCESS.txt"));
    assert!(!lister.has_file(temp_dir.path(), "marker_dir"));
    assert!(!lister.has_file(temp_dir.path(), "absent.txt"));
}

#[test]
fn is_dir_distinguishes_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("file.txt"), "").unwrap();

    let lister = FsLister;
    assert!(lister.is_dir(temp_dir.path()));
    assert!(!lister.is_dir(&temp_dir.path().join("file.txt")));
    assert!(!lister.is_dir(&temp_dir.path().join("absent")));
}
