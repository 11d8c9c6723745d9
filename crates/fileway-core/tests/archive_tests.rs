//! End-to-end archive pack/extract behavior.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use fileway_core::Error;
use fileway_core::extract;
use fileway_core::pack_dir;
use fileway_core::pack_file;
use fileway_core::test_utils::write_test_zip;
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Relative paths of every regular file under `root`, sorted.
fn file_set(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

#[test]
fn round_trip_reproduces_paths_and_contents() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    write_file(&source.join("a.txt"), "hello");
    write_file(&source.join("sub/b.txt"), "world");

    let archive = temp.path().join("out.zip");
    let packed = pack_dir(&source, &archive).unwrap();
    assert_eq!(packed.files_added, 2);
    assert_eq!(packed.bytes_read, 10);

    let dest = temp.path().join("dst");
    let extracted = extract(&archive, &dest).unwrap();
    assert_eq!(extracted.files_extracted, 2);
    assert_eq!(extracted.bytes_written, 10);

    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(dest.join("sub/b.txt")).unwrap(), "world");
    assert_eq!(
        file_set(&dest),
        vec![PathBuf::from("a.txt"), PathBuf::from("sub/b.txt")]
    );
}

#[test]
fn single_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("report.txt");
    write_file(&source, "quarterly numbers");

    let archive = temp.path().join("report.zip");
    let packed = pack_file(&source, &archive).unwrap();
    assert_eq!(packed.files_added, 1);

    let dest = temp.path().join("dst");
    extract(&archive, &dest).unwrap();
    assert_eq!(
        fs::read_to_string(dest.join("report.txt")).unwrap(),
        "quarterly numbers"
    );
    assert_eq!(file_set(&dest), vec![PathBuf::from("report.txt")]);
}

#[test]
fn empty_directories_are_omitted() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    write_file(&source.join("kept.txt"), "data");
    fs::create_dir_all(source.join("empty")).unwrap();

    let archive = temp.path().join("out.zip");
    let packed = pack_dir(&source, &archive).unwrap();
    assert_eq!(packed.files_added, 1);

    let dest = temp.path().join("dst");
    extract(&archive, &dest).unwrap();
    assert!(dest.join("kept.txt").is_file());
    assert!(!dest.join("empty").exists());
}

#[test]
fn pack_missing_source_fails() {
    let temp = TempDir::new().unwrap();
    let result = pack_dir(temp.path().join("gone"), temp.path().join("out.zip"));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn pack_dir_rejects_file_source() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    write_file(&file, "data");

    let result = pack_dir(&file, temp.path().join("out.zip"));
    assert!(matches!(result, Err(Error::NotADirectory { .. })));
}

#[test]
fn extract_rejects_parent_traversal() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("hostile.zip");
    write_test_zip(&archive, &[("../evil.txt", b"gotcha")]);

    let dest = temp.path().join("dst");
    let result = extract(&archive, &dest);

    assert!(matches!(result, Err(Error::PathTraversal { .. })));
    assert!(result.unwrap_err().is_security_violation());
    assert!(!temp.path().join("evil.txt").exists());
}

#[test]
fn extract_rejects_absolute_entry() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("hostile.zip");
    write_test_zip(&archive, &[("/abs/evil.txt", b"gotcha")]);

    let result = extract(&archive, temp.path().join("dst"));
    assert!(matches!(result, Err(Error::PathTraversal { .. })));
}

#[test]
fn traversal_mid_archive_stops_processing() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("hostile.zip");
    write_test_zip(
        &archive,
        &[
            ("before.txt", b"fine"),
            ("../evil.txt", b"gotcha"),
            ("after.txt", b"never written"),
        ],
    );

    let dest = temp.path().join("dst");
    let result = extract(&archive, &dest);
    assert!(matches!(result, Err(Error::PathTraversal { .. })));

    // Entries before the violation stay (no rollback); later ones are never
    // touched.
    assert!(dest.join("before.txt").exists());
    assert!(!dest.join("after.txt").exists());
    assert!(!temp.path().join("evil.txt").exists());
}

#[test]
fn extract_into_existing_destination_fails() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("out.zip");
    write_test_zip(&archive, &[("a.txt", b"hello")]);

    let dest = temp.path().join("dst");
    fs::create_dir(&dest).unwrap();
    write_file(&dest.join("sentinel.txt"), "untouched");

    let result = extract(&archive, &dest);
    assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    assert_eq!(
        fs::read_to_string(dest.join("sentinel.txt")).unwrap(),
        "untouched"
    );
    assert!(!dest.join("a.txt").exists());
}

#[test]
fn extract_creates_directory_entries() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("out.zip");
    write_test_zip(&archive, &[("sub/", b""), ("sub/inner.txt", b"x")]);

    let dest = temp.path().join("dst");
    let report = extract(&archive, &dest).unwrap();
    assert_eq!(report.directories_created, 1);
    assert_eq!(report.files_extracted, 1);
    assert!(dest.join("sub").is_dir());
}

#[test]
fn extract_garbage_fails_as_invalid_archive() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("garbage.zip");
    fs::write(&archive, b"this is not a zip file").unwrap();

    let result = extract(&archive, temp.path().join("dst"));
    assert!(matches!(result, Err(Error::InvalidArchive(_))));
}

#[test]
fn extract_missing_archive_fails() {
    let temp = TempDir::new().unwrap();
    let result = extract(temp.path().join("gone.zip"), temp.path().join("dst"));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
#[cfg(unix)]
fn round_trip_preserves_file_modes() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    let script = source.join("run.sh");
    write_file(&script, "#!/bin/sh\n");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let archive = temp.path().join("out.zip");
    pack_dir(&source, &archive).unwrap();

    let dest = temp.path().join("dst");
    extract(&archive, &dest).unwrap();

    let mode = fs::metadata(dest.join("run.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn pack_is_deterministic_for_a_given_tree() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    write_file(&source.join("b.txt"), "2");
    write_file(&source.join("a.txt"), "1");
    write_file(&source.join("sub/c.txt"), "3");

    let first = temp.path().join("first.zip");
    let second = temp.path().join("second.zip");
    pack_dir(&source, &first).unwrap();
    pack_dir(&source, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
