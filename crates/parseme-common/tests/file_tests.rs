//! Tests for reading documents from disk.

use std::fs;

use parseme_common::{FileError, fetch_file_contents};

#[test]
fn test_reads_full_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(&path, "<html lang=\"en\"></html>").unwrap();

    let bytes = fetch_file_contents(&path).unwrap();
    assert_eq!(bytes, b"<html lang=\"en\"></html>");
}

#[test]
fn test_empty_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.html");
    fs::write(&path, "").unwrap();

    let bytes = fetch_file_contents(&path).unwrap();
    assert!(bytes.is_empty());
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.html");

    let err = fetch_file_contents(&path).unwrap_err();
    assert!(matches!(err, FileError::NotFound { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn test_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let err = fetch_file_contents(dir.path()).unwrap_err();
    assert!(matches!(err, FileError::IsDirectory { .. }));
}

#[test]
fn test_error_message_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.html");

    let err = fetch_file_contents(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("file not found"));
    assert!(message.contains("nope.html"));
}
