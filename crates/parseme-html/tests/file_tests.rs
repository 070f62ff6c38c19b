//! Tests for tokenizing documents read from disk.

use std::fs;

use parseme_common::FileError;
use parseme_html::{Token, TokenKind, tokenize, tokenize_file};

#[test]
fn test_tokenize_file_matches_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    let html = "<html>\n  <body class=\"main\">Hello</body>\n</html>\n";
    fs::write(&path, html).unwrap();

    let from_file = tokenize_file(&path).unwrap();
    assert_eq!(from_file, tokenize(html.as_bytes()));
    assert!(from_file.contains(&Token::new(TokenKind::Content, "Hello")));
}

#[test]
fn test_tokenize_file_surfaces_read_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = tokenize_file(dir.path().join("missing.html")).unwrap_err();
    assert!(matches!(missing, FileError::NotFound { .. }));

    let directory = tokenize_file(dir.path()).unwrap_err();
    assert!(matches!(directory, FileError::IsDirectory { .. }));
}
