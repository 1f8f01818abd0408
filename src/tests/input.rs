use super::{find_documents, load_blocks};
use crate::block::Block;
use crate::error::Error;
use std::fs;
use std::path::PathBuf;

fn extensions() -> Vec<String> {
    vec!["md".to_string(), "ipynb".to_string()]
}

#[test]
fn test_directory_walk_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.md"), "# B").unwrap();
    fs::write(dir.path().join("a.ipynb"), r#"{"cells": []}"#).unwrap();
    fs::write(dir.path().join("notes.txt"), "skip me").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.md"), "# C").unwrap();

    let docs = find_documents(vec![dir.path().to_path_buf()], &extensions()).unwrap();

    let names: Vec<PathBuf> = docs
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("a.ipynb"),
            PathBuf::from("b.md"),
            PathBuf::from("sub").join("c.md"),
        ]
    );
}

#[test]
fn test_named_file_kept_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "text").unwrap();

    let docs = find_documents(vec![path.clone()], &extensions()).unwrap();

    assert_eq!(docs, vec![path]);
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = find_documents(vec![dir.path().join("nope.md")], &extensions()).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_load_markdown_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    fs::write(&path, "# Doc\nthree small words\n").unwrap();

    let blocks = load_blocks(&path).unwrap();

    assert_eq!(blocks, vec![Block::prose("# Doc\nthree small words")]);
}

#[test]
fn test_load_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "text").unwrap();

    let err = load_blocks(&path).unwrap_err();

    assert!(matches!(err, Error::UnsupportedDocument(p) if p == path));
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.md");

    let err = load_blocks(&path).unwrap_err();

    assert!(matches!(err, Error::Read { ref path, .. } if path.ends_with("gone.md")));
}
