//! ソースファイル探索のテスト

use std::fs;
use std::path::Path;

use jformat::error::JformatError;
use jformat::sources::{collect_sources, parse_source_file, SourceFile, DEFAULT_EXTENSION};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn file_names(root: &Path, extension: &str) -> Vec<String> {
    collect_sources(root, extension)
        .unwrap()
        .iter()
        .map(|p| {
            p.strip_prefix(fs::canonicalize(root).unwrap())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_collect_recursively_and_sorted() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b/Two.java", "class Two{}");
    write(dir.path(), "a/deep/nested/Three.java", "class Three{}");
    write(dir.path(), "One.java", "class One{}");
    write(dir.path(), "notes.txt", "not java");
    write(dir.path(), "a/Readme.md", "# docs");

    assert_eq!(
        file_names(dir.path(), DEFAULT_EXTENSION),
        vec!["One.java", "a/deep/nested/Three.java", "b/Two.java"]
    );
}

#[test]
fn test_extension_filter() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.java", "class A{}");
    write(dir.path(), "B.jav", "class B{}");
    write(dir.path(), "C.src", "class C{}");

    assert_eq!(file_names(dir.path(), "src"), vec!["C.src"]);
    assert!(file_names(dir.path(), "kt").is_empty());
}

#[test]
fn test_directories_are_not_sources() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("folder.java")).unwrap();
    write(dir.path(), "folder.java/Inner.java", "class Inner{}");

    assert_eq!(file_names(dir.path(), "java"), vec!["folder.java/Inner.java"]);
}

#[test]
fn test_file_root() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Only.java", "class Only{}");

    let found = collect_sources(dir.path().join("Only.java"), "java").unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].is_absolute());
    assert!(found[0].ends_with("Only.java"));
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(collect_sources(dir.path().join("absent"), "java").is_err());
}

#[test]
fn test_load_and_parse() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "p/Point.java", "package p;\nclass Point { int x; int y; }\n");

    let source = SourceFile::load(dir.path().join("p/Point.java")).unwrap();
    assert!(source.text.starts_with("package p;"));

    let class = parse_source_file(&source).unwrap();
    assert_eq!(class.name(), "Point");
    assert_eq!(class.fields().len(), 2);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let error = SourceFile::load(dir.path().join("Missing.java")).unwrap_err();
    match error {
        JformatError::Io(message) => assert!(message.contains("Missing.java")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_parse_errors_come_through() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Broken.java", "class Broken {");

    let source = SourceFile::load(dir.path().join("Broken.java")).unwrap();
    assert!(matches!(
        parse_source_file(&source),
        Err(JformatError::Parser(_))
    ));
}
