//! Filesystem tests for document discovery and loading.

use std::fs;
use std::path::Path;

use wdoc_ingest::{IngestError, list_markdown_files, load_document, load_documents};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn lists_markdown_recursively_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "sql/joins.md", "# Joins\n");
    write(dir.path(), "index.md", "# Home\n");
    write(dir.path(), "mysql/ADMIN.MD", "# Admin\n");
    write(dir.path(), "hooks/interactive.py", "print()\n");
    write(dir.path(), ".cache/stale.md", "# Stale\n");

    let files = list_markdown_files(dir.path()).unwrap();
    let relative: Vec<String> = files
        .iter()
        .map(|path| wdoc_ingest::to_slash(path.strip_prefix(dir.path()).unwrap()))
        .collect();
    assert_eq!(relative, ["index.md", "mysql/ADMIN.MD", "sql/joins.md"]);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = list_markdown_files(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn load_document_computes_relative_path_and_title() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "postgres/vacuum.md",
        "---\nsummary: x\n---\n# VACUUM and Autovacuum\n\nBody\n",
    );
    let doc = load_document(dir.path(), &dir.path().join("postgres/vacuum.md")).unwrap();
    assert_eq!(doc.relative_path, "postgres/vacuum.md");
    assert_eq!(doc.title, "VACUUM and Autovacuum");
}

#[test]
fn load_document_outside_root_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();
    write(other.path(), "a.md", "# A\n");
    let err = load_document(root.path(), &other.path().join("a.md")).unwrap_err();
    assert!(matches!(err, IngestError::OutsideRoot { .. }));
}

#[test]
fn load_documents_reads_everything() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", "# A\n");
    write(dir.path(), "b/c.md", "no heading\n");
    let docs = load_documents(dir.path()).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].title, "c");
}
