//! Loaded Markdown documents.

use std::path::{Component, Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::fence::CodeFenceTracker;

/// One Markdown lesson.
#[derive(Debug, Clone)]
pub struct Document {
    /// Absolute or caller-relative path on disk.
    pub path: PathBuf,
    /// Path relative to the docs root, with `/` separators.
    pub relative_path: String,
    /// First level-one heading, or the file stem.
    pub title: String,
    pub source: String,
}

impl Document {
    /// Build a document from in-memory text.
    pub fn from_source(relative_path: impl Into<String>, source: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        let source = source.into();
        let path = PathBuf::from(&relative_path);
        let title = extract_title(&source).unwrap_or_else(|| file_stem(&path));
        Self {
            path,
            relative_path,
            title,
            source,
        }
    }
}

/// Read a document and compute its root-relative path and title.
pub fn load_document(root: &Path, path: &Path) -> Result<Document> {
    let source = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let relative = path
        .strip_prefix(root)
        .map_err(|_| IngestError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;
    let title = extract_title(&source).unwrap_or_else(|| file_stem(path));
    Ok(Document {
        path: path.to_path_buf(),
        relative_path: to_slash(relative),
        title,
        source,
    })
}

/// First ATX level-one heading outside fenced code.
pub fn extract_title(source: &str) -> Option<String> {
    let mut fences = CodeFenceTracker::default();
    for line in source.lines() {
        if fences.in_code(line) {
            continue;
        }
        if let Some(heading) = line.strip_prefix("# ") {
            let heading = heading.trim().trim_end_matches('#').trim_end();
            if !heading.is_empty() {
                return Some(heading.to_string());
            }
        }
    }
    None
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("untitled")
        .to_string()
}

/// Join path components with `/` regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
