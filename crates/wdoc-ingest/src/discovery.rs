//! Markdown document discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Extensions treated as Markdown documents (case-insensitive).
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Returns true if the path has a Markdown extension.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Lists all Markdown files under a directory, recursively.
///
/// Hidden directories (starting with `.`) are skipped. Returns files sorted
/// by path.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current).map_err(|e| IngestError::DirectoryRead {
            path: current.clone(),
            source: e,
        })?;

        for entry_result in entries {
            let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
                path: current.clone(),
                source: e,
            })?;
            let path = entry.path();

            if path.is_dir() {
                if !is_hidden(&path) {
                    pending.push(path);
                }
                continue;
            }

            if path.is_file() && is_markdown(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    debug!(dir = %dir.display(), file_count = files.len(), "listed markdown files");
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_extension_is_case_insensitive() {
        assert!(is_markdown(Path::new("intro.md")));
        assert!(is_markdown(Path::new("INTRO.MD")));
        assert!(is_markdown(Path::new("notes.markdown")));
        assert!(!is_markdown(Path::new("hook.py")));
        assert!(!is_markdown(Path::new("README")));
    }
}
