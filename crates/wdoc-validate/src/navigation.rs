//! Cross-document navigation checks.
//!
//! Lessons chain together through "Previous/Next" links. A link is broken
//! when its target is neither a loaded document nor a file on disk.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use wdoc_ingest::{Document, extract_nav_links};

use crate::issue::Issue;

/// A broken link with the line it appears on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationFinding {
    pub line: usize,
    pub issue: Issue,
}

/// Check navigation links in `document` against the loaded set.
pub fn check_navigation(document: &Document, known: &BTreeSet<String>) -> Vec<NavigationFinding> {
    let base = Path::new(&document.relative_path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let disk_base = document.path.parent().map(Path::to_path_buf);

    extract_nav_links(&document.source)
        .into_iter()
        .filter_map(|link| {
            let decoded = link.target.replace("%20", " ");
            let resolved = normalize(&base.join(&decoded));
            if known.contains(&resolved) {
                return None;
            }
            let on_disk = disk_base
                .as_ref()
                .is_some_and(|dir| dir.join(&decoded).exists());
            if on_disk {
                return None;
            }
            Some(NavigationFinding {
                line: link.line,
                issue: Issue::BrokenNavigationLink {
                    target: link.target,
                },
            })
        })
        .collect()
}

/// Resolve `.` and `..` lexically and join with `/`.
fn normalize(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                parts.pop();
            }
            _ => {}
        }
    }
    parts.join("/")
}

/// Relative paths of every loaded document.
pub fn known_documents(documents: &[Document]) -> BTreeSet<String> {
    documents
        .iter()
        .map(|document| normalize(&PathBuf::from(&document.relative_path)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_to_document_directory() {
        let docs = vec![
            Document::from_source("mysql/admin.md", "# Admin\n\nNext: [Backups](../backup.md)\n"),
            Document::from_source("backup.md", "# Backups\n\nPrevious: [Admin](mysql/admin.md)\n"),
        ];
        let known = known_documents(&docs);
        for doc in &docs {
            assert!(check_navigation(doc, &known).is_empty());
        }
    }

    #[test]
    fn reports_missing_targets() {
        let docs = vec![Document::from_source(
            "intro.md",
            "# Intro\n\nNext: [Fundamentals](fundamentals.md)\n",
        )];
        let known = known_documents(&docs);
        let findings = check_navigation(&docs[0], &known);
        assert_eq!(
            findings,
            vec![NavigationFinding {
                line: 3,
                issue: Issue::BrokenNavigationLink {
                    target: "fundamentals.md".to_string()
                }
            }]
        );
    }

    #[test]
    fn links_after_longer_widget_fence_are_checked() {
        let source = "# Logs\n\n````terminal\nsteps:\n```\n````\n\nNext: [Missing](missing.md)\n";
        let docs = vec![Document::from_source("logs.md", source)];
        let findings = check_navigation(&docs[0], &known_documents(&docs));
        assert_eq!(
            findings,
            vec![NavigationFinding {
                line: 8,
                issue: Issue::BrokenNavigationLink {
                    target: "missing.md".to_string()
                }
            }]
        );
    }
}
