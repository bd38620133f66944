//! Rendering a whole docs tree into an output directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span};
use wdoc_ingest::{IngestError, ScanOptions, is_markdown, load_document, to_slash};
use wdoc_model::WidgetOptions;

use crate::error::{RenderError, Result};
use crate::page::render_markdown;

/// One Markdown file written to the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the docs root, with `/` separators.
    pub relative_path: String,
    pub output: PathBuf,
    pub blocks: usize,
    pub invalid: usize,
}

/// Mirror `input_dir` into `output_dir`, rewriting widget fences in every
/// Markdown file and copying everything else unchanged.
///
/// Hidden directories and the output directory itself (when nested inside
/// the input) are skipped.
pub fn render_tree(
    input_dir: &Path,
    output_dir: &Path,
    options: &WidgetOptions,
) -> Result<Vec<RenderedFile>> {
    if !input_dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: input_dir.to_path_buf(),
        }
        .into());
    }
    fs::create_dir_all(output_dir).map_err(|e| RenderError::write(output_dir, e))?;
    let input_canonical = canonical(input_dir)?;
    let output_canonical = canonical(output_dir)?;
    if input_canonical == output_canonical {
        return Err(RenderError::SameDirectory {
            path: output_dir.to_path_buf(),
        });
    }

    let scan_options = ScanOptions::from(options);
    let start = Instant::now();
    let mut rendered = Vec::new();
    let mut copied = 0usize;

    for path in list_files(input_dir, &output_canonical)? {
        let relative = path
            .strip_prefix(input_dir)
            .map_err(|_| IngestError::OutsideRoot {
                path: path.clone(),
                root: input_dir.to_path_buf(),
            })?;
        let target = output_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| RenderError::write(parent, e))?;
        }

        if !is_markdown(&path) {
            fs::copy(&path, &target).map_err(|source| RenderError::Copy {
                from: path.clone(),
                to: target.clone(),
                source,
            })?;
            copied += 1;
            continue;
        }

        let document = load_document(input_dir, &path)?;
        let span = info_span!("document", path = %document.relative_path);
        let _guard = span.enter();
        let page = render_markdown(&document.source, &scan_options);
        fs::write(&target, &page.markdown).map_err(|e| RenderError::write(&target, e))?;
        debug!(
            blocks = page.blocks,
            invalid = page.invalid,
            output = %target.display(),
            "document rendered"
        );
        rendered.push(RenderedFile {
            relative_path: to_slash(relative),
            output: target,
            blocks: page.blocks,
            invalid: page.invalid,
        });
    }

    info!(
        documents = rendered.len(),
        copied,
        blocks = rendered.iter().map(|file| file.blocks).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "render complete"
    );
    Ok(rendered)
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        IngestError::DirectoryRead {
            path: path.to_path_buf(),
            source: e,
        }
        .into()
    })
}

/// Every file under `dir`, sorted, skipping hidden directories and `exclude`.
fn list_files(dir: &Path, exclude: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current).map_err(|e| IngestError::DirectoryRead {
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
                let hidden = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with('.'));
                let is_output = fs::canonicalize(&path).is_ok_and(|resolved| resolved == exclude);
                if !hidden && !is_output {
                    pending.push(path);
                }
            } else if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}
