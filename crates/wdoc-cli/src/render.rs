//! The `render` command: stdin, a single file, or a whole docs tree.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info_span;

use wdoc_ingest::{ScanOptions, is_markdown};
use wdoc_model::WidgetOptions;
use wdoc_render::{RenderedFile, render_markdown, render_tree};

use crate::pipeline::{docs_root, resolve_options};
use crate::types::{RenderRequest, RenderResult};

/// Render the requested docs. `input` and `output` stand in for stdin and
/// stdout so the single-document paths can be driven without a terminal.
pub fn run_render(
    request: &RenderRequest,
    mut input: impl Read,
    output: impl Write,
) -> Result<RenderResult> {
    let span = info_span!("render", docs = %request.docs.display());
    let _guard = span.enter();
    let config = request.config.as_deref();

    if request.docs.as_os_str() == "-" {
        let mut options = resolve_options(Path::new("."), config)?;
        request.overrides.apply(&mut options);
        let mut source = String::new();
        input.read_to_string(&mut source).context("read stdin")?;
        let file = render_to_writer("-", &source, &options, output)?;
        return Ok(RenderResult {
            output_dir: None,
            files: vec![file],
        });
    }

    let docs = &request.docs;
    let root = docs_root(docs);
    let mut options = resolve_options(&root, config)?;
    request.overrides.apply(&mut options);

    if docs.is_dir() {
        if request.stdout {
            bail!("--stdout needs a single Markdown file, not a directory");
        }
        let output_dir = output_dir_for(request, &root);
        let files = render_tree(docs, &output_dir, &options)
            .with_context(|| format!("render {}", docs.display()))?;
        return Ok(RenderResult {
            output_dir: Some(output_dir),
            files,
        });
    }

    if !docs.is_file() {
        bail!("{} does not exist", docs.display());
    }
    if !is_markdown(docs) {
        bail!("{} is not a Markdown file", docs.display());
    }
    let source =
        fs::read_to_string(docs).with_context(|| format!("read {}", docs.display()))?;
    let name = docs
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| docs.display().to_string());
    if request.stdout {
        let file = render_to_writer(&name, &source, &options, output)?;
        return Ok(RenderResult {
            output_dir: None,
            files: vec![file],
        });
    }

    let output_dir = output_dir_for(request, &root);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let target = output_dir.join(&name);
    if same_file(docs, &target) {
        bail!("output {} would overwrite the input", target.display());
    }
    let rendered = render_markdown(&source, &ScanOptions::from(&options));
    fs::write(&target, &rendered.markdown)
        .with_context(|| format!("write {}", target.display()))?;
    Ok(RenderResult {
        output_dir: Some(output_dir),
        files: vec![RenderedFile {
            relative_path: name,
            output: target,
            blocks: rendered.blocks,
            invalid: rendered.invalid,
        }],
    })
}

/// `--output-dir`, or `site-src` beside the docs root.
pub fn output_dir_for(request: &RenderRequest, root: &Path) -> PathBuf {
    request.output_dir.clone().unwrap_or_else(|| {
        root.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("site-src"), |parent| parent.join("site-src"))
    })
}

fn render_to_writer(
    name: &str,
    source: &str,
    options: &WidgetOptions,
    mut output: impl Write,
) -> Result<RenderedFile> {
    let rendered = render_markdown(source, &ScanOptions::from(options));
    output
        .write_all(rendered.markdown.as_bytes())
        .context("write stdout")?;
    output.flush().context("flush stdout")?;
    Ok(RenderedFile {
        relative_path: name.to_string(),
        output: PathBuf::from("-"),
        blocks: rendered.blocks,
        invalid: rendered.invalid,
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
