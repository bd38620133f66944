//! Check pipeline stages shared by the binary and integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use wdoc_ingest::{Document, ScanOptions, is_markdown, load_document, load_documents, scan_fences};
use wdoc_model::{LintReport, LintSummary, WidgetKind, WidgetOptions};
use wdoc_validate::{validate_document, validate_navigation};

use crate::types::{CheckRequest, CheckResult};

/// Documents to process plus the root their relative paths are based on.
#[derive(Debug)]
pub struct DocsInput {
    pub root: PathBuf,
    pub documents: Vec<Document>,
}

/// Directory that holds `widgetdoc.toml` and anchors relative paths.
pub fn docs_root(docs: &Path) -> PathBuf {
    if docs.is_dir() {
        docs.to_path_buf()
    } else {
        docs.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }
}

/// Load options from an explicit config path or `<root>/widgetdoc.toml`.
pub fn resolve_options(root: &Path, config: Option<&Path>) -> Result<WidgetOptions> {
    match config {
        Some(path) => WidgetOptions::load(path)
            .with_context(|| format!("load config {}", path.display())),
        None => WidgetOptions::discover(root).context("load widgetdoc.toml"),
    }
}

/// Command-line settings that take precedence over `widgetdoc.toml`.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces the configured kinds when non-empty.
    pub kinds: Vec<WidgetKind>,
    pub include_nested: bool,
    pub warnings_as_errors: bool,
    pub no_navigation: bool,
}

impl Overrides {
    pub fn apply(&self, options: &mut WidgetOptions) {
        if !self.kinds.is_empty() {
            let mut kinds = self.kinds.clone();
            kinds.sort();
            kinds.dedup();
            options.kinds = kinds;
        }
        if self.include_nested {
            options.skip_nested = false;
        }
        if self.warnings_as_errors {
            options.lint.warnings_as_errors = true;
        }
        if self.no_navigation {
            options.lint.check_navigation = false;
        }
    }
}

/// Load a docs directory or a single Markdown file.
pub fn load_input(docs: &Path) -> Result<DocsInput> {
    let root = docs_root(docs);
    let documents = if docs.is_dir() {
        load_documents(docs).with_context(|| format!("load documents from {}", docs.display()))?
    } else if docs.is_file() {
        if !is_markdown(docs) {
            bail!("{} is not a Markdown file", docs.display());
        }
        vec![load_document(&root, docs).context("load document")?]
    } else {
        bail!("{} does not exist", docs.display());
    };
    Ok(DocsInput { root, documents })
}

/// Lint every document, then resolve navigation links across the set.
pub fn lint_documents(documents: &[Document], options: &WidgetOptions) -> Vec<LintReport> {
    let scan_options = ScanOptions::from(options);
    let start = Instant::now();
    let mut reports: Vec<LintReport> = documents
        .iter()
        .map(|document| {
            let span = info_span!(
                "document",
                path = %document.relative_path,
                title = %document.title
            );
            let _guard = span.enter();
            let scan = scan_fences(&document.source, &scan_options);
            validate_document(document, &scan, &options.lint)
        })
        .collect();
    validate_navigation(documents, &mut reports, &options.lint);
    let summary = LintSummary::from_reports(&reports);
    info!(
        documents = summary.documents,
        blocks = summary.blocks,
        errors = summary.total_errors,
        warnings = summary.total_warnings,
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );
    reports
}

/// Load, lint and optionally write the JSON report for one `check` run.
pub fn run_check(request: &CheckRequest) -> Result<CheckResult> {
    let span = info_span!("check", docs = %request.docs.display());
    let _guard = span.enter();
    let input = load_input(&request.docs)?;
    let mut options = resolve_options(&input.root, request.config.as_deref())?;
    request.overrides.apply(&mut options);

    let reports = lint_documents(&input.documents, &options);
    let summary = LintSummary::from_reports(&reports);
    if let Some(path) = &request.report {
        write_json_report(path, &input.root, &summary, &reports)?;
        info!(path = %path.display(), "report written");
    }
    Ok(CheckResult {
        docs_root: input.root,
        reports,
        summary,
        report_path: request.report.clone(),
    })
}

/// JSON report written by `check --report`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generator: String,
    pub docs_root: String,
    pub summary: &'a LintSummary,
    pub documents: &'a [LintReport],
}

/// Serialize a check report as pretty JSON, creating parent directories.
pub fn write_json_report(
    path: &Path,
    root: &Path,
    summary: &LintSummary,
    reports: &[LintReport],
) -> Result<()> {
    let report = JsonReport {
        generator: format!("widgetdoc {}", env!("CARGO_PKG_VERSION")),
        docs_root: root.display().to_string(),
        summary,
        documents: reports,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&report).context("serialize report")?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
