//! Requests and results for the `check` and `render` commands.

use std::path::PathBuf;

use wdoc_model::{LintReport, LintSummary};
use wdoc_render::RenderedFile;

use crate::pipeline::Overrides;

/// Inputs for one `check` run.
#[derive(Debug, Clone, Default)]
pub struct CheckRequest {
    pub docs: PathBuf,
    /// Explicit config file; `<root>/widgetdoc.toml` otherwise.
    pub config: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub overrides: Overrides,
}

/// Inputs for one `render` run. `docs` may be `-` for stdin.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub docs: PathBuf,
    pub config: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub stdout: bool,
    pub overrides: Overrides,
}

#[derive(Debug)]
pub struct CheckResult {
    pub docs_root: PathBuf,
    pub reports: Vec<LintReport>,
    pub summary: LintSummary,
    pub report_path: Option<PathBuf>,
}

impl CheckResult {
    pub fn exit_code(&self) -> i32 {
        i32::from(self.summary.has_errors())
    }
}

#[derive(Debug)]
pub struct RenderResult {
    /// `None` when the output went to stdout.
    pub output_dir: Option<PathBuf>,
    pub files: Vec<RenderedFile>,
}

impl RenderResult {
    pub fn invalid_count(&self) -> usize {
        self.files.iter().map(|file| file.invalid).sum()
    }

    /// Non-zero only when `--fail-on-invalid` is set and a block was invalid.
    pub fn exit_code(&self, fail_on_invalid: bool) -> i32 {
        i32::from(fail_on_invalid && self.invalid_count() > 0)
    }
}
