//! CLI argument definitions for widgetdoc.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use wdoc_model::WidgetKind;

#[derive(Parser)]
#[command(
    name = "widgetdoc",
    version,
    about = "Interactive widget fences for Markdown lessons",
    long_about = "Render and lint interactive widget fences in Markdown lessons.\n\n\
                  Supported fences: quiz, terminal, command-builder, exercise, code-walkthrough.\n\
                  Each fence body is YAML; rendering replaces the fence with an HTML\n\
                  placeholder carrying the configuration as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Project config file (default: <DOCS>/widgetdoc.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replace widget fences with HTML placeholders.
    Render(RenderArgs),

    /// Lint widget content and navigation links.
    Check(CheckArgs),

    /// List the supported widget kinds.
    Kinds,
}

/// Scanner flags shared by `render` and `check`.
#[derive(Args, Clone, Default)]
pub struct ScanArgs {
    /// Only handle these widget kinds (repeatable; overrides the config file).
    #[arg(long = "kind", value_enum, value_name = "KIND")]
    pub kinds: Vec<KindArg>,

    /// Also handle widget fences nested inside other code blocks.
    #[arg(long = "include-nested")]
    pub include_nested: bool,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Docs directory, a single Markdown file, or `-` for stdin.
    #[arg(value_name = "DOCS")]
    pub docs: PathBuf,

    /// Output directory for the rewritten tree (default: site-src next to DOCS).
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Print the rewritten Markdown of a single file to stdout.
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Exit with status 1 when any fence has invalid YAML.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,

    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Docs directory or a single Markdown file.
    #[arg(value_name = "DOCS")]
    pub docs: PathBuf,

    /// Write a JSON report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Treat every warning as an error.
    #[arg(long = "warnings-as-errors")]
    pub warnings_as_errors: bool,

    /// Skip Previous/Next link resolution.
    #[arg(long = "no-navigation")]
    pub no_navigation: bool,

    #[command(flatten)]
    pub scan: ScanArgs,
}

/// CLI widget kind choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Quiz,
    Terminal,
    CommandBuilder,
    Exercise,
    CodeWalkthrough,
}

impl From<KindArg> for WidgetKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Quiz => WidgetKind::Quiz,
            KindArg::Terminal => WidgetKind::Terminal,
            KindArg::CommandBuilder => WidgetKind::CommandBuilder,
            KindArg::Exercise => WidgetKind::Exercise,
            KindArg::CodeWalkthrough => WidgetKind::CodeWalkthrough,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
