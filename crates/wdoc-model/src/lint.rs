use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kind::WidgetKind;

/// Every issue code the linter can emit. `lint.disabled` entries must be one
/// of these.
pub const ISSUE_CODES: &[&str] = &[
    "WD001", "WD002", "WD003", "WD004", // config
    "WD010", "WD011", "WD012", "WD013", "WD014", // quiz
    "WD020", "WD021", "WD022", "WD023", // terminal
    "WD030", "WD031", "WD032", "WD033", // command builder
    "WD040", "WD041", "WD042", "WD043", // exercise
    "WD050", "WD051", "WD052", "WD053", "WD054", "WD055", // code walkthrough
    "WD060", // navigation
];

/// Whether `code` names a known issue, ignoring case and surrounding space.
pub fn is_issue_code(code: &str) -> bool {
    let code = code.trim();
    ISSUE_CODES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(code))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARN",
        }
    }
}

/// A content problem found in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    /// Stable issue code (e.g., "WD012").
    pub code: String,
    /// Human-readable message describing the issue.
    pub message: String,
    /// Severity level.
    pub severity: IssueSeverity,
    /// Document path relative to the docs root.
    pub document: String,
    /// 1-based line of the opening fence or link (if applicable).
    pub line: Option<usize>,
    /// Widget kind the issue belongs to (if any).
    pub kind: Option<WidgetKind>,
}

/// Lint report for a single document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintReport {
    pub document: String,
    /// Number of widget blocks found in the document.
    pub blocks: usize,
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            ..Self::default()
        }
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Totals across many reports, used for the JSON report and summary rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintSummary {
    pub documents: usize,
    pub blocks: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub by_code: BTreeMap<String, usize>,
}

impl LintSummary {
    pub fn from_reports(reports: &[LintReport]) -> Self {
        let mut summary = Self {
            documents: reports.len(),
            ..Self::default()
        };
        for report in reports {
            summary.blocks += report.blocks;
            summary.total_errors += report.error_count();
            summary.total_warnings += report.warning_count();
            for issue in &report.issues {
                *summary.by_code.entry(issue.code.clone()).or_default() += 1;
            }
        }
        summary
    }

    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }
}
