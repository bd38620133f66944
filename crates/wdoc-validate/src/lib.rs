//! Content linting for widget fences.

mod checks;
mod issue;
mod navigation;

pub use issue::Issue;
pub use navigation::{NavigationFinding, check_navigation, known_documents};

use serde_json::Value;
use tracing::{debug, info_span};
use wdoc_ingest::{ConfigOutcome, Document, FenceScan, parse_config};
use wdoc_model::{IssueSeverity, LintIssue, LintOptions, LintReport, Widget, WidgetKind};

/// Lint the scanned widget blocks of one document.
pub fn validate_document(document: &Document, scan: &FenceScan, options: &LintOptions) -> LintReport {
    let span = info_span!("validate", document = %document.relative_path);
    let _guard = span.enter();

    let mut report = LintReport::new(&document.relative_path);
    report.blocks = scan.blocks.len();

    for unclosed in &scan.unclosed {
        push_issue(
            &mut report,
            options,
            Issue::UnclosedFence,
            Some(unclosed.line),
            Some(unclosed.kind),
        );
    }

    for block in &scan.blocks {
        let outcome = parse_config(&block.body);
        for issue in check_block(block.kind, &outcome) {
            push_issue(
                &mut report,
                options,
                issue,
                Some(block.start_line),
                Some(block.kind),
            );
        }
    }

    debug!(
        blocks = report.blocks,
        issues = report.issues.len(),
        "document validated"
    );
    report
}

/// Lint a single parsed block.
pub fn check_block(kind: WidgetKind, outcome: &ConfigOutcome) -> Vec<Issue> {
    let value = match outcome {
        ConfigOutcome::Invalid(message) => {
            return vec![Issue::InvalidYaml {
                message: message.clone(),
            }];
        }
        ConfigOutcome::Parsed(value) => value,
    };
    if !value.is_object() {
        return vec![Issue::NotAMapping {
            found: value_type_name(value).to_string(),
        }];
    }
    match Widget::from_value(kind, value) {
        Ok(widget) => checks::run_all(&widget),
        Err(e) => vec![Issue::InvalidShape {
            message: e.to_string(),
        }],
    }
}

/// Add navigation findings for every document to the matching reports.
///
/// Reports are matched by document path; documents without a report are skipped.
pub fn validate_navigation(documents: &[Document], reports: &mut [LintReport], options: &LintOptions) {
    if !options.check_navigation {
        return;
    }
    let known = known_documents(documents);
    for document in documents {
        let Some(report) = reports
            .iter_mut()
            .find(|report| report.document == document.relative_path)
        else {
            continue;
        };
        for finding in check_navigation(document, &known) {
            push_issue(report, options, finding.issue, Some(finding.line), None);
        }
    }
}

fn push_issue(
    report: &mut LintReport,
    options: &LintOptions,
    issue: Issue,
    line: Option<usize>,
    kind: Option<WidgetKind>,
) {
    let code = issue.code();
    if options.is_disabled(code) {
        return;
    }
    let severity = if options.warnings_as_errors {
        IssueSeverity::Error
    } else {
        issue.default_severity()
    };
    report.issues.push(LintIssue {
        code: code.to_string(),
        message: issue.message(),
        severity,
        document: report.document.clone(),
        line,
        kind,
    });
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
