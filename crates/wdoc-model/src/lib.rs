pub mod error;
pub mod kind;
pub mod lint;
pub mod options;
pub mod widget;

pub use error::{ModelError, Result};
pub use kind::WidgetKind;
pub use lint::{ISSUE_CODES, IssueSeverity, LintIssue, LintReport, LintSummary, is_issue_code};
pub use options::{CONFIG_FILENAME, LintOptions, WidgetOptions};
pub use widget::{
    Annotation, CodeWalkthrough, CommandBuilder, Exercise, ExerciseTask, FlagGroup, FlagOption,
    LineSpan, Quiz, QuizOption, QuizType, Terminal, TerminalStep, Widget, is_blank,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lint_report_counts() {
        let report = LintReport {
            document: "mysql/backup.md".to_string(),
            blocks: 3,
            issues: vec![
                LintIssue {
                    code: "WD012".to_string(),
                    message: "Quiz has 2 correct options".to_string(),
                    severity: IssueSeverity::Error,
                    document: "mysql/backup.md".to_string(),
                    line: Some(14),
                    kind: Some(WidgetKind::Quiz),
                },
                LintIssue {
                    code: "WD023".to_string(),
                    message: "Step 1 has no narration".to_string(),
                    severity: IssueSeverity::Warning,
                    document: "mysql/backup.md".to_string(),
                    line: Some(40),
                    kind: Some(WidgetKind::Terminal),
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }
}
