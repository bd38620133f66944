//! Lint issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only its needed data. Positions (`option`, `step`, `task`, ...)
//! are 1-based so messages match what authors count in the YAML.

use serde::{Deserialize, Serialize};
use wdoc_model::{IssueSeverity, QuizType};

/// Lint issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Structure
    /// Fence body is not valid YAML
    InvalidYaml { message: String },
    /// Fence body parsed to something other than a mapping
    NotAMapping { found: String },
    /// Widget fence never closes
    UnclosedFence,
    /// A known field has the wrong type
    InvalidShape { message: String },

    // Quiz
    QuizMissingQuestion,
    QuizTooFewOptions { count: usize },
    QuizCorrectCount { quiz_type: QuizType, correct: usize },
    QuizOptionMissingText { option: usize },
    QuizOptionMissingFeedback { option: usize },

    // Terminal
    TerminalNoSteps,
    TerminalStepMissingCommand { step: usize },
    TerminalStepMissingOutput { step: usize },
    TerminalStepMissingNarration { step: usize },

    // Exercise
    ExerciseMissingScenario,
    ExerciseNoTasks,
    ExerciseTaskMissingAnswer { task: usize },
    ExerciseTaskMissingHint { task: usize },

    // Command builder
    CommandBuilderMissingBase,
    CommandBuilderNoGroups,
    CommandBuilderOptionMissingFlag { group: usize, option: usize },
    CommandBuilderOptionMissingExplanation { group: usize, option: usize },

    // Code walkthrough
    WalkthroughMissingCode,
    WalkthroughMissingLanguage,
    WalkthroughAnnotationOutOfRange {
        annotation: usize,
        start: u32,
        end: u32,
        line_count: usize,
    },
    WalkthroughDuplicateAnnotation { annotation: usize, start: u32 },
    WalkthroughAnnotationMissingLine { annotation: usize },
    WalkthroughAnnotationMissingText { annotation: usize },

    // Navigation
    BrokenNavigationLink { target: String },
}

impl Issue {
    /// Stable issue code.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::InvalidYaml { .. } => "WD001",
            Issue::NotAMapping { .. } => "WD002",
            Issue::UnclosedFence => "WD003",
            Issue::InvalidShape { .. } => "WD004",
            Issue::QuizMissingQuestion => "WD010",
            Issue::QuizTooFewOptions { .. } => "WD011",
            Issue::QuizCorrectCount { .. } => "WD012",
            Issue::QuizOptionMissingText { .. } => "WD013",
            Issue::QuizOptionMissingFeedback { .. } => "WD014",
            Issue::TerminalNoSteps => "WD020",
            Issue::TerminalStepMissingCommand { .. } => "WD021",
            Issue::TerminalStepMissingOutput { .. } => "WD022",
            Issue::TerminalStepMissingNarration { .. } => "WD023",
            Issue::ExerciseMissingScenario => "WD030",
            Issue::ExerciseNoTasks => "WD031",
            Issue::ExerciseTaskMissingAnswer { .. } => "WD032",
            Issue::ExerciseTaskMissingHint { .. } => "WD033",
            Issue::CommandBuilderMissingBase => "WD040",
            Issue::CommandBuilderNoGroups => "WD041",
            Issue::CommandBuilderOptionMissingFlag { .. } => "WD042",
            Issue::CommandBuilderOptionMissingExplanation { .. } => "WD043",
            Issue::WalkthroughMissingCode => "WD050",
            Issue::WalkthroughMissingLanguage => "WD051",
            Issue::WalkthroughAnnotationOutOfRange { .. } => "WD052",
            Issue::WalkthroughDuplicateAnnotation { .. } => "WD053",
            Issue::WalkthroughAnnotationMissingLine { .. } => "WD054",
            Issue::WalkthroughAnnotationMissingText { .. } => "WD055",
            Issue::BrokenNavigationLink { .. } => "WD060",
        }
    }

    /// Default severity (warnings may be promoted by options).
    pub fn default_severity(&self) -> IssueSeverity {
        match self {
            Issue::QuizOptionMissingFeedback { .. }
            | Issue::TerminalStepMissingOutput { .. }
            | Issue::TerminalStepMissingNarration { .. }
            | Issue::ExerciseMissingScenario
            | Issue::ExerciseTaskMissingHint { .. }
            | Issue::CommandBuilderOptionMissingExplanation { .. }
            | Issue::WalkthroughMissingLanguage
            | Issue::WalkthroughDuplicateAnnotation { .. }
            | Issue::WalkthroughAnnotationMissingLine { .. }
            | Issue::WalkthroughAnnotationMissingText { .. } => IssueSeverity::Warning,
            _ => IssueSeverity::Error,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::InvalidYaml { message } => format!("Invalid YAML configuration: {message}"),
            Issue::NotAMapping { found } => {
                format!("Configuration must be a mapping, found {found}")
            }
            Issue::UnclosedFence => "Widget fence is never closed".to_string(),
            Issue::InvalidShape { message } => format!("Invalid widget configuration: {message}"),

            Issue::QuizMissingQuestion => "Quiz has no question".to_string(),
            Issue::QuizTooFewOptions { count } => {
                format!("Quiz needs at least 2 options, found {count}")
            }
            Issue::QuizCorrectCount {
                quiz_type: QuizType::Single,
                correct,
            } => format!("Single-answer quiz must have exactly 1 correct option, found {correct}"),
            Issue::QuizCorrectCount {
                quiz_type: QuizType::Multiple,
                ..
            } => "Multiple-answer quiz has no correct option".to_string(),
            Issue::QuizOptionMissingText { option } => format!("Option {option} has no text"),
            Issue::QuizOptionMissingFeedback { option } => {
                format!("Option {option} has no feedback")
            }

            Issue::TerminalNoSteps => "Terminal has no steps".to_string(),
            Issue::TerminalStepMissingCommand { step } => format!("Step {step} has no command"),
            Issue::TerminalStepMissingOutput { step } => format!("Step {step} has no output"),
            Issue::TerminalStepMissingNarration { step } => {
                format!("Step {step} has no narration")
            }

            Issue::ExerciseMissingScenario => "Exercise has no scenario".to_string(),
            Issue::ExerciseNoTasks => "Exercise has neither tasks nor a solution".to_string(),
            Issue::ExerciseTaskMissingAnswer { task } => {
                format!("Task {task} has no answer and the exercise has no solution")
            }
            Issue::ExerciseTaskMissingHint { task } => format!("Task {task} has no hint"),

            Issue::CommandBuilderMissingBase => "Command builder has no base command".to_string(),
            Issue::CommandBuilderNoGroups => "Command builder has no option groups".to_string(),
            Issue::CommandBuilderOptionMissingFlag { group, option } => {
                format!("Group {group} option {option} has no flag")
            }
            Issue::CommandBuilderOptionMissingExplanation { group, option } => {
                format!("Group {group} option {option} has no explanation")
            }

            Issue::WalkthroughMissingCode => "Code walkthrough has no code".to_string(),
            Issue::WalkthroughMissingLanguage => {
                "Code walkthrough has no language tag".to_string()
            }
            Issue::WalkthroughAnnotationOutOfRange {
                annotation,
                start,
                end,
                line_count,
            } => {
                let lines = if start == end {
                    format!("line {start}")
                } else {
                    format!("lines {start}-{end}")
                };
                format!(
                    "Annotation {annotation} points at {lines} but the code has {line_count} lines"
                )
            }
            Issue::WalkthroughDuplicateAnnotation { annotation, start } => {
                format!("Annotation {annotation} repeats line {start}")
            }
            Issue::WalkthroughAnnotationMissingLine { annotation } => {
                format!("Annotation {annotation} does not point at a line")
            }
            Issue::WalkthroughAnnotationMissingText { annotation } => {
                format!("Annotation {annotation} has no text")
            }

            Issue::BrokenNavigationLink { target } => {
                format!("Navigation link target {target} does not exist")
            }
        }
    }
}
