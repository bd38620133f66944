//! Typed widget content.
//!
//! These shapes mirror what the client-side components read from the
//! embedded configuration. They are used for linting only: rendering passes
//! the raw configuration through untouched, so unknown keys are ignored and
//! every field is optional.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::kind::WidgetKind;

/// Quiz answer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizType {
    /// Exactly one option is correct.
    #[default]
    Single,
    /// One or more options may be correct.
    Multiple,
}

impl QuizType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "single" | "single-choice" | "multiple-choice" | "true-false" | "boolean" => {
                Some(Self::Single)
            }
            "multiple" | "multiple-answer" | "multi" | "multi-select" | "checkbox" => {
                Some(Self::Multiple)
            }
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for QuizType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        QuizType::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown quiz type `{raw}`")))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Quiz {
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: Option<String>,
    #[serde(rename = "type", default)]
    pub quiz_type: QuizType,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizOption {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(default)]
    pub correct: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub feedback: Option<String>,
}

impl Quiz {
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.correct).count()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Terminal {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default)]
    pub steps: Vec<TerminalStep>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerminalStep {
    #[serde(default, deserialize_with = "lenient_string")]
    pub command: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub output: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub narration: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Exercise {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, alias = "description", deserialize_with = "lenient_string")]
    pub scenario: Option<String>,
    #[serde(default)]
    pub tasks: Vec<ExerciseTask>,
    /// Free-form; any non-null value counts as a solution.
    #[serde(default)]
    pub solution: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseTask {
    #[serde(default, alias = "prompt", deserialize_with = "lenient_string")]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hint: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub answer: Option<String>,
}

impl Exercise {
    pub fn has_solution(&self) -> bool {
        self.solution.as_ref().is_some_and(|value| match value {
            Value::Null => false,
            Value::String(text) => !text.trim().is_empty(),
            _ => true,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandBuilder {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, alias = "command", deserialize_with = "lenient_string")]
    pub base: Option<String>,
    #[serde(default, alias = "sections")]
    pub groups: Vec<FlagGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlagGroup {
    #[serde(default, alias = "label", deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, alias = "flags")]
    pub options: Vec<FlagOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlagOption {
    #[serde(default, alias = "value", deserialize_with = "lenient_string")]
    pub flag: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: Option<String>,
    #[serde(default, alias = "description", deserialize_with = "lenient_string")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeWalkthrough {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, alias = "lang", deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl CodeWalkthrough {
    /// Number of lines in the listing, ignoring a single trailing newline.
    pub fn line_count(&self) -> usize {
        match &self.code {
            Some(code) if !code.is_empty() => code.strip_suffix('\n').unwrap_or(code).lines().count().max(1),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Annotation {
    #[serde(default, alias = "lines")]
    pub line: Option<LineSpan>,
    #[serde(default, alias = "note", deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

/// A 1-based inclusive line range; a single line has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineSpan {
    pub start: u32,
    pub end: u32,
}

impl LineSpan {
    pub fn single(line: u32) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Parse `7` or `3-5`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value.split_once('-') {
            Some((start, end)) => {
                let start = start.trim().parse().ok()?;
                let end = end.trim().parse().ok()?;
                (start <= end).then_some(Self { start, end })
            }
            None => value.parse().ok().map(Self::single),
        }
    }
}

impl<'de> Deserialize<'de> for LineSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => number
                .as_u64()
                .and_then(|line| u32::try_from(line).ok())
                .map(LineSpan::single)
                .ok_or_else(|| D::Error::custom(format!("invalid annotation line {number}"))),
            Value::String(text) => LineSpan::parse(&text)
                .ok_or_else(|| D::Error::custom(format!("invalid annotation line `{text}`"))),
            other => Err(D::Error::custom(format!(
                "annotation line must be a number or range, found {other}"
            ))),
        }
    }
}

/// Typed content of one widget block.
#[derive(Debug, Clone)]
pub enum Widget {
    Quiz(Quiz),
    Terminal(Terminal),
    CommandBuilder(CommandBuilder),
    Exercise(Exercise),
    CodeWalkthrough(CodeWalkthrough),
}

impl Widget {
    /// Decode a parsed configuration into the shape for `kind`.
    ///
    /// # Errors
    ///
    /// Returns the deserialisation error when a known field has the wrong type.
    pub fn from_value(kind: WidgetKind, value: &Value) -> Result<Self, serde_json::Error> {
        let value = value.clone();
        Ok(match kind {
            WidgetKind::Quiz => Widget::Quiz(serde_json::from_value(value)?),
            WidgetKind::Terminal => Widget::Terminal(serde_json::from_value(value)?),
            WidgetKind::CommandBuilder => Widget::CommandBuilder(serde_json::from_value(value)?),
            WidgetKind::Exercise => Widget::Exercise(serde_json::from_value(value)?),
            WidgetKind::CodeWalkthrough => {
                Widget::CodeWalkthrough(serde_json::from_value(value)?)
            }
        })
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Quiz(_) => WidgetKind::Quiz,
            Widget::Terminal(_) => WidgetKind::Terminal,
            Widget::CommandBuilder(_) => WidgetKind::CommandBuilder,
            Widget::Exercise(_) => WidgetKind::Exercise,
            Widget::CodeWalkthrough(_) => WidgetKind::CodeWalkthrough,
        }
    }
}

/// Returns true when the text is absent or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}

/// Accept strings, numbers and booleans as text; `null` is absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn quiz_type_aliases() {
        assert_eq!(QuizType::parse("multiple-choice"), Some(QuizType::Single));
        assert_eq!(QuizType::parse("Multiple-Answer"), Some(QuizType::Multiple));
        assert_eq!(QuizType::parse("essay"), None);
    }

    #[test]
    fn quiz_decodes_options() {
        let value = json!({
            "question": "Which engine supports row-level locking?",
            "type": "multiple-choice",
            "options": [
                {"text": "InnoDB", "correct": true, "feedback": "Yes."},
                {"text": "MyISAM", "feedback": "Table locks only."}
            ]
        });
        let Widget::Quiz(quiz) = Widget::from_value(WidgetKind::Quiz, &value).unwrap() else {
            panic!("expected quiz");
        };
        assert_eq!(quiz.quiz_type, QuizType::Single);
        assert_eq!(quiz.options.len(), 2);
        assert_eq!(quiz.correct_count(), 1);
    }

    #[test]
    fn numbers_are_accepted_as_text() {
        let value = json!({"steps": [{"command": "SELECT 1;", "output": 1}]});
        let Widget::Terminal(terminal) = Widget::from_value(WidgetKind::Terminal, &value).unwrap()
        else {
            panic!("expected terminal");
        };
        assert_eq!(terminal.steps[0].output.as_deref(), Some("1"));
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        let value = json!({"options": "InnoDB"});
        assert!(Widget::from_value(WidgetKind::Quiz, &value).is_err());
    }

    #[test]
    fn annotation_lines_accept_ranges() {
        let value = json!({
            "language": "sql",
            "code": "SELECT *\nFROM t\nWHERE id = 1\n",
            "annotations": [{"line": 1, "text": "a"}, {"lines": "2-3", "note": "b"}]
        });
        let Widget::CodeWalkthrough(walk) =
            Widget::from_value(WidgetKind::CodeWalkthrough, &value).unwrap()
        else {
            panic!("expected walkthrough");
        };
        assert_eq!(walk.line_count(), 3);
        assert_eq!(walk.annotations[0].line, Some(LineSpan::single(1)));
        assert_eq!(walk.annotations[1].line, Some(LineSpan { start: 2, end: 3 }));
        assert_eq!(walk.annotations[1].text.as_deref(), Some("b"));
    }

    #[test]
    fn solution_presence() {
        let with = Exercise {
            solution: Some(json!("mysqldump --single-transaction db")),
            ..Exercise::default()
        };
        let blank = Exercise {
            solution: Some(json!("  ")),
            ..Exercise::default()
        };
        assert!(with.has_solution());
        assert!(!blank.has_solution());
        assert!(!Exercise::default().has_solution());
    }
}
