//! Widget fence kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fence info strings that mark an interactive widget block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    Quiz,
    Terminal,
    CommandBuilder,
    Exercise,
    CodeWalkthrough,
}

impl WidgetKind {
    /// All kinds, in fence-tag order.
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Quiz,
        WidgetKind::Terminal,
        WidgetKind::CommandBuilder,
        WidgetKind::Exercise,
        WidgetKind::CodeWalkthrough,
    ];

    /// Fence tag as written after the opening backticks.
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Quiz => "quiz",
            WidgetKind::Terminal => "terminal",
            WidgetKind::CommandBuilder => "command-builder",
            WidgetKind::Exercise => "exercise",
            WidgetKind::CodeWalkthrough => "code-walkthrough",
        }
    }

    /// Parse an exact fence tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Title used when the configuration carries neither `title` nor `question`.
    pub fn default_title(&self) -> &'static str {
        match self {
            WidgetKind::Quiz => "Quiz",
            WidgetKind::Terminal => "Terminal",
            WidgetKind::CommandBuilder => "Command Builder",
            WidgetKind::Exercise => "Exercise",
            WidgetKind::CodeWalkthrough => "Code Walkthrough",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WidgetKind::Quiz => "Question with options, correctness flags and per-option feedback",
            WidgetKind::Terminal => "Replayed shell session: command, output and narration per step",
            WidgetKind::CommandBuilder => "Base command with grouped, explained flag options",
            WidgetKind::Exercise => "Scenario with tasks, hints and answers or a single solution",
            WidgetKind::CodeWalkthrough => "Source listing with line-indexed annotations",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_exactly() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!(WidgetKind::from_tag("Quiz"), None);
        assert_eq!(WidgetKind::from_tag("quizzes"), None);
        assert_eq!(WidgetKind::from_tag("command_builder"), None);
    }

    #[test]
    fn default_titles_are_title_cased_tags() {
        assert_eq!(WidgetKind::CommandBuilder.default_title(), "Command Builder");
        assert_eq!(WidgetKind::CodeWalkthrough.default_title(), "Code Walkthrough");
    }

    #[test]
    fn serde_uses_fence_tags() {
        let json = serde_json::to_string(&WidgetKind::CodeWalkthrough).unwrap();
        assert_eq!(json, "\"code-walkthrough\"");
    }
}
