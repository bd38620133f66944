//! Widget fence scanning.
//!
//! A widget fence opens at column 0 with a run of three or more backticks
//! immediately followed by a widget tag and nothing but trailing
//! whitespace:
//!
//! ````text
//! ```quiz
//! question: Which isolation level prevents phantom reads?
//! ```
//! ````
//!
//! It closes at the first later line holding exactly the same number of
//! backticks followed only by whitespace. Everything in between is the YAML
//! body.

use std::ops::Range;

use wdoc_model::{WidgetKind, WidgetOptions};

/// Scanner settings derived from [`WidgetOptions`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub kinds: Vec<WidgetKind>,
    pub skip_nested: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from(&WidgetOptions::default())
    }
}

impl From<&WidgetOptions> for ScanOptions {
    fn from(options: &WidgetOptions) -> Self {
        Self {
            kinds: options.kinds.clone(),
            skip_nested: options.skip_nested,
        }
    }
}

/// A complete widget fence found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceBlock {
    pub kind: WidgetKind,
    /// Raw YAML between the fences, without the final line break.
    pub body: String,
    /// 1-based line of the opening fence.
    pub start_line: usize,
    /// 1-based line of the closing fence.
    pub end_line: usize,
    /// Byte range from the opening fence to the end of the closing fence
    /// line, excluding its line break (`\n` or `\r\n`).
    pub span: Range<usize>,
}

/// A widget fence that never closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnclosedFence {
    pub kind: WidgetKind,
    pub line: usize,
}

/// Result of scanning one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FenceScan {
    pub blocks: Vec<FenceBlock>,
    pub unclosed: Vec<UnclosedFence>,
}

struct Line<'a> {
    /// Byte offset of the first character.
    start: usize,
    /// Line text without `\n`.
    text: &'a str,
}

fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for chunk in source.split_inclusive('\n') {
        let text = chunk.strip_suffix('\n').unwrap_or(chunk);
        lines.push(Line { start, text });
        start += chunk.len();
    }
    lines
}

/// Length of the leading run of `ch`.
fn run_length(text: &str, ch: char) -> usize {
    text.chars().take_while(|c| *c == ch).count()
}

/// Parse a widget opening fence, returning the kind and backtick count.
fn widget_opening(text: &str, options: &ScanOptions) -> Option<(WidgetKind, usize)> {
    let ticks = run_length(text, '`');
    if ticks < 3 {
        return None;
    }
    let kind = WidgetKind::from_tag(text[ticks..].trim_end())?;
    options.kinds.contains(&kind).then_some((kind, ticks))
}

fn is_widget_closing(text: &str, ticks: usize) -> bool {
    run_length(text, '`') == ticks && text[ticks..].trim().is_empty()
}

/// Any other fenced code block opening: up to three spaces of indent, then
/// three or more backticks or tildes. Backtick info strings cannot contain
/// backticks.
fn other_opening(text: &str) -> Option<(char, usize)> {
    let indent = run_length(text, ' ');
    if indent > 3 {
        return None;
    }
    let rest = &text[indent..];
    let ch = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = run_length(rest, ch);
    if len < 3 {
        return None;
    }
    if ch == '`' && rest[len..].contains('`') {
        return None;
    }
    Some((ch, len))
}

fn is_other_closing(text: &str, ch: char, len: usize) -> bool {
    let indent = run_length(text, ' ');
    if indent > 3 {
        return false;
    }
    let rest = &text[indent..];
    let run = run_length(rest, ch);
    run >= len && rest[run..].trim().is_empty()
}

/// Tracks whether lines sit inside a fenced code block, using the same
/// open and close rules as the widget scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeFenceTracker {
    open: Option<(char, usize)>,
}

impl CodeFenceTracker {
    /// Feed the next line. Returns true when the line is a fence line or
    /// part of a fenced block.
    pub fn in_code(&mut self, text: &str) -> bool {
        match self.open {
            Some((ch, len)) => {
                if is_other_closing(text, ch, len) {
                    self.open = None;
                }
                true
            }
            None => {
                self.open = other_opening(text);
                self.open.is_some()
            }
        }
    }
}

/// Scan a document for widget fences.
pub fn scan_fences(source: &str, options: &ScanOptions) -> FenceScan {
    let lines = split_lines(source);
    let mut scan = FenceScan::default();
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];

        if let Some((kind, ticks)) = widget_opening(line.text, options) {
            let closing = lines[index + 1..]
                .iter()
                .position(|candidate| is_widget_closing(candidate.text, ticks))
                .map(|offset| index + 1 + offset);
            match closing {
                Some(end) => {
                    scan.blocks.push(build_block(source, &lines, kind, index, end));
                    index = end + 1;
                }
                None => {
                    scan.unclosed.push(UnclosedFence {
                        kind,
                        line: index + 1,
                    });
                    index += 1;
                }
            }
            continue;
        }

        if options.skip_nested
            && let Some((ch, len)) = other_opening(line.text)
        {
            index = lines[index + 1..]
                .iter()
                .position(|candidate| is_other_closing(candidate.text, ch, len))
                .map_or(lines.len(), |offset| index + 1 + offset + 1);
            continue;
        }

        index += 1;
    }

    scan
}

fn build_block(
    source: &str,
    lines: &[Line<'_>],
    kind: WidgetKind,
    open: usize,
    close: usize,
) -> FenceBlock {
    let body = if close > open + 1 {
        let start = lines[open + 1].start;
        let last = &lines[close - 1];
        let end = last.start + last.text.len();
        source[start..end].strip_suffix('\r').unwrap_or(&source[start..end])
    } else {
        ""
    };
    let closing = &lines[close];
    FenceBlock {
        kind,
        body: body.to_string(),
        start_line: open + 1,
        end_line: close + 1,
        span: lines[open].start
            ..closing.start + closing.text.strip_suffix('\r').unwrap_or(closing.text).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> FenceScan {
        scan_fences(source, &ScanOptions::default())
    }

    #[test]
    fn finds_widget_block() {
        let source = "# Title\n\n```quiz\nquestion: Q?\n```\n\nAfter\n";
        let result = scan(source);
        assert_eq!(result.blocks.len(), 1);
        let block = &result.blocks[0];
        assert_eq!(block.kind, WidgetKind::Quiz);
        assert_eq!(block.body, "question: Q?");
        assert_eq!(block.start_line, 3);
        assert_eq!(block.end_line, 5);
        assert_eq!(&source[block.span.clone()], "```quiz\nquestion: Q?\n```");
    }

    #[test]
    fn ignores_plain_code_and_unknown_tags() {
        let source = "```sql\nSELECT 1;\n```\n\n```poll\nx: 1\n```\n";
        assert!(scan(source).blocks.is_empty());
    }

    #[test]
    fn requires_column_zero_and_bare_tag() {
        let source = "  ```quiz\na: 1\n```\n```quiz title\na: 1\n```\n";
        assert!(scan(source).blocks.is_empty());
    }

    #[test]
    fn closing_must_match_backtick_count() {
        let source = "````terminal\nsteps:\n  - command: |\n      ```\n````\n";
        let result = scan(source);
        assert_eq!(result.blocks.len(), 1);
        assert!(result.blocks[0].body.contains("```"));
        assert_eq!(result.blocks[0].end_line, 5);
    }

    #[test]
    fn nested_widget_fences_are_skipped_by_default() {
        let source = "````markdown\n```quiz\nquestion: shown literally\n```\n````\n\n```quiz\nquestion: real\n```\n";
        let result = scan(source);
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].body, "question: real");

        let options = ScanOptions {
            skip_nested: false,
            ..ScanOptions::default()
        };
        assert_eq!(scan_fences(source, &options).blocks.len(), 2);
    }

    #[test]
    fn tilde_fences_hide_widgets() {
        let source = "~~~\n```quiz\nquestion: hidden\n```\n~~~\n";
        assert!(scan(source).blocks.is_empty());
    }

    #[test]
    fn unclosed_fence_is_reported_and_scanning_resumes() {
        let source = "````quiz\nquestion: broken\n\n```terminal\ntitle: ok\n```\n";
        let result = scan(source);
        assert_eq!(
            result.unclosed,
            vec![UnclosedFence {
                kind: WidgetKind::Quiz,
                line: 1
            }]
        );
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].kind, WidgetKind::Terminal);
    }

    #[test]
    fn empty_body_and_crlf() {
        let result = scan("```exercise\n```\n");
        assert_eq!(result.blocks[0].body, "");

        let source = "```exercise\r\ntitle: T\r\n```\r\nNext\r\n";
        let result = scan(source);
        assert_eq!(result.blocks[0].body, "title: T");
        assert_eq!(&source[result.blocks[0].span.clone()], "```exercise\r\ntitle: T\r\n```");
    }

    #[test]
    fn tracker_follows_run_length() {
        let source = "````terminal\nsteps:\n```\n````\nNext\n";
        let mut tracker = CodeFenceTracker::default();
        let inside: Vec<bool> = source.lines().map(|line| tracker.in_code(line)).collect();
        assert_eq!(inside, [true, true, true, true, false]);
    }

    #[test]
    fn tracker_ignores_closing_with_info_string() {
        let mut tracker = CodeFenceTracker::default();
        assert!(tracker.in_code("~~~sql"));
        assert!(tracker.in_code("```"));
        assert!(tracker.in_code("~~~ text"));
        assert!(tracker.in_code("~~~~"));
        assert!(!tracker.in_code("# Heading"));
    }

    #[test]
    fn disabled_kinds_are_ignored() {
        let options = ScanOptions {
            kinds: vec![WidgetKind::Terminal],
            skip_nested: true,
        };
        let result = scan_fences("```quiz\na: 1\n```\n", &options);
        assert!(result.blocks.is_empty());
        assert!(result.unclosed.is_empty());
    }
}
