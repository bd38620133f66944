//! Whole-page rewriting.

use tracing::warn;
use wdoc_ingest::{ScanOptions, parse_config, scan_fences};

use crate::html::render_fence;

/// A rewritten page plus counts for logging and summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub markdown: String,
    /// Widget fences replaced.
    pub blocks: usize,
    /// Fences whose YAML failed to parse and were replaced by a warning.
    pub invalid: usize,
}

/// Replace every widget fence in `source` with its HTML placeholder.
///
/// Text outside the fences is copied byte for byte, including the line break
/// after each closing fence.
pub fn render_markdown(source: &str, options: &ScanOptions) -> Rendered {
    let scan = scan_fences(source, options);
    let mut markdown = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut invalid = 0;

    for block in &scan.blocks {
        markdown.push_str(&source[cursor..block.span.start]);
        let outcome = parse_config(&block.body);
        if outcome.is_invalid() {
            invalid += 1;
            warn!(
                kind = %block.kind,
                line = block.start_line,
                "invalid widget configuration"
            );
        }
        markdown.push_str(&render_fence(block.kind, &outcome));
        cursor = block.span.end;
    }
    markdown.push_str(&source[cursor..]);

    Rendered {
        markdown,
        blocks: scan.blocks.len(),
        invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_without_widgets() {
        let source = "# Plain\n\n```sql\nSELECT 1;\n```\n";
        let rendered = render_markdown(source, &ScanOptions::default());
        assert_eq!(rendered.markdown, source);
        assert_eq!(rendered.blocks, 0);
    }

    #[test]
    fn surrounding_text_is_preserved() {
        let source = "Before\n\n```exercise\ntitle: T\n```\n\nAfter\n";
        let rendered = render_markdown(source, &ScanOptions::default());
        assert!(rendered.markdown.starts_with("Before\n\n<div class=\"interactive-exercise\""));
        assert!(rendered.markdown.ends_with("</noscript></div>\n\nAfter\n"));
        assert_eq!(rendered.blocks, 1);
        assert_eq!(rendered.invalid, 0);
    }
}
