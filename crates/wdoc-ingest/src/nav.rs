//! Previous/Next navigation links between lessons.

use std::sync::LazyLock;

use regex::Regex;

use crate::fence::CodeFenceTracker;

/// Inline Markdown link with an optional title: `[text](target "title")`.
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\]]*)\]\(\s*<?([^)\s>]+)>?(?:\s+"[^"]*")?\s*\)"#)
        .expect("Invalid link regex")
});

static NAV_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(previous|next)\b").expect("Invalid nav regex"));

/// A relative link found on a navigation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub text: String,
    /// Link target with any `#fragment` removed.
    pub target: String,
    /// 1-based line number.
    pub line: usize,
}

/// Extract relative links from lines that mention "Previous" or "Next".
///
/// External (`scheme://`, `mailto:`) and fragment-only links are skipped,
/// as is anything inside fenced code.
pub fn extract_nav_links(source: &str) -> Vec<NavLink> {
    let mut links = Vec::new();
    let mut fences = CodeFenceTracker::default();

    for (index, line) in source.lines().enumerate() {
        if fences.in_code(line) {
            continue;
        }
        if !NAV_LINE_REGEX.is_match(line) {
            continue;
        }
        for captures in LINK_REGEX.captures_iter(line) {
            let text = captures.get(1).map_or("", |m| m.as_str());
            let raw = captures.get(2).map_or("", |m| m.as_str());
            if is_external(raw) {
                continue;
            }
            let target = raw.split('#').next().unwrap_or_default();
            if target.is_empty() {
                continue;
            }
            links.push(NavLink {
                text: text.trim().to_string(),
                target: target.to_string(),
                line: index + 1,
            });
        }
    }

    links
}

fn is_external(target: &str) -> bool {
    target.contains("://") || target.starts_with("mailto:")
}
