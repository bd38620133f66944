//! Integration tests for widget rendering.

use std::fs;

use proptest::prelude::*;
use wdoc_ingest::{ConfigOutcome, ScanOptions, parse_config};
use wdoc_model::{WidgetKind, WidgetOptions};
use wdoc_render::{
    RenderError, escape_attribute, render_fence, render_markdown, render_tree,
};

#[test]
fn quiz_placeholder() {
    let outcome = parse_config(
        "question: Which engine is transactional?\noptions:\n  - text: InnoDB\n    correct: true",
    );
    insta::assert_snapshot!(
        render_fence(WidgetKind::Quiz, &outcome),
        @r#"<div class="interactive-quiz" data-config="{&quot;question&quot;:&quot;Which engine is transactional?&quot;,&quot;options&quot;:[{&quot;text&quot;:&quot;InnoDB&quot;,&quot;correct&quot;:true}]}"><noscript><p><strong>Which engine is transactional?</strong> (requires JavaScript)</p></noscript></div>"#
    );
}

#[test]
fn empty_body_uses_default_title() {
    let outcome = parse_config("");
    insta::assert_snapshot!(
        render_fence(WidgetKind::CodeWalkthrough, &outcome),
        @r#"<div class="interactive-code-walkthrough" data-config="{}"><noscript><p><strong>Code Walkthrough</strong> (requires JavaScript)</p></noscript></div>"#
    );
}

#[test]
fn invalid_yaml_placeholder() {
    let outcome = ConfigOutcome::Invalid("mapping values are not allowed".to_string());
    insta::assert_snapshot!(
        render_fence(WidgetKind::CommandBuilder, &outcome),
        @r#"<div class="admonition warning"><p>Invalid interactive component configuration (command-builder)</p></div>"#
    );
}

#[test]
fn non_ascii_is_kept_verbatim() {
    let outcome = parse_config("title: Réplication — état\n");
    let html = render_fence(WidgetKind::Terminal, &outcome);
    assert!(html.contains("&quot;title&quot;:&quot;Réplication — état&quot;"));
    assert!(html.contains("<strong>Réplication — état</strong>"));
}

#[test]
fn page_rewrite_counts_blocks() {
    let source = "# Security\n\n\
                  ```quiz\nquestion: Least privilege means?\n```\n\n\
                  ```terminal\nsteps: [unterminated\n```\n\n\
                  ```sql\nGRANT SELECT ON shop.* TO 'report'@'%';\n```\n";
    let rendered = render_markdown(source, &ScanOptions::default());
    assert_eq!(rendered.blocks, 2);
    assert_eq!(rendered.invalid, 1);
    let expected = "# Security\n\n\
                    <div class=\"interactive-quiz\" data-config=\"{&quot;question&quot;:&quot;Least privilege means?&quot;}\">\
                    <noscript><p><strong>Least privilege means?</strong> (requires JavaScript)</p></noscript></div>\n\n\
                    <div class=\"admonition warning\"><p>Invalid interactive component configuration (terminal)</p></div>\n\n\
                    ```sql\nGRANT SELECT ON shop.* TO 'report'@'%';\n```\n";
    assert_eq!(rendered.markdown, expected);
}

#[test]
fn crlf_line_break_after_fence_is_kept() {
    let source = "# Locks\r\n\r\n```quiz\r\nquestion: Q\r\n```\r\nAfter\r\n";
    let rendered = render_markdown(source, &ScanOptions::default());
    assert_eq!(rendered.blocks, 1);
    assert!(rendered.markdown.starts_with("# Locks\r\n\r\n<div class=\"interactive-quiz\""));
    assert!(rendered.markdown.ends_with("</noscript></div>\r\nAfter\r\n"));
}

#[test]
fn render_tree_mirrors_docs() {
    let docs = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::create_dir_all(docs.path().join("mongodb")).unwrap();
    fs::write(
        docs.path().join("mongodb/intro.md"),
        "# MongoDB\n\n```exercise\ntitle: Create an index\n```\n",
    )
    .unwrap();
    fs::write(docs.path().join("index.md"), "# Home\n").unwrap();
    fs::write(docs.path().join("mongodb/diagram.svg"), "<svg/>").unwrap();

    let files = render_tree(docs.path(), out.path(), &WidgetOptions::default()).unwrap();
    let relative: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(relative, ["index.md", "mongodb/intro.md"]);
    assert_eq!(files[1].blocks, 1);

    let intro = fs::read_to_string(out.path().join("mongodb/intro.md")).unwrap();
    assert!(intro.contains("<div class=\"interactive-exercise\""));
    assert_eq!(
        fs::read_to_string(out.path().join("mongodb/diagram.svg")).unwrap(),
        "<svg/>"
    );
}

#[test]
fn render_tree_skips_nested_output_and_rejects_same_dir() {
    let docs = tempfile::tempdir().unwrap();
    fs::write(docs.path().join("a.md"), "# A\n").unwrap();
    let nested = docs.path().join("site");

    let first = render_tree(docs.path(), &nested, &WidgetOptions::default()).unwrap();
    let second = render_tree(docs.path(), &nested, &WidgetOptions::default()).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);

    let err = render_tree(docs.path(), docs.path(), &WidgetOptions::default()).unwrap_err();
    assert!(matches!(err, RenderError::SameDirectory { .. }));
}

#[test]
fn disabled_kinds_stay_literal() {
    let options = WidgetOptions {
        kinds: vec![WidgetKind::Terminal],
        ..WidgetOptions::default()
    };
    let source = "```quiz\nquestion: Q\n```\n";
    let rendered = render_markdown(source, &ScanOptions::from(&options));
    assert_eq!(rendered.markdown, source);
}

fn unescape_attribute(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn escaped_attribute_has_no_quotes(text in ".*") {
        let escaped = escape_attribute(&text);
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
        prop_assert_eq!(unescape_attribute(&escaped), text);
    }

    #[test]
    fn text_without_backticks_is_unchanged(text in "[^`]*") {
        let rendered = render_markdown(&text, &ScanOptions::default());
        prop_assert_eq!(rendered.markdown, text);
        prop_assert_eq!(rendered.blocks, 0);
    }
}
