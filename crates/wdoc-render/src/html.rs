//! HTML placeholder generation for a single widget fence.

use serde_json::Value;
use wdoc_ingest::ConfigOutcome;
use wdoc_model::WidgetKind;

/// Escape serialized JSON for a double-quoted HTML attribute.
///
/// `&` is replaced first so the entities introduced for quotes are not
/// escaped twice.
pub fn escape_attribute(json: &str) -> String {
    json.replace('&', "&amp;")
        .replace('\'', "&#39;")
        .replace('"', "&quot;")
}

/// Escape text content for HTML.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Title shown in the no-script fallback: `title`, then `question`, then
/// the kind's default title.
pub fn widget_title(kind: WidgetKind, config: &Value) -> String {
    ["title", "question"]
        .into_iter()
        .filter_map(|key| config.get(key))
        .find_map(|value| match value {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| kind.default_title().to_string())
}

/// Render one fence as its HTML placeholder.
pub fn render_fence(kind: WidgetKind, outcome: &ConfigOutcome) -> String {
    match outcome {
        ConfigOutcome::Parsed(config) => render_config(kind, config),
        ConfigOutcome::Invalid(_) => render_invalid(kind),
    }
}

/// Placeholder `div` carrying the configuration as a JSON data attribute.
pub fn render_config(kind: WidgetKind, config: &Value) -> String {
    let config_attr = escape_attribute(&config.to_string());
    let title = escape_text(&widget_title(kind, config));
    format!(
        "<div class=\"interactive-{kind}\" data-config=\"{config_attr}\">\
         <noscript><p><strong>{title}</strong> (requires JavaScript)</p></noscript>\
         </div>"
    )
}

/// Warning admonition shown in place of a fence whose YAML does not parse.
pub fn render_invalid(kind: WidgetKind) -> String {
    format!(
        "<div class=\"admonition warning\">\
         <p>Invalid interactive component configuration ({kind})</p>\
         </div>"
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn attribute_escaping_order() {
        assert_eq!(
            escape_attribute(r#"{"a":"Tom's & Jerry's"}"#),
            "{&quot;a&quot;:&quot;Tom&#39;s &amp; Jerry&#39;s&quot;}"
        );
    }

    #[test]
    fn title_precedence() {
        let both = json!({"title": "T", "question": "Q"});
        assert_eq!(widget_title(WidgetKind::Quiz, &both), "T");
        let question = json!({"question": "Q"});
        assert_eq!(widget_title(WidgetKind::Quiz, &question), "Q");
        let null_title = json!({"title": null, "question": "Q"});
        assert_eq!(widget_title(WidgetKind::Quiz, &null_title), "Q");
        let numeric = json!({"title": 42});
        assert_eq!(widget_title(WidgetKind::Terminal, &numeric), "42");
        assert_eq!(
            widget_title(WidgetKind::CommandBuilder, &json!({})),
            "Command Builder"
        );
        assert_eq!(
            widget_title(WidgetKind::CodeWalkthrough, &json!(["list"])),
            "Code Walkthrough"
        );
    }

    #[test]
    fn title_is_html_escaped() {
        let html = render_config(WidgetKind::Quiz, &json!({"question": "Is 1 < 2?"}));
        assert!(html.contains("<strong>Is 1 &lt; 2?</strong>"));
    }
}
