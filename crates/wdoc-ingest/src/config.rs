//! Widget body parsing: YAML in, JSON configuration out.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

/// A block-mapping value or sequence item that is a bare YAML 1.1 boolean
/// word, with an optional trailing comment.
static YAML11_BOOL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<lead>[ \t]*(?:-[ \t]+)*(?:[^\s#'\x22\[\]{}&*!|>%@`-][^:#]*:[ \t]+)?)(?P<word>yes|Yes|YES|no|No|NO|on|On|ON|off|Off|OFF)(?P<tail>[ \t]*(?:#.*)?)$",
    )
    .expect("Invalid YAML 1.1 boolean regex")
});

/// A line whose value starts a literal or folded block scalar.
static BLOCK_SCALAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^[ \t]*-|:)[ \t]+[|>][-+0-9]*[ \t]*(?:#.*)?$")
        .expect("Invalid block scalar regex")
});

/// Outcome of parsing one fence body.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOutcome {
    /// Parsed configuration. Empty bodies and `null` documents become `{}`.
    Parsed(Value),
    /// The body is not valid YAML; carries the parser message.
    Invalid(String),
}

impl ConfigOutcome {
    pub fn value(&self) -> Option<&Value> {
        match self {
            ConfigOutcome::Parsed(value) => Some(value),
            ConfigOutcome::Invalid(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ConfigOutcome::Invalid(_))
    }
}

/// Parse a widget body as YAML and convert it to a JSON value.
pub fn parse_config(body: &str) -> ConfigOutcome {
    if body.trim().is_empty() {
        return ConfigOutcome::Parsed(Value::Object(Map::new()));
    }
    let body = yaml11_booleans(body);
    let mut yaml: YamlValue = match serde_yaml::from_str(&body) {
        Ok(value) => value,
        Err(e) => return ConfigOutcome::Invalid(e.to_string()),
    };
    if let Err(e) = yaml.apply_merge() {
        return ConfigOutcome::Invalid(e.to_string());
    }
    match yaml_to_json(yaml) {
        Value::Null => ConfigOutcome::Parsed(Value::Object(Map::new())),
        value => ConfigOutcome::Parsed(value),
    }
}

/// Rewrite unquoted `yes`/`no`/`on`/`off` values to `true`/`false`.
///
/// Lesson bodies are written against a YAML 1.1 loader, where those words
/// are booleans; `serde_yaml` reads them as strings. Only plain scalars in
/// block mappings and sequences are rewritten. Quoted values, flow
/// collections and block scalar contents are left alone.
pub fn yaml11_booleans(body: &str) -> Cow<'_, str> {
    if !body.lines().any(|line| YAML11_BOOL_REGEX.is_match(line.trim_end_matches('\r'))) {
        return Cow::Borrowed(body);
    }
    let mut out = String::with_capacity(body.len());
    let mut block_parent: Option<usize> = None;
    for chunk in body.split_inclusive('\n') {
        let (line, ending) = split_ending(chunk);
        let indent = line.len() - line.trim_start().len();
        if let Some(parent) = block_parent {
            if line.trim().is_empty() || indent > parent {
                out.push_str(chunk);
                continue;
            }
            block_parent = None;
        }
        if BLOCK_SCALAR_REGEX.is_match(line) {
            block_parent = Some(indent);
        }
        match YAML11_BOOL_REGEX.captures(line) {
            Some(caps) if !caps["lead"].trim().is_empty() => {
                let value = matches!(&caps["word"][..1], "y" | "Y")
                    || caps["word"].eq_ignore_ascii_case("on");
                out.push_str(&caps["lead"]);
                out.push_str(if value { "true" } else { "false" });
                out.push_str(&caps["tail"]);
            }
            _ => out.push_str(line),
        }
        out.push_str(ending);
    }
    Cow::Owned(out)
}

fn split_ending(chunk: &str) -> (&str, &str) {
    if let Some(line) = chunk.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = chunk.strip_suffix('\n') {
        (line, "\n")
    } else {
        (chunk, "")
    }
}

/// Convert a YAML value to JSON the way a JSON encoder would see it.
///
/// Mapping keys are stringified, non-finite floats become `null`, and tags
/// are dropped in favour of the tagged value.
pub fn yaml_to_json(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(flag) => Value::Bool(flag),
        YamlValue::Number(number) => yaml_number(&number),
        YamlValue::String(text) => Value::String(text),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_string(key), yaml_to_json(value));
            }
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(number: &serde_yaml::Number) -> Value {
    if let Some(int) = number.as_i64() {
        Value::Number(int.into())
    } else if let Some(uint) = number.as_u64() {
        Value::Number(uint.into())
    } else {
        number
            .as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn key_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(text) => text,
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(flag) => flag.to_string(),
        YamlValue::Number(number) => number.to_string(),
        YamlValue::Tagged(tagged) => key_string(tagged.value),
        complex => yaml_to_json(complex).to_string(),
    }
}
