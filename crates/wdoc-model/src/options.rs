//! Project options, loaded from `widgetdoc.toml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::kind::WidgetKind;
use crate::lint::is_issue_code;

/// File name looked up in the docs root when no `--config` is given.
pub const CONFIG_FILENAME: &str = "widgetdoc.toml";

/// Options controlling fence scanning and linting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetOptions {
    /// Widget kinds recognised by the scanner. Fences with other tags are left alone.
    pub kinds: Vec<WidgetKind>,

    /// Ignore widget fences that sit inside another fenced code block.
    ///
    /// Lessons that document the widget syntax itself wrap examples in a
    /// longer outer fence; those examples must stay literal.
    pub skip_nested: bool,

    pub lint: LintOptions,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            kinds: WidgetKind::ALL.to_vec(),
            skip_nested: true,
            lint: LintOptions::default(),
        }
    }
}

/// Options for the content linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintOptions {
    /// Issue codes to suppress (e.g., "WD014").
    pub disabled: Vec<String>,
    /// Promote every warning to an error.
    pub warnings_as_errors: bool,
    /// Resolve Previous/Next links between documents.
    pub check_navigation: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            disabled: Vec::new(),
            warnings_as_errors: false,
            check_navigation: true,
        }
    }
}

impl LintOptions {
    pub fn is_disabled(&self, code: &str) -> bool {
        self.disabled
            .iter()
            .any(|disabled| disabled.trim().eq_ignore_ascii_case(code))
    }
}

impl WidgetOptions {
    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML, an empty `kinds` list, or
    /// an unknown code in `lint.disabled`.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: WidgetOptions = toml::from_str(text).map_err(|e| ModelError::InvalidConfig {
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options: WidgetOptions = toml::from_str(&text).map_err(|source| ModelError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Load `widgetdoc.toml` from `dir` if present, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn is_enabled(&self, kind: WidgetKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn validate(&self) -> Result<()> {
        if self.kinds.is_empty() {
            return Err(ModelError::InvalidConfig {
                message: "`kinds` must list at least one widget kind".to_string(),
            });
        }
        if let Some(code) = self.lint.disabled.iter().find(|code| !is_issue_code(code)) {
            return Err(ModelError::InvalidConfig {
                message: format!("`lint.disabled` names unknown issue code {code:?}"),
            });
        }
        Ok(())
    }
}
