//! Filter options and the project options file.
//!
//! [`FilterOptions`] is the construction input of a validation filter. A
//! project can keep defaults in `.lintgate.yml` at its root:
//!
//! ```yaml
//! config: lint/strict.json
//! rulesdir: lint/rules
//! format: compact
//! unconfigured_rule: ignore
//! ```
//!
//! Relative paths in the options file resolve against the project root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigSource;
use crate::error::{GateError, Result};
use crate::lint::UnconfiguredRulePolicy;

/// Name of the options file looked up in the project root.
pub const OPTIONS_FILE: &str = ".lintgate.yml";

/// Options for constructing a validation filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    /// Lint configuration file. `None` uses the bundled default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PathBuf>,

    /// Directory of extra rule definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rulesdir: Option<PathBuf>,

    /// Formatter identifier. `None` uses `stylish`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// How findings from unconfigured rules are counted.
    pub unconfigured_rule: UnconfiguredRulePolicy,

    /// Whether formatter output may use ANSI colors.
    #[serde(skip)]
    pub color: bool,
}

impl FilterOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = Some(path.into());
        self
    }

    pub fn with_rulesdir(mut self, path: impl Into<PathBuf>) -> Self {
        self.rulesdir = Some(path.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_unconfigured_rule(mut self, policy: UnconfiguredRulePolicy) -> Self {
        self.unconfigured_rule = policy;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Formatter identifier, defaulting to `stylish`.
    pub fn format_name(&self) -> &str {
        self.format.as_deref().unwrap_or("stylish")
    }

    /// Where the lint configuration is read from.
    pub fn config_source(&self) -> ConfigSource {
        ConfigSource::from_path(self.config.as_deref())
    }

    /// Load an options file. Relative paths inside it are resolved against
    /// `base`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the file is not valid options YAML.
    pub fn load(path: &Path, base: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut options: FilterOptions = if content.trim().is_empty() {
            FilterOptions::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| GateError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        options.config = options.config.map(|p| base.join(p));
        options.rulesdir = options.rulesdir.map(|p| base.join(p));
        Ok(options)
    }

    /// Load `.lintgate.yml` from `project_root`, if present.
    pub fn discover(project_root: &Path) -> Result<Option<Self>> {
        let path = project_root.join(OPTIONS_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        tracing::debug!("Reading options from {}", path.display());
        Self::load(&path, project_root).map(Some)
    }
}
