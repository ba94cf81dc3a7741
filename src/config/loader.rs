//! Lint configuration loading and resolution.
//!
//! A filter reads its configuration from a [`ConfigSource`] on every call:
//! either the bundled default configuration or a file on disk. Files ending
//! in `.json` are parsed as JSON; anything else is parsed as YAML.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::schema::LintConfig;
use crate::error::{GateError, Result};
use crate::lint::RuleRegistry;

/// The bundled default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("default.json");

/// Display name used for the bundled configuration in error messages.
const DEFAULT_CONFIG_NAME: &str = "<default>";

/// Where a filter reads its lint configuration from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// The configuration bundled with lintgate.
    #[default]
    Default,
    /// A JSON or YAML file.
    File(PathBuf),
}

impl ConfigSource {
    /// Source for an optional configuration path.
    pub fn from_path(path: Option<&Path>) -> Self {
        path.map_or(ConfigSource::Default, |p| ConfigSource::File(p.to_path_buf()))
    }

    /// Load the configuration without checking rule definitions.
    pub fn load(&self) -> Result<LintConfig> {
        match self {
            ConfigSource::Default => default_config(),
            ConfigSource::File(path) => load_config_file(path),
        }
    }

    /// Load the configuration and check it against `registry`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRule` if an enabled rule has no definition, plus any
    /// error from [`ConfigSource::load`].
    pub fn resolve(&self, registry: &RuleRegistry) -> Result<LintConfig> {
        let config = self.load()?;
        check_rules(&config, registry)?;
        Ok(config)
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => f.write_str(DEFAULT_CONFIG_NAME),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse the bundled default configuration.
pub fn default_config() -> Result<LintConfig> {
    parse_config(DEFAULT_CONFIG, Path::new("default.json"))
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse configuration text. The format is chosen from the extension of
/// `source_path`, which is also used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    let parse_error = |message: String| GateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    };

    let document: Value = match source_path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        _ => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
    };

    match document {
        Value::Object(map) => LintConfig::from_document(map),
        Value::Null => Ok(LintConfig::new()),
        other => Err(parse_error(format!(
            "expected a mapping of rules, found {}",
            kind_of(&other)
        ))),
    }
}

/// Check that every enabled rule has a definition in `registry`.
pub fn check_rules(config: &LintConfig, registry: &RuleRegistry) -> Result<()> {
    for (id, _) in config.enabled() {
        if !registry.contains(id) {
            return Err(GateError::UnknownRule {
                rule: id.to_string(),
            });
        }
    }
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = default_config().unwrap();

        assert_eq!(config.severity_of("semi"), Some(Severity::Error));
        assert_eq!(config.severity_of("max-len"), Some(Severity::Off));
        assert_eq!(
            config.rule("quotes").unwrap().options,
            vec![serde_json::json!("double")]
        );
    }

    #[test]
    fn default_config_resolves_against_builtins() {
        let registry = RuleRegistry::with_builtins();
        assert!(ConfigSource::Default.resolve(&registry).is_ok());
    }

    #[test]
    fn loads_json_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lint.json");
        fs::write(&path, r#"{"rules": {"semi": 2}}"#).unwrap();

        let config = load_config_file(&path).unwrap();

        assert_eq!(config.len(), 1);
        assert_eq!(config.severity_of("semi"), Some(Severity::Error));
    }

    #[test]
    fn loads_yaml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lint.yml");
        fs::write(&path, "rules:\n  semi: warn\n  quotes: [error, single]\n").unwrap();

        let config = load_config_file(&path).unwrap();

        assert_eq!(config.severity_of("semi"), Some(Severity::Warning));
        assert_eq!(config.severity_of("quotes"), Some(Severity::Error));
    }

    #[test]
    fn empty_yaml_is_empty_config() {
        let config = parse_config("", Path::new("lint.yml")).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();

        let err = load_config_file(&temp.path().join("nope.json")).unwrap_err();

        assert!(matches!(err, GateError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_config("{ rules: ", Path::new("lint.json")).unwrap_err();
        assert!(matches!(err, GateError::ConfigParseError { .. }));
    }

    #[test]
    fn non_mapping_is_parse_error() {
        let err = parse_config("[1, 2]", Path::new("lint.json")).unwrap_err();
        assert!(err.to_string().contains("a sequence"));
    }

    #[test]
    fn resolve_rejects_unknown_enabled_rule() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lint.json");
        fs::write(&path, r#"{"rules": {"no-alert": 2}}"#).unwrap();

        let err = ConfigSource::File(path)
            .resolve(&RuleRegistry::with_builtins())
            .unwrap_err();

        assert!(matches!(err, GateError::UnknownRule { rule } if rule == "no-alert"));
    }

    #[test]
    fn resolve_allows_unknown_rule_when_off() {
        let config = parse_config(r#"{"no-alert": 0}"#, Path::new("lint.json")).unwrap();
        assert!(check_rules(&config, &RuleRegistry::with_builtins()).is_ok());
    }

    #[test]
    fn source_display() {
        assert_eq!(ConfigSource::Default.to_string(), "<default>");
        assert_eq!(
            ConfigSource::from_path(Some(Path::new("a/lint.json"))).to_string(),
            "a/lint.json"
        );
    }
}
