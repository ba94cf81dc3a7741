//! Error types for lintgate operations.
//!
//! This module defines [`GateError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GateError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors
//! - [`GateError::SevereRuleErrors`] is the only signal a build pipeline
//!   needs to halt on; details were already written by the formatter

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lintgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// Lint configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or options file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A rule entry carries a severity that is not off/warn/error.
    #[error("Invalid severity for rule '{rule}': {value}")]
    InvalidSeverity { rule: String, value: String },

    /// The configuration enables a rule that has no definition.
    #[error("Definition for rule '{rule}' was not found")]
    UnknownRule { rule: String },

    /// The requested formatter identifier is not known.
    #[error("Unknown formatter: {name}")]
    UnknownFormatter { name: String },

    /// A file in the rules directory could not be turned into a rule.
    #[error("Invalid rule definition at {path}: {message}")]
    RuleDefinitionError { path: PathBuf, message: String },

    /// A finding references a rule absent from the resolved configuration.
    #[error("Finding reported by unconfigured rule '{rule}'")]
    UnconfiguredRule { rule: String },

    /// At least one fatal or error-level finding was reported for a file.
    #[error("severe rule errors")]
    SevereRuleErrors,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lintgate operations.
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severe_rule_errors_has_fixed_message() {
        assert_eq!(GateError::SevereRuleErrors.to_string(), "severe rule errors");
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = GateError::ConfigNotFound {
            path: PathBuf::from("/foo/lint.json"),
        };
        assert!(err.to_string().contains("/foo/lint.json"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GateError::ConfigParseError {
            path: PathBuf::from("/lint.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/lint.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn unknown_rule_displays_rule() {
        let err = GateError::UnknownRule {
            rule: "no-foo".into(),
        };
        assert_eq!(err.to_string(), "Definition for rule 'no-foo' was not found");
    }

    #[test]
    fn unknown_formatter_displays_name() {
        let err = GateError::UnknownFormatter {
            name: "checkstyle".into(),
        };
        assert!(err.to_string().contains("checkstyle"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GateError = io_err.into();
        assert!(matches!(err, GateError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GateError::SevereRuleErrors)
        }
        assert!(returns_error().is_err());
    }
}
