//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Configured level of a rule (off, warning, error)

use serde_json::Value;

use super::finding::Finding;
use super::source::SourceFile;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level of a rule, using the numeric convention of lint configs
/// (`0` off, `1` warning, `2` error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Findings are reported but never fail a file.
    Warning,
    /// Findings fail the file.
    Error,
}

impl Severity {
    /// Map a numeric level to a severity.
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    /// Map a textual level to a severity.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Some(Severity::Off),
            "warn" | "warning" | "1" => Some(Severity::Warning),
            "error" | "2" => Some(Severity::Error),
            _ => None,
        }
    }

    /// Numeric level of this severity.
    pub fn level(self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A lint rule that inspects one source file.
///
/// Rules report positions and messages only. The engine stamps each
/// finding with the severity configured for the rule.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check a scanned source file and return any findings.
    ///
    /// `options` holds the rule-specific entries that follow the level in a
    /// sequence-style severity descriptor.
    fn check(&self, source: &SourceFile, options: &[Value]) -> Vec<Finding>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("semi");
        let id2 = RuleId::new("semi");
        let id3 = RuleId::new("quotes");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("my-rule");
        assert_eq!(format!("{}", id), "my-rule");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Off < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_from_level() {
        assert_eq!(Severity::from_level(0), Some(Severity::Off));
        assert_eq!(Severity::from_level(1), Some(Severity::Warning));
        assert_eq!(Severity::from_level(2), Some(Severity::Error));
        assert_eq!(Severity::from_level(3), None);
    }

    #[test]
    fn severity_from_name() {
        assert_eq!(Severity::from_name("off"), Some(Severity::Off));
        assert_eq!(Severity::from_name("warn"), Some(Severity::Warning));
        assert_eq!(Severity::from_name("Error"), Some(Severity::Error));
        assert_eq!(Severity::from_name("fatal"), None);
    }

    #[test]
    fn severity_display_and_level() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.level(), 2);
    }
}
