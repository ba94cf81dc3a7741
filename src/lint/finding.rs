//! Lint findings.
//!
//! A [`Finding`] is one message reported for a file, either by a rule or by
//! the scanner when the source cannot be read as JavaScript at all.

use super::rule::{RuleId, Severity};

/// One issue reported for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The rule that produced this finding. `None` for fatal parse failures.
    pub rule_id: Option<RuleId>,
    /// Set when the source could not be scanned.
    pub fatal: bool,
    /// Severity stamped by the engine from the configured rule level.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// 1-indexed line.
    pub line: usize,
    /// 1-indexed column.
    pub column: usize,
}

impl Finding {
    /// Create a finding for a rule. Severity defaults to error until the
    /// engine stamps the configured level.
    pub fn new(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule_id: Some(rule_id),
            fatal: false,
            severity: Severity::Error,
            message: message.into(),
            line: 1,
            column: 1,
        }
    }

    /// Create a fatal finding for a source that failed to scan.
    pub fn fatal(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            rule_id: None,
            fatal: true,
            severity: Severity::Error,
            message: message.into(),
            line,
            column,
        }
    }

    /// Set the reported position.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Rule identifier as a string, empty for fatal findings.
    pub fn rule_name(&self) -> &str {
        self.rule_id.as_ref().map(RuleId::as_str).unwrap_or("")
    }
}
