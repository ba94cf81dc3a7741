//! Lint output formatters.
//!
//! This module provides formatters for writing lint findings in different
//! formats (stylish, compact, JSON, SARIF). A formatter receives a slice of
//! [`FileReport`]s and renders them to a writer.

pub mod compact;
pub mod json;
pub mod sarif;
pub mod stylish;

use std::io::Write;
use std::str::FromStr;

use crate::error::GateError;
use crate::lint::{Finding, Severity};

/// Findings reported for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path relative to the source root.
    pub file_path: String,
    /// Findings ordered by position.
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Create a report for a file.
    pub fn new(file_path: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            file_path: file_path.into(),
            findings,
        }
    }

    /// Findings that are fatal or stamped at the error level.
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.fatal || f.severity == Severity::Error)
            .count()
    }

    /// Non-fatal findings stamped at the warning level.
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| !f.fatal && f.severity == Severity::Warning)
            .count()
    }
}

/// Output format for lint results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Stylish,
    Compact,
    Json,
    Sarif,
}

impl OutputFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Stylish,
        OutputFormat::Compact,
        OutputFormat::Json,
        OutputFormat::Sarif,
    ];

    /// Identifier used in options files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Stylish => "stylish",
            OutputFormat::Compact => "compact",
            OutputFormat::Json => "json",
            OutputFormat::Sarif => "sarif",
        }
    }

    /// Build the formatter for this format.
    pub fn formatter(self, use_color: bool) -> Box<dyn LintFormatter> {
        match self {
            OutputFormat::Stylish => Box::new(StylishFormatter::new(use_color)),
            OutputFormat::Compact => Box::new(CompactFormatter),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Sarif => Box::new(SarifFormatter::new(
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
            )),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| GateError::UnknownFormatter {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter: Send + Sync {
    /// Format reports to the given writer.
    fn format(&self, reports: &[FileReport], writer: &mut dyn Write) -> std::io::Result<()>;
}

pub use compact::CompactFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
pub use stylish::StylishFormatter;

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
