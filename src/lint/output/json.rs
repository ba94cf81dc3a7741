//! JSON output formatter.
//!
//! Formats lint reports as machine-readable JSON for tooling integration.
//! The shape follows the common lint-result layout: an array of file
//! results, each with its messages and error/warning counts.

use super::{FileReport, LintFormatter};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFileResult<'a> {
    file_path: &'a str,
    messages: Vec<JsonMessage<'a>>,
    error_count: usize,
    warning_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMessage<'a> {
    rule_id: Option<&'a str>,
    severity: u8,
    message: &'a str,
    line: usize,
    column: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    fatal: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport], writer: &mut dyn Write) -> std::io::Result<()> {
        let results: Vec<_> = reports
            .iter()
            .map(|report| JsonFileResult {
                file_path: &report.file_path,
                messages: report
                    .findings
                    .iter()
                    .map(|f| JsonMessage {
                        rule_id: f.rule_id.as_ref().map(|id| id.as_str()),
                        severity: if f.fatal { 2 } else { f.severity.level() },
                        message: &f.message,
                        line: f.line,
                        column: f.column,
                        fatal: f.fatal,
                    })
                    .collect(),
                error_count: report.error_count(),
                warning_count: report.warning_count(),
            })
            .collect();

        serde_json::to_writer(writer, &results).map_err(std::io::Error::other)?;

        Ok(())
    }
}
