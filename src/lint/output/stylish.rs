//! Stylish output formatter.
//!
//! Groups findings under their file path with aligned columns and ends with
//! a one-line summary. This is the default format.

use std::io::Write;

use console::Style;

use super::{plural, FileReport, LintFormatter};
use crate::lint::{Finding, Severity};

/// Formats lint output for terminal display with optional color support.
pub struct StylishFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl StylishFormatter {
    /// Create a new stylish formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.use_color {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn severity_label(finding: &Finding) -> &'static str {
        if finding.fatal || finding.severity == Severity::Error {
            "error"
        } else {
            "warning"
        }
    }
}

impl LintFormatter for StylishFormatter {
    fn format(&self, reports: &[FileReport], writer: &mut dyn Write) -> std::io::Result<()> {
        let mut errors = 0;
        let mut warnings = 0;

        for report in reports.iter().filter(|r| !r.findings.is_empty()) {
            errors += report.error_count();
            warnings += report.warning_count();

            writeln!(writer)?;
            writeln!(writer, "{}", self.paint(Style::new().underlined(), &report.file_path))?;

            let rows: Vec<_> = report
                .findings
                .iter()
                .map(|f| (format!("{}:{}", f.line, f.column), Self::severity_label(f), f))
                .collect();
            let pos_width = rows.iter().map(|(p, _, _)| p.len()).max().unwrap_or(0);
            let sev_width = rows.iter().map(|(_, s, _)| s.len()).max().unwrap_or(0);
            let msg_width = rows
                .iter()
                .map(|(_, _, f)| f.message.chars().count())
                .max()
                .unwrap_or(0);

            for (pos, label, finding) in &rows {
                let style = if *label == "error" {
                    Style::new().red()
                } else {
                    Style::new().yellow()
                };
                let line = format!(
                    "  {}  {}  {:msg_width$}  {}",
                    self.paint(Style::new().dim(), &format!("{:>pos_width$}", pos)),
                    self.paint(style, &format!("{:sev_width$}", label)),
                    finding.message,
                    self.paint(Style::new().dim(), finding.rule_name()),
                );
                writeln!(writer, "{}", line.trim_end())?;
            }
        }

        let total = errors + warnings;
        if total > 0 {
            let summary = format!(
                "\u{2716} {} ({}, {})",
                plural(total, "problem"),
                plural(errors, "error"),
                plural(warnings, "warning")
            );
            let style = if errors > 0 {
                Style::new().red().bold()
            } else {
                Style::new().yellow().bold()
            };
            writeln!(writer)?;
            write!(writer, "{}", self.paint(style, &summary))?;
        }

        Ok(())
    }
}
