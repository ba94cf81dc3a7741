//! Compact output formatter: one line per finding.

use std::io::Write;

use super::{plural, FileReport, LintFormatter};
use crate::lint::Severity;

/// Formats each finding as `path: line L, col C, Error - message (rule)`.
pub struct CompactFormatter;

impl LintFormatter for CompactFormatter {
    fn format(&self, reports: &[FileReport], writer: &mut dyn Write) -> std::io::Result<()> {
        let mut total = 0;

        for report in reports {
            for finding in &report.findings {
                total += 1;
                let label = if finding.fatal || finding.severity == Severity::Error {
                    "Error"
                } else {
                    "Warning"
                };
                write!(
                    writer,
                    "{}: line {}, col {}, {} - {}",
                    report.file_path, finding.line, finding.column, label, finding.message
                )?;
                match &finding.rule_id {
                    Some(id) => writeln!(writer, " ({})", id)?,
                    None => writeln!(writer)?,
                }
            }
        }

        if total > 0 {
            writeln!(writer)?;
            write!(writer, "{}", plural(total, "problem"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Finding, RuleId};

    #[test]
    fn formats_one_line_per_finding() {
        let reports = vec![FileReport::new(
            "lib/a.js",
            vec![
                Finding::new(RuleId::new("semi"), "Missing semicolon.").at(1, 10),
                Finding::new(RuleId::new("quotes"), "Strings must use doublequote.")
                    .at(2, 9)
                    .with_severity(Severity::Warning),
            ],
        )];

        let mut output = Vec::new();
        CompactFormatter.format(&reports, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(
            output,
            "lib/a.js: line 1, col 10, Error - Missing semicolon. (semi)\n\
             lib/a.js: line 2, col 9, Warning - Strings must use doublequote. (quotes)\n\
             \n\
             2 problems"
        );
    }

    #[test]
    fn fatal_findings_have_no_rule_suffix() {
        let reports = vec![FileReport::new(
            "a.js",
            vec![Finding::fatal("Unexpected end of input", 4, 1)],
        )];

        let mut output = Vec::new();
        CompactFormatter.format(&reports, &mut output).unwrap();

        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("a.js: line 4, col 1, Error - Unexpected end of input\n"));
    }
}
