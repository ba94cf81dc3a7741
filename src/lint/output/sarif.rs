//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub, VS Code, and other tools.

use super::{FileReport, LintFormatter};
use crate::lint::{Finding, Severity};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_column: Option<usize>,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
        }
    }

    fn finding_level(finding: &Finding) -> &'static str {
        match finding.severity {
            _ if finding.fatal => "error",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Off => "none",
        }
    }
}

impl LintFormatter for SarifFormatter {
    fn format(&self, reports: &[FileReport], writer: &mut dyn Write) -> std::io::Result<()> {
        let rule_ids: BTreeSet<_> = reports
            .iter()
            .flat_map(|r| r.findings.iter())
            .filter_map(|f| f.rule_id.as_ref())
            .collect();

        let rules: Vec<_> = rule_ids
            .iter()
            .map(|id| SarifRule {
                id: id.0.clone(),
                short_description: SarifMessage {
                    text: format!("Rule {}", id.0),
                },
            })
            .collect();

        let results: Vec<_> = reports
            .iter()
            .flat_map(|report| {
                report.findings.iter().map(move |f| SarifResult {
                    rule_id: f.rule_id.as_ref().map(|id| id.0.clone()),
                    level: Self::finding_level(f),
                    message: SarifMessage {
                        text: f.message.clone(),
                    },
                    locations: vec![SarifLocation {
                        physical_location: SarifPhysicalLocation {
                            artifact_location: SarifArtifactLocation {
                                uri: report.file_path.clone(),
                            },
                            region: SarifRegion {
                                start_line: f.line,
                                start_column: if f.column > 1 { Some(f.column) } else { None },
                            },
                        },
                    }],
                })
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(writer, &log).map_err(std::io::Error::other)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    fn render(reports: &[FileReport]) -> serde_json::Value {
        let formatter = SarifFormatter::new("lintgate", "1.0.0");
        let mut output = Vec::new();
        formatter.format(reports, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_sarif() {
        let parsed = render(&[FileReport::new(
            "src/a.js",
            vec![Finding::new(RuleId::new("semi"), "Missing semicolon.").at(3, 12)],
        )]);

        assert_eq!(parsed["version"], "2.1.0");
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "lintgate");
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["rules"][0]["id"], "semi");

        let result = &parsed["runs"][0]["results"][0];
        assert_eq!(result["ruleId"], "semi");
        assert_eq!(result["level"], "error");
        let location = &result["locations"][0]["physicalLocation"];
        assert_eq!(location["artifactLocation"]["uri"], "src/a.js");
        assert_eq!(location["region"]["startLine"], 3);
        assert_eq!(location["region"]["startColumn"], 12);
    }

    #[test]
    fn warnings_map_to_warning_level() {
        let parsed = render(&[FileReport::new(
            "a.js",
            vec![Finding::new(RuleId::new("quotes"), "q").with_severity(Severity::Warning)],
        )]);

        assert_eq!(parsed["runs"][0]["results"][0]["level"], "warning");
    }

    #[test]
    fn omits_column_one_and_fatal_rule_id() {
        let parsed = render(&[FileReport::new(
            "a.js",
            vec![Finding::fatal("Unexpected end of input", 10, 1)],
        )]);

        let result = &parsed["runs"][0]["results"][0];
        assert!(result.get("ruleId").is_none());
        assert!(result["locations"][0]["physicalLocation"]["region"]["startColumn"].is_null());
        assert!(parsed["runs"][0]["tool"]["driver"]["rules"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
