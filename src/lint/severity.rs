//! Aggregate severity of a file's findings.

use serde::{Deserialize, Serialize};

use super::finding::Finding;
use super::rule::Severity;
use crate::config::LintConfig;
use crate::error::{GateError, Result};

/// How findings from rules absent in the configuration are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnconfiguredRulePolicy {
    /// Count the finding as an error.
    #[default]
    Severe,
    /// Do not count the finding.
    Ignore,
    /// Abort aggregation with [`GateError::UnconfiguredRule`].
    Error,
}

/// Count the findings that should fail a file.
///
/// Fatal findings always count. Other findings count when their rule is
/// configured at the error level; findings from unconfigured rules follow
/// `policy`.
///
/// # Errors
///
/// Returns `UnconfiguredRule` under [`UnconfiguredRulePolicy::Error`].
pub fn result_severity(
    findings: &[Finding],
    config: &LintConfig,
    policy: UnconfiguredRulePolicy,
) -> Result<usize> {
    let mut count = 0;

    for finding in findings {
        if finding.fatal {
            count += 1;
            continue;
        }

        let level = finding
            .rule_id
            .as_ref()
            .and_then(|id| config.severity_of(id.as_str()));

        match level {
            Some(Severity::Error) => count += 1,
            Some(_) => {}
            None => match policy {
                UnconfiguredRulePolicy::Severe => count += 1,
                UnconfiguredRulePolicy::Ignore => {}
                UnconfiguredRulePolicy::Error => {
                    return Err(GateError::UnconfiguredRule {
                        rule: finding.rule_name().to_string(),
                    })
                }
            },
        }
    }

    Ok(count)
}
