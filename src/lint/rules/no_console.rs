//! `console` calls.

use serde_json::Value;

use crate::lint::source::SourceFile;
use crate::lint::{Finding, LintRule, RuleId};

/// Disallows member access on the global `console` object.
pub struct NoConsoleRule;

impl LintRule for NoConsoleRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-console")
    }

    fn description(&self) -> &str {
        "Disallow the use of console"
    }

    fn check(&self, source: &SourceFile, _options: &[Value]) -> Vec<Finding> {
        let tokens = source.tokens();
        let mut findings = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if !token.is_ident("console") {
                continue;
            }
            let member = i.checked_sub(1).is_some_and(|p| tokens[p].is_punct("."));
            let accessed = tokens
                .get(i + 1)
                .is_some_and(|t| t.is_punct(".") || t.is_punct("["));
            if accessed && !member {
                findings.push(
                    Finding::new(self.id(), "Unexpected console statement.")
                        .at(token.line, token.column),
                );
            }
        }

        findings
    }
}
