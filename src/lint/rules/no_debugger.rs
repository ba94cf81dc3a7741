//! `debugger` statements.

use serde_json::Value;

use crate::lint::source::SourceFile;
use crate::lint::{Finding, LintRule, RuleId};

/// Disallows `debugger` statements.
pub struct NoDebuggerRule;

impl LintRule for NoDebuggerRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-debugger")
    }

    fn description(&self) -> &str {
        "Disallow the use of debugger"
    }

    fn check(&self, source: &SourceFile, _options: &[Value]) -> Vec<Finding> {
        let tokens = source.tokens();
        tokens
            .iter()
            .enumerate()
            .filter(|(i, t)| {
                t.is_ident("debugger")
                    && !i
                        .checked_sub(1)
                        .is_some_and(|p| tokens[p].is_punct(".") || tokens[p].is_punct("?."))
            })
            .map(|(_, t)| {
                Finding::new(self.id(), "Unexpected 'debugger' statement.").at(t.line, t.column)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::check_source;

    #[test]
    fn reports_debugger_statement() {
        let findings = check_source(&NoDebuggerRule, "function f() {\n  debugger;\n}", &[]);

        assert_eq!(findings.len(), 1);
        assert_eq!((findings[0].line, findings[0].column), (2, 3));
    }

    #[test]
    fn ignores_property_and_string() {
        let text = "tools.debugger = true;\nvar s = 'debugger';";

        assert!(check_source(&NoDebuggerRule, text, &[]).is_empty());
    }
}
