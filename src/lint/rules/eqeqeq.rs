//! Strict equality.

use serde_json::Value;

use crate::lint::rules::option_str;
use crate::lint::source::{SourceFile, Token, TokenKind};
use crate::lint::{Finding, LintRule, RuleId};

/// Requires `===` and `!==` instead of `==` and `!=`.
///
/// Options: `"allow-null"` permits loose comparison against `null`;
/// `"smart"` additionally permits comparing two literals and `typeof`
/// results.
pub struct EqeqeqRule;

fn is_literal(token: Option<&Token>) -> bool {
    token.is_some_and(|t| matches!(t.kind, TokenKind::String | TokenKind::Number))
}

fn is_null(token: Option<&Token>) -> bool {
    token.is_some_and(|t| t.is_ident("null"))
}

impl LintRule for EqeqeqRule {
    fn id(&self) -> RuleId {
        RuleId::new("eqeqeq")
    }

    fn description(&self) -> &str {
        "Require the use of === and !=="
    }

    fn check(&self, source: &SourceFile, options: &[Value]) -> Vec<Finding> {
        let mode = option_str(options, 0).unwrap_or("always");
        let tokens = source.tokens();
        let mut findings = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if !(token.is_punct("==") || token.is_punct("!=")) {
                continue;
            }
            let left = i.checked_sub(1).map(|p| &tokens[p]);
            let right = tokens.get(i + 1);

            let allowed = match mode {
                "allow-null" => is_null(left) || is_null(right),
                "smart" => {
                    let typeof_left = i
                        .checked_sub(2)
                        .is_some_and(|p| tokens[p].is_ident("typeof"));
                    is_null(left)
                        || is_null(right)
                        || (is_literal(left) && is_literal(right))
                        || typeof_left
                        || right.is_some_and(|t| t.is_ident("typeof"))
                }
                _ => false,
            };
            if allowed {
                continue;
            }

            findings.push(
                Finding::new(
                    self.id(),
                    format!(
                        "Expected '{}=' and instead saw '{}'.",
                        token.text, token.text
                    ),
                )
                .at(token.line, token.column),
            );
        }

        findings
    }
}
