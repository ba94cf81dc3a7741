//! Quote style for string literals.

use serde_json::Value;

use crate::lint::rules::option_str;
use crate::lint::source::{SourceFile, TokenKind};
use crate::lint::{Finding, LintRule, RuleId};

/// Enforces a single quote character for string literals.
///
/// Options: `"double"` (default) or `"single"`, optionally followed by
/// `"avoid-escape"` to allow the other quote when the string contains the
/// preferred one.
pub struct QuotesRule;

impl LintRule for QuotesRule {
    fn id(&self) -> RuleId {
        RuleId::new("quotes")
    }

    fn description(&self) -> &str {
        "Enforce the consistent use of either double or single quotes"
    }

    fn check(&self, source: &SourceFile, options: &[Value]) -> Vec<Finding> {
        let (quote, name) = match option_str(options, 0) {
            Some("single") => ('\'', "singlequote"),
            None | Some("double") => ('"', "doublequote"),
            Some(other) => {
                tracing::warn!("quotes: unknown style '{}', using \"double\"", other);
                ('"', "doublequote")
            }
        };
        let avoid_escape = match options.get(1) {
            Some(Value::String(s)) => s == "avoid-escape",
            Some(Value::Object(map)) => map
                .get("avoidEscape")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            _ => false,
        };

        source
            .tokens()
            .iter()
            .filter(|t| t.kind == TokenKind::String && !t.text.starts_with(quote))
            .filter(|t| {
                let inner = &t.text[1..t.text.len() - 1];
                !(avoid_escape && inner.contains(quote))
            })
            .map(|t| {
                Finding::new(self.id(), format!("Strings must use {}.", name)).at(t.line, t.column)
            })
            .collect()
    }
}
