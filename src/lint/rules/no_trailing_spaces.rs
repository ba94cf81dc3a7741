//! Trailing whitespace.

use serde_json::Value;

use crate::lint::source::SourceFile;
use crate::lint::{Finding, LintRule, RuleId};

/// Disallows whitespace at the end of lines.
///
/// Option: `{ "skipBlankLines": true }` ignores lines made only of
/// whitespace.
pub struct NoTrailingSpacesRule;

impl LintRule for NoTrailingSpacesRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-trailing-spaces")
    }

    fn description(&self) -> &str {
        "Disallow trailing whitespace at the end of lines"
    }

    fn check(&self, source: &SourceFile, options: &[Value]) -> Vec<Finding> {
        let skip_blank = options
            .first()
            .and_then(|o| o.get("skipBlankLines"))
            .and_then(Value::as_bool)
            .unwrap_or(false);

        source
            .lines()
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let trimmed = line.trim_end();
                if trimmed.len() == line.len() || (skip_blank && trimmed.is_empty()) {
                    return None;
                }
                Some(
                    Finding::new(self.id(), "Trailing spaces not allowed.")
                        .at(idx + 1, trimmed.chars().count() + 1),
                )
            })
            .collect()
    }
}
