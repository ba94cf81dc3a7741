//! Final newline.

use serde_json::Value;

use crate::lint::source::SourceFile;
use crate::lint::{Finding, LintRule, RuleId};

/// Requires a newline at the end of non-empty files.
pub struct EolLastRule;

impl LintRule for EolLastRule {
    fn id(&self) -> RuleId {
        RuleId::new("eol-last")
    }

    fn description(&self) -> &str {
        "Require newline at the end of files"
    }

    fn check(&self, source: &SourceFile, _options: &[Value]) -> Vec<Finding> {
        let text = source.text();
        if text.is_empty() || text.ends_with('\n') {
            return vec![];
        }

        let lines = source.lines();
        let last = lines.last().map(|l| l.chars().count()).unwrap_or(0);
        vec![
            Finding::new(self.id(), "Newline required at end of file but not found.")
                .at(lines.len(), last + 1),
        ]
    }
}
