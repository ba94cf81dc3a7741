//! Line length.

use serde_json::Value;

use crate::lint::source::SourceFile;
use crate::lint::{Finding, LintRule, RuleId};

const DEFAULT_MAX: usize = 80;
const DEFAULT_TAB_WIDTH: usize = 4;

/// Limits the length of each line.
///
/// Options: `[max, tabWidth]` or `{ "code": max, "tabWidth": n }`.
/// Tabs count as `tabWidth` columns.
pub struct MaxLenRule;

impl MaxLenRule {
    fn limits(options: &[Value]) -> (usize, usize) {
        let as_usize = |v: Option<&Value>| {
            let n = v.and_then(Value::as_u64)?;
            usize::try_from(n)
                .map_err(|_| {
                    tracing::warn!("max-len: option {} is out of range, using the default", n)
                })
                .ok()
        };
        match options.first() {
            Some(Value::Object(map)) => (
                as_usize(map.get("code")).unwrap_or(DEFAULT_MAX),
                as_usize(map.get("tabWidth")).unwrap_or(DEFAULT_TAB_WIDTH),
            ),
            first => (
                as_usize(first).unwrap_or(DEFAULT_MAX),
                as_usize(options.get(1)).unwrap_or(DEFAULT_TAB_WIDTH),
            ),
        }
    }
}

impl LintRule for MaxLenRule {
    fn id(&self) -> RuleId {
        RuleId::new("max-len")
    }

    fn description(&self) -> &str {
        "Enforce a maximum line length"
    }

    fn check(&self, source: &SourceFile, options: &[Value]) -> Vec<Finding> {
        let (max, tab_width) = Self::limits(options);

        source
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| {
                let width = line
                    .chars()
                    .map(|c| if c == '\t' { tab_width } else { 1 })
                    .fold(0usize, usize::saturating_add);
                width > max
            })
            .map(|(idx, _)| {
                Finding::new(
                    self.id(),
                    format!(
                        "Line {} exceeds the maximum line length of {}.",
                        idx + 1,
                        max
                    ),
                )
                .at(idx + 1, 1)
            })
            .collect()
    }
}
