//! Built-in lint rules.
//!
//! This module contains the rules that ship with lintgate, plus
//! [`PatternRule`], the declarative rule type loaded from a rules directory.

pub mod eol_last;
pub mod eqeqeq;
pub mod max_len;
pub mod no_console;
pub mod no_debugger;
pub mod no_trailing_spaces;
pub mod pattern;
pub mod quotes;
pub mod semi;

pub use eol_last::EolLastRule;
pub use eqeqeq::EqeqeqRule;
pub use max_len::MaxLenRule;
pub use no_console::NoConsoleRule;
pub use no_debugger::NoDebuggerRule;
pub use no_trailing_spaces::NoTrailingSpacesRule;
pub use pattern::{PatternRule, PatternTarget, RuleDefinition};
pub use quotes::QuotesRule;
pub use semi::SemiRule;

use serde_json::Value;

/// String option at `index`, if present.
pub(crate) fn option_str(options: &[Value], index: usize) -> Option<&str> {
    options.get(index).and_then(Value::as_str)
}

#[cfg(test)]
pub(crate) fn check_source(
    rule: &dyn crate::lint::LintRule,
    text: &str,
    options: &[Value],
) -> Vec<crate::lint::Finding> {
    let source = crate::lint::SourceFile::parse(text).expect("test source should scan");
    rule.check(&source, options)
}
