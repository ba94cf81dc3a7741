//! JavaScript source linting.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Source** - A lexical scan of one file ([`SourceFile`])
//! - **Rules** - Individual checks over a scanned file ([`LintRule`] trait)
//! - **Registry** - Collection of available rules ([`RuleRegistry`])
//! - **Engine** - Runs configured rules and orders findings ([`LintEngine`])
//! - **Output** - Renders findings for people and tools ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use lintgate::config::{LintConfig, RuleSetting};
//! use lintgate::lint::{LintEngine, Linter, RuleRegistry, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! let config = LintConfig::new().with_rule("semi", RuleSetting::new(Severity::Error));
//!
//! let findings = Linter.verify("var x = 1", &config, &registry).unwrap();
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].message, "Missing semicolon.");
//! ```

pub mod engine;
pub mod finding;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod severity;
pub mod source;

pub use engine::{LintEngine, Linter};
pub use finding::Finding;
pub use output::{
    CompactFormatter, FileReport, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter,
    StylishFormatter,
};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    EolLastRule, EqeqeqRule, MaxLenRule, NoConsoleRule, NoDebuggerRule, NoTrailingSpacesRule,
    PatternRule, QuotesRule, SemiRule,
};
pub use severity::{result_severity, UnconfiguredRulePolicy};
pub use source::{ParseError, SourceFile, Token, TokenKind};
