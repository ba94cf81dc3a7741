//! The lint engine.
//!
//! [`LintEngine`] is the seam between a filter and the code that actually
//! inspects source text. [`Linter`] is the built-in implementation: it scans
//! the file once and hands the result to every enabled rule.

use super::finding::Finding;
use super::registry::RuleRegistry;
use super::rule::RuleId;
use super::source::SourceFile;
use crate::config::LintConfig;
use crate::error::Result;

/// Produces findings for a piece of source text.
pub trait LintEngine: Send + Sync {
    /// Verify `content` against `config`, returning findings ordered by
    /// position.
    fn verify(&self, content: &str, config: &LintConfig, registry: &RuleRegistry)
        -> Result<Vec<Finding>>;
}

/// Default engine backed by the lexical scanner and registered rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct Linter;

impl Linter {
    /// Create a new linter.
    pub fn new() -> Self {
        Self
    }
}

impl LintEngine for Linter {
    fn verify(
        &self,
        content: &str,
        config: &LintConfig,
        registry: &RuleRegistry,
    ) -> Result<Vec<Finding>> {
        let source = match SourceFile::parse(content) {
            Ok(source) => source,
            Err(e) => {
                tracing::debug!("Source failed to scan: {}", e);
                return Ok(vec![Finding::fatal(e.message, e.line, e.column)]);
            }
        };

        let mut findings = Vec::new();
        for (id, setting) in config.enabled() {
            let Some(rule) = registry.get(&RuleId::new(id)) else {
                tracing::warn!("Skipping rule '{}': no definition registered", id);
                continue;
            };

            findings.extend(
                rule.check(&source, &setting.options)
                    .into_iter()
                    .map(|f| f.with_severity(setting.severity)),
            );
        }

        findings.sort_by_key(|f| (f.line, f.column));
        Ok(findings)
    }
}
