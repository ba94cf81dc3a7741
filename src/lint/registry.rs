//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them. A registry
//! is an owned value: each filter builds its own, so loading a rules
//! directory never affects another filter.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::rule::{LintRule, RuleId};
use super::rules::{
    EolLastRule, EqeqeqRule, MaxLenRule, NoConsoleRule, NoDebuggerRule, NoTrailingSpacesRule,
    PatternRule, QuotesRule, SemiRule,
};
use crate::error::{GateError, Result};

/// File extensions recognised as rule definitions in a rules directory.
const DEFINITION_EXTENSIONS: &[&str] = &["json", "yml", "yaml"];

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SemiRule));
        registry.register(Box::new(QuotesRule));
        registry.register(Box::new(EqeqeqRule));
        registry.register(Box::new(NoDebuggerRule));
        registry.register(Box::new(NoConsoleRule));
        registry.register(Box::new(NoTrailingSpacesRule));
        registry.register(Box::new(EolLastRule));
        registry.register(Box::new(MaxLenRule));
        registry
    }

    /// Register a lint rule, replacing any rule with the same ID.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Load every rule definition file in `dir`.
    ///
    /// Files are read in name order; files without a definition extension
    /// are skipped. Loading the same directory again replaces the rules it
    /// defined, so repeated loads are harmless.
    ///
    /// # Errors
    ///
    /// Returns `RuleDefinitionError` if `dir` is not a directory or any
    /// definition file is invalid.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Err(GateError::RuleDefinitionError {
                path: dir.to_path_buf(),
                message: "rules directory does not exist".to_string(),
            });
        }

        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let is_definition = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| DEFINITION_EXTENSIONS.contains(&e));
            if !is_definition {
                tracing::debug!("Skipping non-rule file {}", path.display());
                continue;
            }

            let rule = PatternRule::load(&path)?;
            tracing::debug!("Loaded rule '{}' from {}", rule.id(), path.display());
            self.register(Box::new(rule));
            loaded += 1;
        }

        tracing::info!("Loaded {} rule(s) from {}", loaded, dir.display());
        Ok(loaded)
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Check whether a rule is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(&RuleId::new(id))
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// All rules sorted by ID.
    pub fn sorted(&self) -> Vec<&dyn LintRule> {
        let mut rules: Vec<_> = self.iter().collect();
        rules.sort_by_key(|r| r.id());
        rules
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Finding, SourceFile};
    use serde_json::Value;
    use tempfile::TempDir;

    struct MockRule {
        id: RuleId,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn check(&self, _source: &SourceFile, _options: &[Value]) -> Vec<Finding> {
            vec![]
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("mock"),
        }));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
        assert!(registry.contains("mock"));
    }

    #[test]
    fn registering_same_id_replaces() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule1"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule1"),
        }));

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_with_builtins_has_rules() {
        let registry = RuleRegistry::with_builtins();

        assert_eq!(registry.len(), 8);
        for id in [
            "semi",
            "quotes",
            "eqeqeq",
            "no-debugger",
            "no-console",
            "no-trailing-spaces",
            "eol-last",
            "max-len",
        ] {
            assert!(registry.contains(id), "missing builtin {}", id);
        }
    }

    #[test]
    fn sorted_orders_by_id() {
        let registry = RuleRegistry::with_builtins();
        let ids: Vec<_> = registry.sorted().iter().map(|r| r.id().0).collect();

        assert_eq!(ids.first().map(String::as_str), Some("eol-last"));
        assert_eq!(ids.last().map(String::as_str), Some("semi"));
    }

    #[test]
    fn load_dir_registers_definitions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("no-alert.yml"), "pattern: 'alert\\('\n").unwrap();
        fs::write(temp.path().join("README.md"), "not a rule").unwrap();

        let mut registry = RuleRegistry::with_builtins();
        let loaded = registry.load_dir(temp.path()).unwrap();

        assert_eq!(loaded, 1);
        assert!(registry.contains("no-alert"));
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn load_dir_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("no-alert.yml"), "pattern: 'alert'\n").unwrap();

        let mut registry = RuleRegistry::new();
        registry.load_dir(temp.path()).unwrap();
        registry.load_dir(temp.path()).unwrap();

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn load_dir_rejects_missing_directory() {
        let temp = TempDir::new().unwrap();
        let mut registry = RuleRegistry::new();

        let err = registry.load_dir(&temp.path().join("nope")).unwrap_err();

        assert!(matches!(err, GateError::RuleDefinitionError { .. }));
    }
}
