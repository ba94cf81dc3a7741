//! Lint configuration schema.
//!
//! A configuration maps rule identifiers to severity descriptors. A
//! descriptor is either a bare level or a sequence whose first element is
//! the level and whose remaining elements are rule options:
//!
//! ```json
//! {
//!   "rules": {
//!     "semi": 2,
//!     "quotes": ["warn", "single", "avoid-escape"],
//!     "max-len": [0, 120]
//!   }
//! }
//! ```
//!
//! Levels may be numeric (`0`, `1`, `2`) or textual (`off`, `warn`,
//! `error`).

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{GateError, Result};
use crate::lint::Severity;

/// The resolved level and options for one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSetting {
    pub severity: Severity,
    pub options: Vec<Value>,
}

impl RuleSetting {
    /// Create a setting with no options.
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    /// Parse a severity descriptor for `rule`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeverity` when the level is missing or not one of
    /// off/warn/error.
    pub fn from_descriptor(rule: &str, descriptor: &Value) -> Result<Self> {
        let invalid = || GateError::InvalidSeverity {
            rule: rule.to_string(),
            value: descriptor.to_string(),
        };

        let (level, options) = match descriptor {
            Value::Array(items) => {
                let (first, rest) = items.split_first().ok_or_else(invalid)?;
                (first, rest.to_vec())
            }
            other => (other, Vec::new()),
        };

        let severity = match level {
            Value::Number(n) => n.as_u64().and_then(Severity::from_level),
            Value::String(s) => Severity::from_name(s),
            _ => None,
        }
        .ok_or_else(invalid)?;

        Ok(Self { severity, options })
    }
}

/// Rule configuration for one lint run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintConfig {
    rules: BTreeMap<String, RuleSetting>,
}

impl LintConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a rule setting.
    pub fn with_rule(mut self, id: impl Into<String>, setting: RuleSetting) -> Self {
        self.rules.insert(id.into(), setting);
        self
    }

    /// Build a configuration from a parsed document.
    ///
    /// When the document has an object-valued `rules` key that object is the
    /// rule map and other keys are ignored. Otherwise the whole document is
    /// treated as the rule map.
    pub fn from_document(document: Map<String, Value>) -> Result<Self> {
        let rules = match document.get("rules") {
            Some(Value::Object(rules)) => rules.clone(),
            _ => document,
        };

        let mut config = Self::new();
        for (id, descriptor) in &rules {
            let setting = RuleSetting::from_descriptor(id, descriptor)?;
            config.rules.insert(id.clone(), setting);
        }
        Ok(config)
    }

    /// Setting for a rule, if configured.
    pub fn rule(&self, id: &str) -> Option<&RuleSetting> {
        self.rules.get(id)
    }

    /// Configured severity for a rule, if configured.
    pub fn severity_of(&self, id: &str) -> Option<Severity> {
        self.rule(id).map(|s| s.severity)
    }

    /// All configured rules in identifier order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.rules.iter().map(|(id, s)| (id.as_str(), s))
    }

    /// Rules whose severity is not `off`.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.rules().filter(|(_, s)| s.severity != Severity::Off)
    }

    /// Number of configured rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
