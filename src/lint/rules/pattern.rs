//! Declarative pattern rules.
//!
//! A rules directory holds one rule definition per file (`.json`, `.yml`
//! or `.yaml`). Each definition names a regular expression that is matched
//! line by line:
//!
//! ```yaml
//! id: no-todo-comments   # optional, defaults to the file stem
//! description: Flag TODO markers
//! pattern: "TODO"
//! match: raw             # "code" (default) skips strings and comments
//! message: "Unexpected {{match}} marker."
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{GateError, Result};
use crate::lint::source::SourceFile;
use crate::lint::{Finding, LintRule, RuleId};

/// Which text a pattern rule matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternTarget {
    /// Lines with string, regex and comment contents blanked.
    #[default]
    Code,
    /// Lines exactly as written.
    Raw,
}

/// On-disk shape of a pattern rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub pattern: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "match")]
    pub target: PatternTarget,
}

/// A rule that reports every match of a regular expression.
#[derive(Debug)]
pub struct PatternRule {
    id: RuleId,
    description: String,
    regex: Regex,
    message: String,
    target: PatternTarget,
}

impl PatternRule {
    /// Build a rule from a parsed definition. `fallback_id` is used when the
    /// definition carries no `id`.
    pub fn from_definition(
        definition: RuleDefinition,
        fallback_id: &str,
    ) -> std::result::Result<Self, regex::Error> {
        let regex = Regex::new(&definition.pattern)?;
        Ok(Self {
            id: RuleId::new(definition.id.unwrap_or_else(|| fallback_id.to_string())),
            description: definition
                .description
                .unwrap_or_else(|| format!("Disallow /{}/", definition.pattern)),
            regex,
            message: definition
                .message
                .unwrap_or_else(|| "Unexpected '{{match}}'.".to_string()),
            target: definition.target,
        })
    }

    /// Load a rule definition file.
    ///
    /// # Errors
    ///
    /// Returns `RuleDefinitionError` if the file cannot be parsed or its
    /// pattern is not a valid regular expression.
    pub fn load(path: &Path) -> Result<Self> {
        let definition_error = |message: String| GateError::RuleDefinitionError {
            path: path.to_path_buf(),
            message,
        };

        let content = fs::read_to_string(path)?;
        let definition: RuleDefinition = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| definition_error(e.to_string()))?,
            _ => serde_yaml::from_str(&content).map_err(|e| definition_error(e.to_string()))?,
        };
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        Self::from_definition(definition, &stem).map_err(|e| definition_error(e.to_string()))
    }
}

impl LintRule for PatternRule {
    fn id(&self) -> RuleId {
        self.id.clone()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, source: &SourceFile, _options: &[Value]) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut visit = |idx: usize, line: &str| {
            for m in self.regex.find_iter(line) {
                if m.as_str().trim().is_empty() {
                    continue;
                }
                let column = line[..m.start()].chars().count() + 1;
                findings.push(
                    Finding::new(self.id(), self.message.replace("{{match}}", m.as_str()))
                        .at(idx + 1, column),
                );
            }
        };

        match self.target {
            PatternTarget::Code => {
                for (idx, line) in source.code_lines().iter().enumerate() {
                    visit(idx, line.as_str());
                }
            }
            PatternTarget::Raw => {
                for (idx, line) in source.lines().iter().enumerate() {
                    visit(idx, *line);
                }
            }
        }

        findings
    }
}
