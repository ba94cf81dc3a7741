//! Configuration loading and parsing for lintgate.
//!
//! This module handles:
//! - The rule configuration schema in [`schema`]
//! - Loading and resolving rule configurations in [`loader`]
//! - Filter options and the `.lintgate.yml` options file in [`options`]
//!
//! # Example
//!
//! ```
//! use lintgate::config::{ConfigSource, FilterOptions};
//! use lintgate::lint::{RuleRegistry, Severity};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("lint.yml");
//! fs::write(&path, "rules:\n  semi: error\n  quotes: [warn, single]\n").unwrap();
//!
//! let options = FilterOptions::new().with_config(&path);
//! let config = options
//!     .config_source()
//!     .resolve(&RuleRegistry::with_builtins())
//!     .unwrap();
//! assert_eq!(config.severity_of("quotes"), Some(Severity::Warning));
//! ```

pub mod loader;
pub mod options;
pub mod schema;

pub use loader::{
    check_rules, default_config, load_config_file, parse_config, ConfigSource, DEFAULT_CONFIG,
};
pub use options::{FilterOptions, OPTIONS_FILE};
pub use schema::{LintConfig, RuleSetting};
