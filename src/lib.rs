//! lintgate - A lint gate for JavaScript build pipelines.
//!
//! lintgate runs each JavaScript file of a source tree through a set of
//! configurable lint rules. Content passes through unchanged; findings are
//! printed through a formatter, and a file with error-level or fatal
//! findings fails the build with `severe rule errors`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Rule configuration and filter options
//! - [`error`] - Error types and result aliases
//! - [`filter`] - The [`Filter`](filter::Filter) trait and the validation filter
//! - [`lint`] - Source scanning, rules, engine, and formatters
//! - [`pipeline`] - Source trees and the filter tree driver
//!
//! # Example
//!
//! ```
//! use lintgate::config::FilterOptions;
//! use lintgate::filter::{Filter, SharedBuffer, ValidationFilter};
//! use lintgate::GateError;
//!
//! let output = SharedBuffer::new();
//! let filter = ValidationFilter::new(FilterOptions::new().with_format("compact"))
//!     .unwrap()
//!     .with_writer(output.clone());
//!
//! let err = filter.process_string("debugger;\n", "app.js").unwrap_err();
//! assert!(matches!(err, GateError::SevereRuleErrors));
//! assert!(output.contents().contains("Unexpected 'debugger' statement. (no-debugger)"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod lint;
pub mod pipeline;

pub use error::{GateError, Result};
