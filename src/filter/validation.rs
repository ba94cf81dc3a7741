//! The lint-gate filter.

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::anyhow;

use super::Filter;
use crate::config::{ConfigSource, FilterOptions};
use crate::error::{GateError, Result};
use crate::lint::{
    result_severity, FileReport, LintEngine, LintFormatter, Linter, OutputFormat, RuleRegistry,
    UnconfiguredRulePolicy,
};

/// Validates JavaScript files and fails the build on severe findings.
///
/// Content is never modified. For every file with findings the formatted
/// report is written to the output sink (stdout unless replaced with
/// [`ValidationFilter::with_writer`]). If any finding is fatal or comes from
/// a rule configured at the error level, processing fails with
/// [`GateError::SevereRuleErrors`].
///
/// # Example
///
/// ```
/// use lintgate::config::FilterOptions;
/// use lintgate::filter::{Filter, SharedBuffer, ValidationFilter};
///
/// let output = SharedBuffer::new();
/// let filter = ValidationFilter::new(FilterOptions::new())
///     .unwrap()
///     .with_writer(output.clone());
///
/// let content = "var x = \"ok\";\n";
/// assert_eq!(filter.process_string(content, "ok.js").unwrap(), content);
/// assert!(output.contents().is_empty());
///
/// let err = filter.process_string("var x = 1\n", "bad.js").unwrap_err();
/// assert_eq!(err.to_string(), "severe rule errors");
/// assert!(output.contents().contains("Missing semicolon."));
/// ```
pub struct ValidationFilter {
    config: ConfigSource,
    registry: RuleRegistry,
    formatter: Box<dyn LintFormatter>,
    policy: UnconfiguredRulePolicy,
    engine: Box<dyn LintEngine>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ValidationFilter {
    /// Build a filter from options.
    ///
    /// The rules directory, if any, is loaded into the filter's registry
    /// here, once. The lint configuration itself is read on every call to
    /// [`Filter::process_string`].
    ///
    /// # Errors
    ///
    /// Returns `UnknownFormatter` for an unknown format identifier and
    /// `RuleDefinitionError` for a bad rules directory.
    pub fn new(options: FilterOptions) -> Result<Self> {
        let format: OutputFormat = options.format_name().parse()?;

        let mut registry = RuleRegistry::with_builtins();
        if let Some(dir) = &options.rulesdir {
            registry.load_dir(dir)?;
        }

        tracing::debug!(
            "Validation filter using config {} and {} formatter",
            options.config_source(),
            format
        );

        Ok(Self {
            config: options.config_source(),
            registry,
            formatter: format.formatter(options.color),
            policy: options.unconfigured_rule,
            engine: Box::new(Linter::new()),
            sink: Mutex::new(Box::new(io::stdout())),
        })
    }

    /// Send formatter output to `writer` instead of stdout.
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sink = Mutex::new(Box::new(writer));
        self
    }

    /// Replace the lint engine.
    pub fn with_engine(mut self, engine: impl LintEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Rules available to this filter.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Where the lint configuration is read from.
    pub fn config_source(&self) -> &ConfigSource {
        &self.config
    }

    fn write_reports(&self, reports: &[FileReport]) -> Result<()> {
        let mut text = Vec::new();
        self.formatter.format(reports, &mut text)?;
        text.push(b'\n');

        let mut sink = self
            .sink
            .lock()
            .map_err(|_| GateError::Other(anyhow!("output sink lock poisoned")))?;
        sink.write_all(&text)?;
        sink.flush()?;
        Ok(())
    }
}

impl TryFrom<FilterOptions> for ValidationFilter {
    type Error = GateError;

    fn try_from(options: FilterOptions) -> Result<Self> {
        Self::new(options)
    }
}

impl Filter for ValidationFilter {
    fn extensions(&self) -> &[&str] {
        &["js"]
    }

    fn target_extension(&self) -> &str {
        "js"
    }

    fn process_string(&self, content: &str, relative_path: &str) -> Result<String> {
        tracing::debug!("Linting {}", relative_path);

        let config = self.config.resolve(&self.registry)?;
        let findings = self.engine.verify(content, &config, &self.registry)?;
        if findings.is_empty() {
            return Ok(content.to_string());
        }

        let reports = [FileReport::new(relative_path, findings)];
        self.write_reports(&reports)?;

        let severity = result_severity(&reports[0].findings, &config, self.policy)?;
        if severity > 0 {
            tracing::warn!("{}: {} severe finding(s)", relative_path, severity);
            return Err(GateError::SevereRuleErrors);
        }

        Ok(content.to_string())
    }
}
