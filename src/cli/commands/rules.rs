//! Rules command implementation.
//!
//! `lintgate rules` lists every rule the filter knows about, including
//! pattern rules from the rules directory, with the level the active
//! configuration assigns to it.

use std::io::Write;

use crate::cli::args::RulesArgs;
use crate::config::FilterOptions;
use crate::error::Result;
use crate::filter::ValidationFilter;
use crate::lint::Severity;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    options: FilterOptions,
    args: RulesArgs,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(options: FilterOptions, args: RulesArgs) -> Self {
        Self { options, args }
    }

    /// Render the rule table.
    pub fn render(&self, writer: &mut dyn Write) -> Result<()> {
        let filter = ValidationFilter::new(self.options.clone())?;
        let config = filter.config_source().load()?;

        let rows: Vec<_> = filter
            .registry()
            .sorted()
            .into_iter()
            .map(|rule| {
                let id = rule.id();
                let level = config.severity_of(id.as_str());
                (id, level, rule.description().to_string())
            })
            .filter(|(_, level, _)| !self.args.enabled || level.is_some_and(|l| l != Severity::Off))
            .collect();

        let width = rows.iter().map(|(id, _, _)| id.as_str().len()).max().unwrap_or(0);
        for (id, level, description) in &rows {
            let level = level.map_or("-".to_string(), |l| l.to_string());
            writeln!(writer, "{:width$}  {:7}  {}", id.as_str(), level, description)?;
        }
        Ok(())
    }
}

impl Command for RulesCommand {
    fn execute(&self) -> Result<CommandResult> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.render(&mut lock)?;
        Ok(CommandResult::success())
    }
}
