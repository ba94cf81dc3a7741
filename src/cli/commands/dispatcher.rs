//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::FilterOptions;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Filter options from the project options file with CLI flags applied
    /// on top.
    pub fn filter_options(&self, cli: &Cli) -> Result<FilterOptions> {
        let mut options = FilterOptions::discover(&self.project_root)?.unwrap_or_default();

        if let Some(config) = &cli.config {
            options.config = Some(config.clone());
        }
        if let Some(rulesdir) = &cli.rulesdir {
            options.rulesdir = Some(rulesdir.clone());
        }
        if let Some(format) = &cli.format {
            options.format = Some(format.clone());
        }
        if let Some(policy) = cli.unconfigured_rule {
            options.unconfigured_rule = policy;
        }
        options.color = !cli.no_color && console::colors_enabled();

        Ok(options)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        let options = self.filter_options(cli)?;
        tracing::debug!("Resolved filter options: {:?}", options);

        match &cli.command {
            Commands::Build(args) => {
                let cmd = super::build::BuildCommand::new(options, args.clone());
                cmd.execute()
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(options, args.clone());
                cmd.execute()
            }
            Commands::Rules(args) => {
                let cmd = super::rules::RulesCommand::new(options, args.clone());
                cmd.execute()
            }
        }
    }
}
