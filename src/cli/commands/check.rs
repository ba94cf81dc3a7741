//! Check command implementation.
//!
//! `lintgate check <PATH>...` lints files and directories in place. Every
//! file is checked before the command reports failure.

use crate::cli::args::CheckArgs;
use crate::config::FilterOptions;
use crate::error::{GateError, Result};
use crate::filter::ValidationFilter;
use crate::pipeline::{FileList, FilterTree};

use super::dispatcher::{Command, CommandResult};
use super::print_status;

/// The check command implementation.
pub struct CheckCommand {
    options: FilterOptions,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(options: FilterOptions, args: CheckArgs) -> Self {
        Self { options, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let color = self.options.color;
        let filter = ValidationFilter::new(self.options.clone())?;
        let tree = FilterTree::new(FileList::new(self.args.paths.clone()), filter);

        match tree.check() {
            Ok(summary) => {
                print_status(
                    true,
                    &format!("{} file(s) passed", summary.processed),
                    color,
                )?;
                Ok(CommandResult::success())
            }
            Err(GateError::SevereRuleErrors) => {
                print_status(false, &GateError::SevereRuleErrors.to_string(), color)?;
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
