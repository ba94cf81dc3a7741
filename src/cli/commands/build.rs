//! Build command implementation.
//!
//! `lintgate build <INPUT> <OUTPUT>` lints every `.js` file under the input
//! directory and writes the tree to the output directory. The build stops
//! at the first file with severe findings.

use crate::cli::args::BuildArgs;
use crate::config::FilterOptions;
use crate::error::{GateError, Result};
use crate::filter::ValidationFilter;
use crate::pipeline::{DirectoryTree, FilterTree};

use super::dispatcher::{Command, CommandResult};
use super::print_status;

/// The build command implementation.
pub struct BuildCommand {
    options: FilterOptions,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(options: FilterOptions, args: BuildArgs) -> Self {
        Self { options, args }
    }
}

impl Command for BuildCommand {
    fn execute(&self) -> Result<CommandResult> {
        let color = self.options.color;
        let filter = ValidationFilter::new(self.options.clone())?;
        let tree = FilterTree::new(DirectoryTree::new(&self.args.input), filter);

        match tree.build(&self.args.output) {
            Ok(summary) => {
                print_status(
                    true,
                    &format!(
                        "Built {} ({} linted, {} copied)",
                        self.args.output.display(),
                        summary.processed,
                        summary.copied
                    ),
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(input: &TempDir, output: &TempDir, config: &str) -> Result<CommandResult> {
        let config_path = input.path().join("lint.json");
        fs::write(&config_path, config).unwrap();
        let options = FilterOptions::new().with_config(config_path).with_format("compact");
        let args = BuildArgs {
            input: input.path().join("src"),
            output: output.path().to_path_buf(),
        };
        BuildCommand::new(options, args).execute()
    }

    #[test]
    fn clean_tree_builds() {
        let input = TempDir::new().unwrap();
        fs::create_dir(input.path().join("src")).unwrap();
        fs::write(input.path().join("src/app.js"), "run();\n").unwrap();

        let output = TempDir::new().unwrap();
        let result = run(&input, &output, r#"{"semi": 2}"#).unwrap();

        assert!(result.success);
        assert_eq!(
            fs::read_to_string(output.path().join("app.js")).unwrap(),
            "run();\n"
        );
    }

    #[test]
    fn severe_findings_exit_one() {
        let input = TempDir::new().unwrap();
        fs::create_dir(input.path().join("src")).unwrap();
        fs::write(input.path().join("src/app.js"), "run()\n").unwrap();

        let output = TempDir::new().unwrap();
        let result = run(&input, &output, r#"{"semi": 2}"#).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn configuration_errors_propagate() {
        let input = TempDir::new().unwrap();
        fs::create_dir(input.path().join("src")).unwrap();
        fs::write(input.path().join("src/app.js"), "run();\n").unwrap();

        let output = TempDir::new().unwrap();
        let err = run(&input, &output, r#"{"semi": 5}"#).unwrap_err();

        assert!(matches!(err, GateError::InvalidSeverity { .. }));
    }
}
