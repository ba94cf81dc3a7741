//! Command implementations.
//!
//! Each subcommand has its own module implementing the [`Command`] trait.

pub mod build;
pub mod check;
pub mod dispatcher;
pub mod rules;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use console::{Style, Term};

use crate::error::Result;

/// Print a one-line status message to stderr, keeping stdout for
/// formatter output.
fn print_status(success: bool, message: &str, color: bool) -> Result<()> {
    let (mark, style) = if success {
        ("\u{2713}", Style::new().green())
    } else {
        ("\u{2717}", Style::new().red().bold())
    };
    let mark = if color {
        style.force_styling(true).apply_to(mark).to_string()
    } else {
        mark.to_string()
    };

    Term::stderr().write_line(&format!("{} {}", mark, message))?;
    Ok(())
}
