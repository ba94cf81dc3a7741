//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::lint::UnconfiguredRulePolicy;

/// lintgate - Lint JavaScript sources and fail builds on severe findings.
#[derive(Debug, Parser)]
#[command(name = "lintgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Lint configuration file, JSON or YAML (defaults to the bundled config)
    #[arg(short, long, global = true, env = "LINTGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of extra rule definitions
    #[arg(long, global = true, env = "LINTGATE_RULESDIR")]
    pub rulesdir: Option<PathBuf>,

    /// Output format: stylish, compact, json, sarif
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// How findings from unconfigured rules are counted
    #[arg(long, global = true, value_enum)]
    pub unconfigured_rule: Option<UnconfiguredRulePolicy>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint a source tree and write it to an output directory
    Build(BuildArgs),

    /// Lint files and directories without writing output
    Check(CheckArgs),

    /// List available rules and their configured levels
    Rules(RulesArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Source directory
    pub input: PathBuf,

    /// Output directory
    pub output: PathBuf,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Files or directories to lint
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RulesArgs {
    /// Only list rules enabled by the configuration
    #[arg(long)]
    pub enabled: bool,
}
