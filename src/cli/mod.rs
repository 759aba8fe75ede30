//! CLI argument parsing for nocommit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Git pre-commit hook that blocks commits adding forbidden patterns.
///
/// Scans only the lines a commit adds. Run without a subcommand (as git
/// does when invoking the hook) to check the staged change set.
#[derive(Parser, Debug)]
#[command(name = "nocommit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable diagnostic logging.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; bare invocation means `check`.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Check(CheckArgs::default()))
    }
}

/// Available commands for nocommit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the staged change set for forbidden patterns.
    ///
    /// Exits 0 when the commit may proceed and 1 when it must be blocked
    /// (including when the staged diff cannot be read).
    Check(CheckArgs),

    /// Install nocommit as this repository's pre-commit hook.
    Install(InstallArgs),

    /// Print the effective forbidden patterns, one per line.
    Patterns(PatternsArgs),
}

/// Output format for `check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report (only printed when blocked).
    #[default]
    Text,
    /// `{"blocked": bool, "violations": [...]}`.
    Json,
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Report every offending file instead of stopping at the first.
    #[arg(long)]
    pub all: bool,

    /// Config file (default: .nocommit.yaml at the repository root).
    #[arg(long, env = "NOCOMMIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Scan a saved unified diff instead of the staged change set.
    #[arg(long, value_name = "PATH")]
    pub diff_file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `install` command.
#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Replace an existing pre-commit hook.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `patterns` command.
#[derive(Args, Debug, Default)]
pub struct PatternsArgs {
    /// Config file (default: .nocommit.yaml at the repository root).
    #[arg(long, env = "NOCOMMIT_CONFIG")]
    pub config: Option<PathBuf>,
}
