//! nocommit: git pre-commit hook that blocks commits adding forbidden patterns.
//!
//! This is the main entry point for the `nocommit` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and maps the outcome to
//! the exit status git reads from the hook.

mod cli;
mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod hooks;
mod logging;
pub mod rules;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    match commands::dispatch(cli.command_or_default()) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
