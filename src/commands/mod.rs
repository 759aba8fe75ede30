//! Command implementations for nocommit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command returns the process exit code on success.

mod check;
mod install;
mod patterns;


pub use check::cmd_check;
pub use install::cmd_install;
pub use patterns::cmd_patterns;

use crate::cli::Command;
use crate::error::{NocommitError, Result};
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Install(args) => cmd_install(args),
        Command::Patterns(args) => cmd_patterns(args),
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        NocommitError::User(format!("failed to get current working directory: {}", e))
    })
}
