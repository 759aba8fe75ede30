//! The `install` command: register the pre-commit hook.

use crate::cli::InstallArgs;
use crate::error::{NocommitError, Result};
use crate::exit_codes;
use crate::git;
use crate::hooks::{InstallOutcome, install_pre_commit};

use super::current_dir;

/// Install nocommit as the repository's pre-commit hook.
pub fn cmd_install(args: InstallArgs) -> Result<i32> {
    let cwd = current_dir()?;
    // Fail early with a clean message outside a repository.
    git::repo_root(&cwd)?;
    let hooks_dir = git::hooks_dir(&cwd)?;
    let program = std::env::current_exe().map_err(|e| {
        NocommitError::Io(format!("failed to locate the nocommit executable: {}", e))
    })?;

    match install_pre_commit(&hooks_dir, &program, args.force)? {
        InstallOutcome::Installed(path) => {
            println!("Installed pre-commit hook: {}", path.display());
        }
        InstallOutcome::Replaced(path) => {
            println!("Replaced existing pre-commit hook: {}", path.display());
        }
        InstallOutcome::AlreadyInstalled(path) => {
            println!("Pre-commit hook already installed: {}", path.display());
        }
    }

    Ok(exit_codes::SUCCESS)
}
