//! Pre-commit hook installation.
//!
//! The hook script is written to a temporary file in the hooks directory,
//! made executable, then renamed over the target, so git never sees a
//! partially written or non-executable hook.

use crate::error::{NocommitError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name git runs before recording a commit.
pub const PRE_COMMIT: &str = "pre-commit";

/// Script installed as the pre-commit hook.
///
/// `program` is written as an absolute path: git clients often run hooks
/// with a reduced PATH.
pub fn hook_script(program: &Path) -> String {
    format!(
        "#!/bin/sh\n\
         # Installed by nocommit: blocks commits that add forbidden patterns.\n\
         # Bypass with: git commit --no-verify\n\
         exec {} check\n",
        shell_quote(&program.to_string_lossy())
    )
}

/// Single-quote a word for /bin/sh.
fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// What [`install_pre_commit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No hook existed; ours was written.
    Installed(PathBuf),
    /// A different hook existed and was overwritten (`force`).
    Replaced(PathBuf),
    /// Our hook was already in place.
    AlreadyInstalled(PathBuf),
}

/// Install a pre-commit hook running `program` into `hooks_dir`.
///
/// An existing hook with different content is only replaced when `force`
/// is set.
///
/// # Returns
///
/// * `Ok(InstallOutcome)` - What happened to the hook file
/// * `Err(NocommitError::User)` - A foreign hook exists and `force` is false
/// * `Err(NocommitError::Io)` - The hook could not be written
pub fn install_pre_commit(
    hooks_dir: &Path,
    program: &Path,
    force: bool,
) -> Result<InstallOutcome> {
    let target = hooks_dir.join(PRE_COMMIT);
    let script = hook_script(program);

    let existed = match fs::read(&target) {
        Ok(current) if current == script.as_bytes() => {
            debug!(path = %target.display(), "hook already installed");
            return Ok(InstallOutcome::AlreadyInstalled(target));
        }
        Ok(_) if !force => {
            return Err(NocommitError::User(format!(
                "a pre-commit hook already exists at '{}'. Re-run with --force to replace it.",
                target.display()
            )));
        }
        Ok(_) => true,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => {
            return Err(NocommitError::Io(format!(
                "failed to read existing hook '{}': {}",
                target.display(),
                e
            )));
        }
    };

    fs::create_dir_all(hooks_dir).map_err(|e| {
        NocommitError::Io(format!(
            "failed to create hooks directory '{}': {}",
            hooks_dir.display(),
            e
        ))
    })?;

    let temp_path = hooks_dir.join(format!(".{}.tmp", PRE_COMMIT));
    write_executable(&temp_path, script.as_bytes())?;

    fs::rename(&temp_path, &target).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        NocommitError::Io(format!(
            "failed to move hook into place at '{}': {}",
            target.display(),
            e
        ))
    })?;

    if existed {
        Ok(InstallOutcome::Replaced(target))
    } else {
        Ok(InstallOutcome::Installed(target))
    }
}

/// Write content to a file, sync it and mark it executable.
fn write_executable(path: &Path, content: &[u8]) -> Result<()> {
    let cleanup = |msg: String| {
        let _ = fs::remove_file(path);
        NocommitError::Io(msg)
    };

    let mut file = File::create(path).map_err(|e| {
        NocommitError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .map_err(|e| cleanup(format!("failed to write to temporary file: {}", e)))?;
    file.sync_all()
        .map_err(|e| cleanup(format!("failed to sync temporary file to disk: {}", e)))?;

    set_executable(path).map_err(|e| cleanup(format!("failed to mark hook executable: {}", e)))
}

#[cfg(unix)]
fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> std::io::Result<()> {
    // Git for Windows runs hooks through sh regardless of permission bits.
    Ok(())
}
