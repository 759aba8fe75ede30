//! Git command runner for nocommit.
//!
//! Provides a wrapper around git commands with captured stdout/stderr
//! and structured error handling. This is the only place the hook talks
//! to git; everything downstream works on plain diff text.

use crate::error::{NocommitError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Arguments for `git diff` over the staged change set.
///
/// The explicit flags pin the output format regardless of user config:
/// no colour escapes, no external diff drivers or textconv filters (the
/// matcher must see the staged bytes), `a/`/`b/` prefixes even with
/// `diff.noprefix`, and unquoted UTF-8 paths.
const STAGED_DIFF_ARGS: &[&str] = &[
    "-c",
    "core.quotePath=false",
    "diff",
    "--cached",
    "--no-color",
    "--no-ext-diff",
    "--no-textconv",
    "--src-prefix=a/",
    "--dst-prefix=b/",
    "--",
];

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output, trim_stdout: bool) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout);
        Self {
            stdout: if trim_stdout {
                stdout.trim().to_string()
            } else {
                stdout.into_owned()
            },
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// Stdout is trimmed, which suits plumbing commands that print a single value.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(NocommitError::Git)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    run(cwd.as_ref(), args, true)
}

/// Like [`run_git`] but returns stdout byte-for-byte.
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    run(cwd.as_ref(), args, false)
}

fn run(cwd: &Path, args: &[&str], trim_stdout: bool) -> Result<GitOutput> {
    let subcommand = display_subcommand(args);
    debug!(cwd = %cwd.display(), args = ?args, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| NocommitError::Git(format!("failed to execute git {}: {}", subcommand, e)))?;

    let git_output = GitOutput::from_output(&output, trim_stdout);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(NocommitError::Git(format!(
            "git {} failed (exit code {}): {}",
            subcommand, exit_code, error_msg
        )))
    }
}

/// First argument that names the git subcommand, skipping `-c key=value` pairs.
fn display_subcommand<'a>(args: &[&'a str]) -> &'a str {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if *arg == "-c" {
            iter.next();
            continue;
        }
        return *arg;
    }
    ""
}

/// Get the textual diff of the staged change set.
///
/// Returns git's output verbatim, headers included. An empty string means
/// nothing is staged.
///
/// # Returns
///
/// * `Ok(String)` - Raw unified diff of the index against HEAD
/// * `Err(NocommitError::Git)` - git could not run or reported an error
pub fn staged_diff<P: AsRef<Path>>(cwd: P) -> Result<String> {
    let output = run_git_raw(cwd, STAGED_DIFF_ARGS)?;
    debug!(bytes = output.stdout.len(), "read staged diff");
    Ok(output.stdout)
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(NocommitError::User)` - If not inside a git repository
pub fn repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git(cwd, &["rev-parse", "--show-toplevel"]).map_err(|e| {
        NocommitError::User(format!(
            "not inside a git repository. Run this command from within a git repository. ({})",
            e
        ))
    })?;
    Ok(PathBuf::from(output.stdout))
}

/// Get the directory git reads hooks from.
///
/// Uses `git rev-parse --git-path hooks`, which honours `core.hooksPath`
/// and linked worktrees. Relative answers are resolved against `cwd`.
pub fn hooks_dir<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    let output = run_git(cwd, &["rev-parse", "--git-path", "hooks"])?;
    let path = PathBuf::from(&output.stdout);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(cwd.join(path))
    }
}
