//! The `check` command: scan the staged change set.

use crate::cli::{CheckArgs, OutputFormat};
use crate::config::{Config, ReportMode};
use crate::diff::{DiffSegment, parse_segments, staged_segments};
use crate::error::{NocommitError, Result};
use crate::exit_codes;
use crate::git;
use crate::rules::{RuleMatcher, Verdict};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::current_dir;

/// Scan added lines and report forbidden patterns.
///
/// Returns [`exit_codes::BLOCKED`] when a forbidden pattern was added. Any
/// error (git failure, bad config) also fails the commit via `main`.
pub fn cmd_check(args: CheckArgs) -> Result<i32> {
    let cwd = current_dir()?;
    let verdict = run_check(&cwd, &args)?;

    match args.format {
        OutputFormat::Text => print!("{}", verdict.format_report()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&verdict).map_err(|e| {
                NocommitError::User(format!("failed to serialize verdict: {}", e))
            })?;
            println!("{}", json);
        }
    }

    if verdict.is_blocked() {
        Ok(exit_codes::BLOCKED)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Resolve config and diff for `cwd`, then run the matcher.
pub(super) fn run_check(cwd: &Path, args: &CheckArgs) -> Result<Verdict> {
    let (root, segments) = load_segments(cwd, args.diff_file.as_deref())?;

    let config = Config::resolve(&root, args.config.as_deref())?;
    let mut matcher = RuleMatcher::from_config(&config)?;
    if args.all {
        matcher = matcher.with_mode(ReportMode::All);
    }

    let verdict = matcher.check(&segments);
    info!(
        files = segments.len(),
        blocked = verdict.is_blocked(),
        "check finished"
    );
    Ok(verdict)
}

/// Repository root (for config lookup) and the segments to scan.
fn load_segments(cwd: &Path, diff_file: Option<&Path>) -> Result<(PathBuf, Vec<DiffSegment>)> {
    let Some(diff_file) = diff_file else {
        let root = git::repo_root(cwd)?;
        let segments = staged_segments(&root)?;
        debug!(files = segments.len(), "parsed staged diff");
        return Ok((root, segments));
    };

    let text = std::fs::read_to_string(diff_file).map_err(|e| {
        NocommitError::Io(format!(
            "failed to read diff file '{}': {}",
            diff_file.display(),
            e
        ))
    })?;
    // A saved diff may be checked outside any repository.
    let root = git::repo_root(cwd).unwrap_or_else(|_| cwd.to_path_buf());
    let segments = parse_segments(&text);
    debug!(files = segments.len(), path = %diff_file.display(), "parsed diff file");
    Ok((root, segments))
}
