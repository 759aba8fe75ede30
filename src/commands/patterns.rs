//! The `patterns` command: show the effective forbidden patterns.

use crate::cli::PatternsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::exit_codes;
use crate::git;
use crate::rules::RuleMatcher;

use super::current_dir;

/// Print each forbidden pattern on its own line, in match order.
///
/// Patterns are compiled first so a broken config fails here too.
pub fn cmd_patterns(args: PatternsArgs) -> Result<i32> {
    let cwd = current_dir()?;
    let root = git::repo_root(&cwd).unwrap_or(cwd);
    let config = Config::resolve(&root, args.config.as_deref())?;
    let matcher = RuleMatcher::from_config(&config)?;

    for pattern in matcher.patterns() {
        println!("{}", pattern.as_str());
    }

    Ok(exit_codes::SUCCESS)
}
