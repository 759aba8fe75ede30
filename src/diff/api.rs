//! Public API for diff parsing.

use crate::error::Result;
use crate::git::staged_diff;
use serde::Serialize;
use std::path::Path;

use super::parser::parse_segments;

/// The lines one file gains in a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSegment {
    /// Repository-relative file path (forward slashes).
    pub file_path: String,
    /// Content of each added line without the leading '+', in diff order.
    pub added_lines: Vec<String>,
}

impl DiffSegment {
    /// Create a segment with no added lines yet.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            added_lines: Vec::new(),
        }
    }

    /// Added lines joined with `\n`, the text forbidden patterns run against.
    pub fn added_text(&self) -> String {
        self.added_lines.join("\n")
    }
}

/// Read the staged diff in `cwd` and split it into segments.
///
/// # Returns
///
/// * `Ok(Vec<DiffSegment>)` - One segment per staged file (empty when nothing is staged)
/// * `Err(NocommitError::Git)` - git diff could not run
pub fn staged_segments<P: AsRef<Path>>(cwd: P) -> Result<Vec<DiffSegment>> {
    let diff = staged_diff(cwd)?;
    Ok(parse_segments(&diff))
}
