//! Forbidden pattern matching over staged diff segments.
//!
//! - Only **added lines** are scanned (see [`crate::diff::DiffSegment`])
//! - A segment's added lines are joined with `\n` and tested against each
//!   pattern in list order; the first pattern that matches wins
//! - The report shows the first capture group if the pattern has one,
//!   otherwise the whole match
//!
//! Error handling:
//! - Invalid regex or glob patterns are config errors, not policy blocks

mod matcher;
mod patterns;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use matcher::RuleMatcher;
pub use patterns::ForbiddenPattern;
pub use types::{BYPASS_HINT, Verdict, Violation};
