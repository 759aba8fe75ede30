//! Exit code constants for the nocommit hook.
//!
//! Git aborts the commit on any non-zero status from a pre-commit hook:
//! - 0: Commit allowed
//! - 1: Commit blocked (forbidden pattern found, or the check itself failed)

/// No forbidden pattern found; the commit may proceed.
pub const SUCCESS: i32 = 0;

/// A forbidden pattern was added, or the staged diff could not be inspected.
pub const BLOCKED: i32 = 1;
