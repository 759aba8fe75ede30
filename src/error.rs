//! Error types for the nocommit hook.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! A forbidden pattern match is not an error: it is reported through
//! [`crate::rules::Verdict`]. Every error here still fails the commit.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for nocommit operations.
#[derive(Error, Debug)]
pub enum NocommitError {
    /// Bad invocation or the repository is in an unexpected state.
    #[error("{0}")]
    User(String),

    /// The configuration file could not be read or contains invalid values.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Git could not be executed or exited with an error.
    #[error("git operation failed: {0}")]
    Git(String),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl NocommitError {
    /// Returns the process exit code for this error.
    ///
    /// All errors block the commit: git only looks at zero vs non-zero, and a
    /// hook that cannot inspect the staged diff must not let it through.
    pub fn exit_code(&self) -> i32 {
        match self {
            NocommitError::User(_)
            | NocommitError::Config(_)
            | NocommitError::Git(_)
            | NocommitError::Io(_) => exit_codes::BLOCKED,
        }
    }
}

/// Result type alias for nocommit operations.
pub type Result<T> = std::result::Result<T, NocommitError>;
