//! Staged diff parsing for nocommit.
//!
//! Splits unified diff text into one [`DiffSegment`] per file header and
//! keeps only the lines each file gains. Supports:
//! - New files (from /dev/null) and deleted files (to /dev/null)
//! - Renames, mode-only changes and binary files (segments without added lines)
//! - Quoted paths with C-style escapes
//! - Added lines whose content starts with `++` or `--`

mod api;
mod helpers;
mod parser;


// Re-export public API
pub use api::{DiffSegment, staged_segments};
pub use parser::parse_segments;
