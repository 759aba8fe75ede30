//! Configuration types and defaults for nocommit.

use serde::{Deserialize, Serialize};

/// How many violations a check reports before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Stop at the first file with a forbidden pattern (default).
    #[default]
    First,
    /// Report the first match in every offending file.
    All,
}

/// Default forbidden patterns: the word "nocommit" in any case.
pub fn default_patterns() -> Vec<String> {
    vec![r"(?i)\bnocommit\b".to_string()]
}
