//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the pre-commit check.
///
/// This struct represents the contents of `.nocommit.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regex patterns that must not appear in added lines.
    ///
    /// If a pattern has a capture group, the report shows the first group
    /// instead of the whole match.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    /// Stop at the first offending file, or report every offending file.
    #[serde(default)]
    pub report: ReportMode,

    /// Globs (repo-relative, forward slashes) of files that are never scanned.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            report: ReportMode::default(),
            exclude: Vec::new(),
        }
    }
}
