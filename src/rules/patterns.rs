//! Compiled forbidden patterns.

use crate::error::{NocommitError, Result};
use regex::{Regex, RegexBuilder};

/// A single compiled forbidden pattern.
#[derive(Debug, Clone)]
pub struct ForbiddenPattern {
    regex: Regex,
}

impl ForbiddenPattern {
    /// Compile a pattern.
    ///
    /// `^` and `$` match at line boundaries, since patterns run against
    /// several added lines joined together. Use inline flags such as `(?i)`
    /// for case-insensitive matching.
    ///
    /// # Returns
    ///
    /// * `Ok(ForbiddenPattern)` - Successfully compiled pattern
    /// * `Err(NocommitError::Config)` - The pattern is not a valid regex
    pub fn new(source: &str) -> Result<Self> {
        let regex = RegexBuilder::new(source)
            .multi_line(true)
            .build()
            .map_err(|e| {
                NocommitError::Config(format!(
                    "invalid regex pattern '{}' - {}\n\
                     Fix: edit the config file and correct or remove this pattern.",
                    source, e
                ))
            })?;
        Ok(Self { regex })
    }

    /// The pattern as written in the config.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the text to report for the leftmost match in `text`.
    ///
    /// Returns the first capture group when it took part in the match,
    /// otherwise the whole match.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = self.regex.captures(text)?;
        caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str())
    }
}
