//! Rule matcher applying forbidden patterns to diff segments.

use crate::config::{Config, ReportMode};
use crate::diff::DiffSegment;
use crate::error::{NocommitError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};

use super::patterns::ForbiddenPattern;
use super::types::{Verdict, Violation};

/// Applies an explicit list of forbidden patterns to diff segments.
///
/// Build once per check; the patterns are read-only afterwards.
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    patterns: Vec<ForbiddenPattern>,
    mode: ReportMode,
    exclude: Option<GlobSet>,
}

impl RuleMatcher {
    /// Create a matcher from compiled patterns.
    pub fn new(patterns: Vec<ForbiddenPattern>, mode: ReportMode) -> Self {
        Self {
            patterns,
            mode,
            exclude: None,
        }
    }

    /// Compile patterns and exclude globs from config.
    ///
    /// # Returns
    ///
    /// * `Ok(RuleMatcher)` - Successfully compiled matcher
    /// * `Err(NocommitError::Config)` - If any pattern or glob fails to compile
    pub fn from_config(config: &Config) -> Result<Self> {
        let patterns = config
            .patterns
            .iter()
            .map(|p| ForbiddenPattern::new(p))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = patterns.len(), "compiled forbidden patterns");

        Self::new(patterns, config.report).with_exclude(&config.exclude)
    }

    /// Skip files matching any of `globs`.
    pub fn with_exclude(mut self, globs: &[String]) -> Result<Self> {
        if globs.is_empty() {
            self.exclude = None;
            return Ok(self);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in globs {
            let glob = Glob::new(&pattern.replace('\\', "/")).map_err(|e| {
                NocommitError::Config(format!(
                    "invalid glob pattern in exclude: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        let set = builder.build().map_err(|e| {
            NocommitError::Config(format!("failed to compile exclude globs: {}", e))
        })?;
        self.exclude = Some(set);
        Ok(self)
    }

    /// Override how many violations [`RuleMatcher::check`] collects.
    pub fn with_mode(mut self, mode: ReportMode) -> Self {
        self.mode = mode;
        self
    }

    /// The compiled patterns, in match order.
    pub fn patterns(&self) -> &[ForbiddenPattern] {
        &self.patterns
    }

    /// Whether a file is excluded from scanning.
    pub fn is_excluded(&self, file_path: &str) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|set| set.is_match(file_path))
    }

    /// Test one segment; the first pattern in list order that matches wins.
    ///
    /// Segments without added lines never match.
    pub fn first_match(&self, segment: &DiffSegment) -> Option<Violation> {
        if segment.added_lines.is_empty() {
            return None;
        }

        let text = segment.added_text();
        self.patterns.iter().find_map(|pattern| {
            pattern
                .find(&text)
                .map(|matched| Violation::new(&segment.file_path, matched, pattern.as_str()))
        })
    }

    /// Check every segment and decide whether the commit is allowed.
    ///
    /// In [`ReportMode::First`] the first offending file ends the scan; in
    /// [`ReportMode::All`] each offending file contributes one violation.
    pub fn check(&self, segments: &[DiffSegment]) -> Verdict {
        let mut violations = Vec::new();

        for segment in segments {
            if self.is_excluded(&segment.file_path) {
                debug!(file = %segment.file_path, "skipping excluded file");
                continue;
            }

            if let Some(violation) = self.first_match(segment) {
                info!(
                    file = %violation.file_path,
                    pattern = %violation.pattern,
                    "forbidden pattern in added lines"
                );
                violations.push(violation);
                if self.mode == ReportMode::First {
                    break;
                }
            }
        }

        Verdict::from_violations(violations)
    }
}
