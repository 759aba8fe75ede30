//! Verdict and violation types.

use serde::Serialize;

/// Printed after a block; git skips pre-commit hooks with this flag.
pub const BYPASS_HINT: &str = "To commit anyway, use --no-verify";

/// A forbidden pattern found in one file's added lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Repository-relative file path (forward slashes).
    pub file_path: String,
    /// First capture group of the match, or the whole match.
    pub matched: String,
    /// The pattern that matched.
    pub pattern: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        file_path: impl Into<String>,
        matched: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            matched: matched.into(),
            pattern: pattern.into(),
        }
    }
}

/// Outcome of checking a staged change set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No forbidden pattern in any added line.
    Allow,
    /// At least one forbidden pattern was added. Never empty.
    Block(Vec<Violation>),
}

impl Verdict {
    /// Build a verdict from collected violations.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Verdict::Allow
        } else {
            Verdict::Block(violations)
        }
    }

    /// Whether the commit must be aborted.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Block(_))
    }

    /// Violations found (empty when allowed).
    pub fn violations(&self) -> &[Violation] {
        match self {
            Verdict::Allow => &[],
            Verdict::Block(violations) => violations,
        }
    }

    /// Format the verdict as the message printed by the hook.
    ///
    /// ```text
    /// Git hook forbids adding "nocommit" to app.rb
    /// To commit anyway, use --no-verify
    /// ```
    ///
    /// Returns an empty string when the commit is allowed.
    pub fn format_report(&self) -> String {
        let violations = self.violations();
        if violations.is_empty() {
            return String::new();
        }

        let mut msg = String::new();
        for violation in violations {
            msg.push_str(&format!(
                "Git hook forbids adding \"{}\" to {}\n",
                violation.matched, violation.file_path
            ));
        }
        msg.push_str(BYPASS_HINT);
        msg.push('\n');
        msg
    }
}

/// JSON shape of a verdict: `{"blocked": bool, "violations": [...]}`.
impl Serialize for Verdict {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Verdict", 2)?;
        state.serialize_field("blocked", &self.is_blocked())?;
        state.serialize_field("violations", self.violations())?;
        state.end()
    }
}
