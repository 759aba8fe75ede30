//! Tests for forbidden pattern matching.

use crate::config::{Config, ReportMode};
use crate::diff::{DiffSegment, parse_segments};
use crate::error::NocommitError;

use super::matcher::RuleMatcher;
use super::patterns::ForbiddenPattern;
use super::types::{BYPASS_HINT, Verdict, Violation};

// =========================================================================
// Helper functions
// =========================================================================

/// Create a DiffSegment for testing.
fn make_segment(file_path: &str, added_lines: &[&str]) -> DiffSegment {
    DiffSegment {
        file_path: file_path.to_string(),
        added_lines: added_lines.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create a matcher with custom patterns.
fn make_matcher(patterns: &[&str], mode: ReportMode) -> RuleMatcher {
    let config = Config {
        patterns: patterns.iter().map(|s| s.to_string()).collect(),
        report: mode,
        ..Default::default()
    };
    RuleMatcher::from_config(&config).unwrap()
}

fn default_matcher() -> RuleMatcher {
    RuleMatcher::from_config(&Config::default()).unwrap()
}

// =========================================================================
// Worked examples
// =========================================================================

/// Adding `# nocommit: fix later` to app.rb blocks and names both.
#[test]
fn test_nocommit_added_blocks() {
    let segments = vec![make_segment("app.rb", &["# nocommit: fix later"])];

    let verdict = default_matcher().check(&segments);

    assert!(verdict.is_blocked());
    let report = verdict.format_report();
    assert!(report.contains("app.rb"));
    assert!(report.contains("nocommit"));
}

/// Adding `# done: fix later` is allowed.
#[test]
fn test_clean_line_allowed() {
    let segments = vec![make_segment("app.rb", &["# done: fix later"])];

    let verdict = default_matcher().check(&segments);

    assert_eq!(verdict, Verdict::Allow);
    assert!(verdict.format_report().is_empty());
}

/// Removing a nocommit line without adding one is allowed.
#[test]
fn test_removed_nocommit_allowed() {
    let diff = r#"diff --git a/app.rb b/app.rb
index abc1234..def5678 100644
--- a/app.rb
+++ b/app.rb
@@ -1,3 +1,2 @@
 class App
-  # nocommit: fix later
 end
"#;

    let verdict = default_matcher().check(&parse_segments(diff));

    assert_eq!(verdict, Verdict::Allow);
}

/// A forbidden term only in context lines does not block.
#[test]
fn test_context_nocommit_allowed() {
    let diff = r#"diff --git a/app.rb b/app.rb
index abc1234..def5678 100644
--- a/app.rb
+++ b/app.rb
@@ -1,2 +1,3 @@
 # nocommit already here
+puts 'fine'
 end
"#;

    let verdict = default_matcher().check(&parse_segments(diff));

    assert_eq!(verdict, Verdict::Allow);
}

// =========================================================================
// Default pattern semantics
// =========================================================================

#[test]
fn test_default_pattern_is_case_insensitive() {
    let matcher = default_matcher();
    let violation = matcher
        .first_match(&make_segment("a.rs", &["// NoCommit please"]))
        .unwrap();
    assert_eq!(violation.matched, "NoCommit");
}

#[test]
fn test_default_pattern_respects_word_boundaries() {
    let matcher = default_matcher();
    assert!(
        matcher
            .first_match(&make_segment("a.rs", &["let nocommitted = 1;"]))
            .is_none()
    );
    assert!(
        matcher
            .first_match(&make_segment("a.rs", &["// (nocommit)"]))
            .is_some()
    );
}

// =========================================================================
// Capture groups
// =========================================================================

/// If a pattern defines a capture group, the report shows the group.
#[test]
fn test_capture_group_preferred_over_full_match() {
    let matcher = make_matcher(&[r"binding\.(pry)"], ReportMode::First);

    let violation = matcher
        .first_match(&make_segment("app.rb", &["    binding.pry"]))
        .unwrap();

    assert_eq!(violation.matched, "pry");
    assert_eq!(
        Verdict::Block(vec![violation]).format_report(),
        format!("Git hook forbids adding \"pry\" to app.rb\n{}\n", BYPASS_HINT)
    );
}

/// Without a capture group the full match is reported.
#[test]
fn test_full_match_without_group() {
    let matcher = make_matcher(&[r":focus\b"], ReportMode::First);

    let violation = matcher
        .first_match(&make_segment("spec/a_spec.rb", &["it 'works', :focus do"]))
        .unwrap();

    assert_eq!(violation.matched, ":focus");
}

/// An optional group that did not take part falls back to the full match.
#[test]
fn test_non_participating_group_falls_back() {
    let pattern = ForbiddenPattern::new(r"show_page(\(\))?").unwrap();
    assert_eq!(pattern.find("save_and_show_page"), Some("show_page"));
    assert_eq!(pattern.find("show_page()"), Some("()"));
}

// =========================================================================
// Ordering and report modes
// =========================================================================

/// Patterns are tried in list order; the first one to match wins.
#[test]
fn test_first_pattern_in_list_order_wins() {
    let matcher = make_matcher(&["beta", "alpha"], ReportMode::First);

    let violation = matcher
        .first_match(&make_segment("x.txt", &["alpha", "beta"]))
        .unwrap();

    assert_eq!(violation.pattern, "beta");
    assert_eq!(violation.matched, "beta");
}

/// Matching runs over the joined added lines with line anchors.
#[test]
fn test_line_anchors_match_each_added_line() {
    let matcher = make_matcher(&[r"^\s*debugger;?$"], ReportMode::First);

    let violation = matcher.first_match(&make_segment(
        "app.js",
        &["const a = 1;", "  debugger;", "const b = 2;"],
    ));

    assert!(violation.is_some());
}

/// Default mode stops at the first offending file.
#[test]
fn test_report_first_stops_at_first_file() {
    let matcher = make_matcher(&["nocommit"], ReportMode::First);
    let segments = vec![
        make_segment("a.rb", &["ok"]),
        make_segment("b.rb", &["nocommit"]),
        make_segment("c.rb", &["nocommit"]),
    ];

    let verdict = matcher.check(&segments);

    assert_eq!(
        verdict,
        Verdict::Block(vec![Violation::new("b.rb", "nocommit", "nocommit")])
    );
}

/// `all` mode collects one violation per offending file.
#[test]
fn test_report_all_collects_every_file() {
    let matcher = make_matcher(&["nocommit"], ReportMode::All);
    let segments = vec![
        make_segment("a.rb", &["nocommit", "nocommit again"]),
        make_segment("b.rb", &["ok"]),
        make_segment("c.rb", &["nocommit"]),
    ];

    let verdict = matcher.check(&segments);

    let files: Vec<&str> = verdict
        .violations()
        .iter()
        .map(|v| v.file_path.as_str())
        .collect();
    assert_eq!(files, vec!["a.rb", "c.rb"]);

    let report = verdict.format_report();
    assert_eq!(report.matches("Git hook forbids").count(), 2);
    assert_eq!(report.matches(BYPASS_HINT).count(), 1);
}

#[test]
fn test_with_mode_overrides_config() {
    let matcher = make_matcher(&["x"], ReportMode::First).with_mode(ReportMode::All);
    let segments = vec![make_segment("a", &["x"]), make_segment("b", &["x"])];
    assert_eq!(matcher.check(&segments).violations().len(), 2);
}

// =========================================================================
// Edge cases
// =========================================================================

#[test]
fn test_no_segments_allowed() {
    assert_eq!(default_matcher().check(&[]), Verdict::Allow);
}

#[test]
fn test_no_patterns_allows_everything() {
    let matcher = RuleMatcher::new(Vec::new(), ReportMode::First);
    let segments = vec![make_segment("a.rb", &["nocommit"])];
    assert_eq!(matcher.check(&segments), Verdict::Allow);
}

/// A segment without added lines never matches, even a pattern matching "".
#[test]
fn test_segment_without_added_lines_never_matches() {
    let matcher = make_matcher(&["^"], ReportMode::First);
    assert!(matcher.first_match(&DiffSegment::new("deleted.rb")).is_none());
}

#[test]
fn test_excluded_files_skipped() {
    let config = Config {
        exclude: vec!["vendor/**".to_string(), "*.md".to_string()],
        ..Default::default()
    };
    let matcher = RuleMatcher::from_config(&config).unwrap();
    let segments = vec![
        make_segment("vendor/lib/x.rb", &["nocommit"]),
        make_segment("docs/NOTES.md", &["nocommit"]),
    ];

    assert!(matcher.is_excluded("vendor/lib/x.rb"));
    assert!(!matcher.is_excluded("src/x.rb"));
    assert_eq!(matcher.check(&segments), Verdict::Allow);
}

#[test]
fn test_idempotent_checks() {
    let matcher = default_matcher();
    let segments = vec![make_segment("app.rb", &["# nocommit"])];
    assert_eq!(matcher.check(&segments), matcher.check(&segments));
}

// =========================================================================
// Config errors
// =========================================================================

#[test]
fn test_invalid_regex_is_config_error() {
    let config = Config {
        patterns: vec!["(unclosed".to_string()],
        ..Default::default()
    };

    let err = RuleMatcher::from_config(&config).unwrap_err();

    assert!(matches!(err, NocommitError::Config(_)));
    assert!(err.to_string().contains("(unclosed"));
}

#[test]
fn test_invalid_glob_is_config_error() {
    let config = Config {
        exclude: vec!["a/[".to_string()],
        ..Default::default()
    };

    let err = RuleMatcher::from_config(&config).unwrap_err();

    assert!(matches!(err, NocommitError::Config(_)));
    assert!(err.to_string().contains("exclude"));
}

#[test]
fn test_patterns_keep_source_text() {
    let matcher = default_matcher();
    let sources: Vec<&str> = matcher.patterns().iter().map(|p| p.as_str()).collect();
    assert_eq!(sources, vec![r"(?i)\bnocommit\b"]);
}

#[test]
fn test_verdict_json_shape() {
    let verdict = Verdict::Block(vec![Violation::new("app.rb", "nocommit", "nocommit")]);
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["blocked"], true);
    assert_eq!(json["violations"][0]["file_path"], "app.rb");
    assert_eq!(json["violations"][0]["matched"], "nocommit");

    let json = serde_json::to_value(Verdict::Allow).unwrap();
    assert_eq!(json["blocked"], false);
    assert_eq!(json["violations"].as_array().unwrap().len(), 0);
}
