//! Core diff parsing logic.

use tracing::trace;

use super::api::DiffSegment;
use super::helpers::{parse_diff_git_line, parse_hunk_header, parse_new_file_header};

/// Split raw unified diff text into per-file segments.
///
/// Every added line lands in exactly one segment, in original order. Hunk
/// bodies are consumed using the line counts from their `@@` header, so an
/// added line such as `+++ counter` is content, not a file header.
///
/// Empty input yields an empty vector.
pub fn parse_segments(diff_text: &str) -> Vec<DiffSegment> {
    let mut segments: Vec<DiffSegment> = Vec::new();
    // Whether the current segment already had its "+++" header.
    let mut new_header_seen = false;
    // Lines left in the current hunk body, per side.
    let mut old_remaining: usize = 0;
    let mut new_remaining: usize = 0;

    for line in diff_text.lines() {
        if old_remaining > 0 || new_remaining > 0 {
            if let Some(content) = line.strip_prefix('+') {
                if let Some(segment) = segments.last_mut() {
                    segment.added_lines.push(content.to_string());
                }
                new_remaining = new_remaining.saturating_sub(1);
                continue;
            }
            if line.starts_with('-') {
                old_remaining = old_remaining.saturating_sub(1);
                continue;
            }
            if line.starts_with(' ') || line.is_empty() {
                // Context; some tools strip the space from blank context lines.
                old_remaining = old_remaining.saturating_sub(1);
                new_remaining = new_remaining.saturating_sub(1);
                continue;
            }
            if line.starts_with('\\') {
                // "\ No newline at end of file"
                continue;
            }
            // Hunk ended early (truncated diff); treat the line as a header.
            old_remaining = 0;
            new_remaining = 0;
        }

        // Format: "diff --git a/path/to/file b/path/to/file"
        if let Some(rest) = line.strip_prefix("diff --git ") {
            let path = parse_diff_git_line(rest).unwrap_or_else(|| rest.to_string());
            trace!(file = %path, "diff file header");
            segments.push(DiffSegment::new(path));
            new_header_seen = false;
            continue;
        }

        // Format: "+++ b/path/to/file" or "+++ /dev/null"
        if let Some(rest) = line.strip_prefix("+++ ") {
            let path = parse_new_file_header(rest);
            match segments.last_mut() {
                Some(segment) if !new_header_seen => {
                    // Deleted files keep the "diff --git" path.
                    if let Some(path) = path {
                        segment.file_path = path;
                    }
                }
                _ => {
                    // Plain unified diff without "diff --git" lines.
                    if let Some(path) = path {
                        segments.push(DiffSegment::new(path));
                    }
                }
            }
            new_header_seen = true;
            continue;
        }

        if line.starts_with("@@ ") {
            if let Some(header) = parse_hunk_header(line) {
                old_remaining = header.old_len;
                new_remaining = header.new_len;
            }
            continue;
        }

        // "--- a/...", "index ...", mode, rename and "Binary files" lines
        // carry nothing the matcher needs.
    }

    segments
}
