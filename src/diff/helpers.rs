//! Helper functions for diff parsing.

/// Line counts from a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HunkHeader {
    /// Lines the hunk covers in the old file (removed + context).
    pub old_len: usize,
    /// Lines the hunk covers in the new file (added + context).
    pub new_len: usize,
}

/// Parse the new-file path from the remainder of a "diff --git" line.
///
/// Handles:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "\"a/with\\ttab\" \"b/with\\ttab\"" (quoted)
///
/// Returns the "b/" path, or None if parsing fails.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    if rest.ends_with('"') {
        if let Some(pos) = rest.rfind(" \"b/") {
            return strip_b_prefix(&unquote_path(&rest[pos + 1..]));
        }
    }

    // Paths may contain spaces; the last " b/" separates the two paths.
    if let Some(b_pos) = rest.rfind(" b/") {
        return Some(normalize_path(&rest[b_pos + 3..]));
    }

    None
}

/// Parse the path from the remainder of a "+++ " line.
///
/// Returns None for "/dev/null" (deleted file) or an unrecognised header.
pub(super) fn parse_new_file_header(rest: &str) -> Option<String> {
    // git appends a tab after paths containing spaces in some versions
    let rest = rest.trim_end_matches('\t');
    if rest == "/dev/null" {
        return None;
    }
    if rest.starts_with('"') {
        return strip_b_prefix(&unquote_path(rest));
    }
    strip_b_prefix(rest)
}

fn strip_b_prefix(path: &str) -> Option<String> {
    path.strip_prefix("b/").map(normalize_path)
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// An omitted length means 1.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let line = line.strip_prefix("@@ ")?;

    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    let old_len = parse_range_len(parts[0].strip_prefix('-')?)?;
    let new_len = parse_range_len(parts[1].strip_prefix('+')?)?;

    Some(HunkHeader { old_len, new_len })
}

/// Parse the length from "start" or "start,len".
fn parse_range_len(range: &str) -> Option<usize> {
    match range.split_once(',') {
        Some((start, len)) => {
            start.parse::<usize>().ok()?;
            len.parse().ok()
        }
        None => {
            range.parse::<usize>().ok()?;
            Some(1)
        }
    }
}

/// Decode a path git printed in C-style quotes.
///
/// Octal escapes are raw bytes; the result is decoded as UTF-8 (lossy).
/// Input that is not quoted is returned unchanged.
pub(super) fn unquote_path(quoted: &str) -> String {
    let Some(inner) = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    else {
        return quoted.to_string();
    };

    let bytes = inner.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\\' || i + 1 >= bytes.len() {
            out.push(b);
            i += 1;
            continue;
        }

        let next = bytes[i + 1];
        match next {
            b'0'..=b'7' => {
                let digits = bytes[i + 1..]
                    .iter()
                    .take(3)
                    .take_while(|d| (b'0'..=b'7').contains(*d))
                    .count();
                let value = bytes[i + 1..i + 1 + digits]
                    .iter()
                    .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                out.push((value & 0xff) as u8);
                i += 1 + digits;
            }
            _ => {
                out.push(match next {
                    b'a' => 0x07,
                    b'b' => 0x08,
                    b't' => b'\t',
                    b'n' => b'\n',
                    b'v' => 0x0b,
                    b'f' => 0x0c,
                    b'r' => b'\r',
                    other => other,
                });
                i += 2;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Normalize a file path to use forward slashes.
///
/// Keeps exclude globs portable regardless of where the diff was generated.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
