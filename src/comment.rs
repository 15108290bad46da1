//! Comment Attacher
//!
//! Recovers a documentation block immediately preceding a declaration from
//! the raw source text, without requiring the grammar to expose comments as
//! sibling nodes (many grammars omit or detach comment nodes from the tree).
//!
//! Two-stage heuristic:
//! 1. Pattern match over an up-to-4000-byte window anchored at the node
//!    start. A blank line between the comment and the declaration is a
//!    deliberate separator: it breaks the association and no comment is
//!    attached.
//! 2. Line-by-line fallback, bounded to 8 lines, for windows where the
//!    pattern finds no complete comment (e.g. a block comment cut off by
//!    the window boundary).

use regex::Regex;
use std::sync::LazyLock;

/// Bytes of source inspected behind the node start.
const WINDOW_BYTES: usize = 4000;

/// Maximum lines the fallback scanner will consume.
const MAX_FALLBACK_LINES: usize = 8;

/// A trailing block comment (`/* ... */`, `/** ... */`, non-greedy) or a run
/// of consecutive line comments, followed only by whitespace up to the end
/// of the window. The whitespace gap is captured separately so the caller
/// can check it for a blank line.
static COMMENT_TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:/\*\*?[\s\S]*?\*/|(?://[^\n]*\n?)+))(\s*)\z")
        .expect("comment trailer pattern is valid")
});

/// Find the documentation block attached to a declaration starting at
/// `node_start` (a byte offset into `code`). Never fails; returns `None`
/// when no comment is associated.
pub fn leading_comment(code: &str, node_start: usize) -> Option<String> {
    let node_start = node_start.min(code.len());
    let mut window_start = node_start.saturating_sub(WINDOW_BYTES);
    while window_start < node_start && !code.is_char_boundary(window_start) {
        window_start += 1;
    }
    let seg = &code[window_start..node_start];

    // Stage 1: trailing comment anchored at the window end.
    if let Some(caps) = COMMENT_TRAILER.captures(seg) {
        let gap = caps.get(2).map_or("", |m| m.as_str());
        if gap.contains("\n\n") {
            // Blank line between comment and declaration: deliberate
            // separator, no attachment.
            return None;
        }
        return Some(caps[1].trim().to_string());
    }

    // Stage 2: bounded upward line scan.
    fallback_scan(seg)
}

/// Walk upward from the last non-blank line, consuming comment lines.
fn fallback_scan(seg: &str) -> Option<String> {
    let lines: Vec<&str> = seg.lines().collect();
    if lines.is_empty() {
        return None;
    }

    let mut picked: Vec<&str> = Vec::new();
    let mut i = lines.len();
    while i > 0 && lines[i - 1].trim().is_empty() {
        i -= 1;
    }

    let mut open_block = false;
    let mut count = 0;
    while i > 0 && count < MAX_FALLBACK_LINES {
        let line = lines[i - 1];
        let s = line.trim_start();
        if open_block {
            picked.push(line);
            if s.contains("/*") {
                // Block closed from the top.
                break;
            }
            i -= 1;
            count += 1;
            continue;
        }
        if s.starts_with("//") {
            picked.push(line);
            i -= 1;
            count += 1;
            continue;
        }
        if s.contains("*/") {
            picked.push(line);
            open_block = true;
            i -= 1;
            count += 1;
            continue;
        }
        if s.starts_with("/*") {
            // Block start found in one line.
            picked.push(line);
            break;
        }
        break;
    }

    if picked.is_empty() {
        return None;
    }
    picked.reverse();
    Some(picked.join("\n").trim().to_string())
}
