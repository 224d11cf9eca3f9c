//! Cell cleanup passes for Markdown table output.
//!
//! Each pass is a function `&str -> String`. The row renderer applies them in
//! a fixed order: title cleanup and truncation first, then cell escaping.

use std::sync::LazyLock;

use regex::Regex;

/// Marker appended to truncated descriptions.
pub const ELLIPSIS: &str = "...";

// ---------------------------------------------------------------------------
// Pass 1: Title cleanup
// ---------------------------------------------------------------------------

/// Unwrap a leading `[Tag]` prefix: `[Tool] Web Scraper` becomes
/// `Tool Web Scraper`. Only the first bracket pair is touched.
pub fn clean_title(title: &str) -> String {
    static BRACKET_PREFIX_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]\s*").expect("valid regex"));

    if !title.starts_with('[') || !title.contains(']') {
        return title.to_string();
    }

    BRACKET_PREFIX_RE.replace(title, "${1} ").into_owned()
}

// ---------------------------------------------------------------------------
// Pass 2: Description truncation
// ---------------------------------------------------------------------------

/// Shorten `description` to at most `max` characters plus an ellipsis.
///
/// Cuts at the last whitespace at or before index `max` when that keeps at
/// least 80% of the budget, otherwise cuts hard at `max`.
pub fn truncate_description(description: &str, max: usize) -> String {
    let chars: Vec<char> = description.chars().collect();
    if chars.len() <= max {
        return description.to_string();
    }

    // chars.len() > max, so index `max` exists.
    let min_cut = (max * 4).div_ceil(5);
    let cut = (0..=max)
        .rev()
        .find(|&i| chars[i].is_whitespace())
        .filter(|&i| i >= min_cut)
        .unwrap_or(max);

    let head: String = chars[..cut].iter().collect();
    format!("{}{ELLIPSIS}", head.trim_end())
}

// ---------------------------------------------------------------------------
// Pass 3: Cell escaping
// ---------------------------------------------------------------------------

/// Make text safe inside a Markdown table cell.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "&#124;").replace('\n', " ")
}
