//! Text helpers for source material and log previews.

/// Collapse every run of whitespace (including newlines) into one space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `s`.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Truncate for log output, appending an ellipsis when shortened.
pub fn preview(s: &str, max_chars: usize) -> String {
    let head = take_chars(s, max_chars);
    if head.len() == s.len() {
        s.to_string()
    } else {
        format!("{}...", head)
    }
}
