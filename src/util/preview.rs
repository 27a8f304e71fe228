//! Short previews of request and response text for log fields.

/// Longest input preview written to logs, in bytes.
pub const INPUT_PREVIEW_BYTES: usize = 200;
/// Longest output preview written to logs, in bytes.
pub const OUTPUT_PREVIEW_BYTES: usize = 300;

/// Cut `s` to at most `max_bytes` without splitting a code point, marking
/// the cut with an ellipsis.
pub fn preview(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }

    let mut cutoff = max_bytes;
    while cutoff > 0 && !s.is_char_boundary(cutoff) {
        cutoff -= 1;
    }
    format!("{}...", &s[..cutoff])
}
