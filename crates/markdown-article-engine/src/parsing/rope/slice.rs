use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    if sp.is_empty() {
        return String::new();
    }
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts the text for a span with trailing line terminators removed.
///
/// Block spans end after their last newline; rendering wants the lines only.
pub fn slice_lines(rope: &Rope, sp: Span) -> String {
    let mut s = slice_to_string(rope, sp);
    let keep = s.trim_end_matches(['\r', '\n']).len();
    s.truncate(keep);
    s
}

/// Truncates `s` to at most `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
