/// List item markers.
///
/// Lists are one level deep: a block is a list only when every non-blank line
/// carries the same kind of marker.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    /// Item text of an unordered item line (`- x` or `* x`).
    pub fn unordered_item(trimmed: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|b| trimmed.strip_prefix(b))
            .map(str::trim)
    }

    /// Item text of an ordered item line (`12. x`).
    pub fn ordered_item(trimmed: &str) -> Option<&str> {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let item = trimmed[digits..].strip_prefix(". ")?.trim();
        (!item.is_empty()).then_some(item)
    }

    /// True if every non-blank line of `text` satisfies `item`, and at least
    /// one line does.
    pub fn all_lines<'a>(text: &'a str, item: impl Fn(&'a str) -> Option<&'a str>) -> bool {
        let mut seen = false;
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if item(line).is_none() {
                return false;
            }
            seen = true;
        }
        seen
    }
}
