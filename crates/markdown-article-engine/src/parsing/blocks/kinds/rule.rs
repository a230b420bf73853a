/// Horizontal rule (thematic break).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];

    /// The whole trimmed block must be exactly one of the markers.
    pub fn matches(trimmed: &str) -> bool {
        Self::MARKERS.contains(&trimmed)
    }
}
