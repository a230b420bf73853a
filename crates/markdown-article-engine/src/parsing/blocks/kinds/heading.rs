/// ATX heading type with owned delimiter constant.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level of a trimmed line.
    ///
    /// A heading is 1 to 6 `#` characters followed by whitespace or the end
    /// of the line, so `#hashtag` is not a heading.
    pub fn level(trimmed: &str) -> Option<u8> {
        let hashes = trimmed.bytes().take_while(|b| *b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        match trimmed.as_bytes().get(hashes) {
            None | Some(b' ') | Some(b'\t') => Some(hashes as u8),
            Some(_) => None,
        }
    }

    /// True if the trimmed line starts with the marker. The splitter gives
    /// every such line its own block, whether or not it is a valid heading.
    pub fn starts_line(trimmed: &str) -> bool {
        trimmed.as_bytes().first() == Some(&Self::MARKER)
    }

    /// Heading text with the marker stripped.
    pub fn text(trimmed: &str) -> &str {
        trimmed
            .trim_start_matches(Self::MARKER as char)
            .trim()
    }
}
