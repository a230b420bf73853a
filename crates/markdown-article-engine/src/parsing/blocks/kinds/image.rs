use std::sync::OnceLock;

use regex::Regex;

/// A standalone image line: `![alt](path)` with nothing else on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLine {
    pub alt: String,
    pub path: String,
}

impl ImageLine {
    /// Parses a trimmed line. Malformed syntax (missing paren, empty path)
    /// is not an image and falls back to ordinary text.
    pub fn parse(trimmed: &str) -> Option<Self> {
        static IMAGE_LINE: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE_LINE.get_or_init(|| {
            Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)$").expect("Invalid image line regex")
        });

        let caps = re.captures(trimmed)?;
        let path = caps[2].trim();
        if path.is_empty() {
            return None;
        }
        Some(Self {
            alt: caps[1].to_string(),
            path: path.to_string(),
        })
    }
}
