use super::kinds::{BlockQuote, CodeFence, Heading, ImageLine};

/// A line that starts a block on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    /// Opens (or, inside a fence, closes) a fenced code block.
    FencedCode { info: Option<String> },
    /// A `#` line, quote or image line: always a complete one-line block.
    SingleLine,
}

/// Checks a trimmed line for a block opener.
pub fn try_open_leaf(trimmed: &str) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(sig) = CodeFence::sig(trimmed) {
        return Some(BlockOpen::FencedCode { info: sig.info });
    }
    if Heading::starts_line(trimmed)
        || BlockQuote::is_quote_line(trimmed)
        || ImageLine::parse(trimmed).is_some()
    {
        return Some(BlockOpen::SingleLine);
    }
    None
}
