/// Blockquote block type with owned delimiter constant.
///
/// Quotes are one level deep in the output: nested `>` markers are all
/// stripped and the text lands in a single `<blockquote>`.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// True if the trimmed line opens a quote.
    pub fn is_quote_line(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PREFIX)
    }

    /// The quoted text with every `>` prefix removed.
    pub fn body(line: &str) -> &str {
        let mut rest = line.trim();
        while let Some(inner) = rest.strip_prefix(Self::PREFIX) {
            rest = inner.trim_start();
        }
        rest
    }
}
