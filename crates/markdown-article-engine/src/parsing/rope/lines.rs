use xi_rope::Rope;

use super::span::Span;

/// A reference to a single physical line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the newline if present).
    pub span: Span,
    /// The line text including its line terminator.
    pub text: String,
}

impl LineRef {
    /// The line with its `\n` / `\r\n` terminator removed.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to keep newline characters so that consecutive spans
/// tile the whole document without gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
