use crate::parsing::rope::span::Span;

/// How the splitter delimited a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Lines up to a blank line, or a single self-contained line (heading,
    /// quote, image).
    Text,
    /// Lines between ```` ``` ```` fences. Blank lines inside are content.
    FencedCode {
        /// Info string of the opening fence.
        info: Option<String>,
        /// False when end of input was reached before a closing fence.
        closed: bool,
    },
}

/// A block produced by the splitter, expressed as spans into the rope.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including fence lines.
    pub span: Span,
    /// Span of the meaningful content (excludes fence lines).
    pub content_span: Span,
}

/// The classification of a completed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTag {
    Heading { level: u8 },
    Quote,
    Code { language: Option<String> },
    OrderedList,
    UnorderedList,
    Table,
    Image { alt: String, path: String },
    Rule,
    Paragraph,
}

/// A classified block with its extracted text.
///
/// For `Code` blocks `text` is the content between the fences; for every
/// other tag it is the block's source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub tag: BlockTag,
    pub text: String,
    pub span: Span,
}

impl Block {
    /// First non-blank line, trimmed.
    pub fn first_line(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("")
    }

    pub fn is_image(&self) -> bool {
        matches!(self.tag, BlockTag::Image { .. })
    }
}
