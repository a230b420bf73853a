use crate::parsing::rope::{lines::LineRef, span::Span};

use super::open::{BlockOpen, try_open_leaf};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; the `BlockBuilder` supplies the
/// context (whether a fence is open).
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// What this line would open if seen outside a fence.
    pub open: Option<BlockOpen>,
}

impl LineClass {
    pub fn is_fence(&self) -> bool {
        matches!(self.open, Some(BlockOpen::FencedCode { .. }))
    }
}

/// Classifies individual lines for the block splitting phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.content().trim();
        LineClass {
            line: lr.span,
            is_blank: trimmed.is_empty(),
            open: try_open_leaf(trimmed),
        }
    }
}
