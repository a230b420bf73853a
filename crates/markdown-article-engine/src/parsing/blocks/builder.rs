use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    open::BlockOpen,
    types::{BlockKind, BlockNode},
};

/// Splitter state. `Fence` is the only state in which blank lines do not end
/// a block.
#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph {
        start: usize,
        last_line_end: usize,
    },
    Fence {
        info: Option<String>,
        start: usize,
        content_start: usize,
        last_line_end: usize,
    },
}

/// Builds the block sequence one classified line at a time.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        match &c.open {
            Some(BlockOpen::FencedCode { info }) => {
                self.flush_paragraph();
                self.leaf = LeafState::Fence {
                    info: info.clone(),
                    start: c.line.start,
                    content_start: c.line.end,
                    last_line_end: c.line.end,
                };
            }
            Some(BlockOpen::SingleLine) => {
                self.flush_paragraph();
                self.out.push(BlockNode {
                    kind: BlockKind::Text,
                    span: c.line,
                    content_span: c.line,
                });
            }
            None => self.extend_paragraph(c.line),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            info,
            start,
            content_start,
            last_line_end,
        } = &mut self.leaf
        else {
            return;
        };

        if !c.is_fence() {
            *last_line_end = c.line.end;
            return;
        }

        self.out.push(BlockNode {
            kind: BlockKind::FencedCode {
                info: info.take(),
                closed: true,
            },
            span: Span::new(*start, c.line.end),
            content_span: Span::new(*content_start, c.line.start),
        });
        self.leaf = LeafState::None;
    }

    fn extend_paragraph(&mut self, line: Span) {
        match &mut self.leaf {
            LeafState::Paragraph { last_line_end, .. } => *last_line_end = line.end,
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: line.start,
                    last_line_end: line.end,
                };
            }
        }
    }

    fn flush_paragraph(&mut self) {
        if let LeafState::Paragraph {
            start,
            last_line_end,
        } = self.leaf
        {
            let span = Span::new(start, last_line_end);
            self.out.push(BlockNode {
                kind: BlockKind::Text,
                span,
                content_span: span,
            });
            self.leaf = LeafState::None;
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            info,
            start,
            content_start,
            last_line_end,
        } = prev
        {
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode {
                    info,
                    closed: false,
                },
                span: Span::new(start, last_line_end),
                content_span: Span::new(content_start, last_line_end),
            });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
