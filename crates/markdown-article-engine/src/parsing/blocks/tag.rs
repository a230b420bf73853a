use xi_rope::Rope;

use crate::parsing::rope::slice::slice_lines;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, ImageLine, ListMarker, Table, ThematicBreak},
    types::{Block, BlockKind, BlockNode, BlockTag},
};

/// Materialises a block node's text and classifies it.
pub fn tag_block(rope: &Rope, node: &BlockNode) -> Block {
    match &node.kind {
        BlockKind::FencedCode { info, closed } => {
            if !closed {
                log::debug!(
                    "unterminated code fence at byte {}; closing at end of input",
                    node.span.start
                );
            }
            Block {
                tag: BlockTag::Code {
                    language: info
                        .as_deref()
                        .and_then(CodeFence::language)
                        .map(str::to_string),
                },
                text: slice_lines(rope, node.content_span),
                span: node.span,
            }
        }
        BlockKind::Text => {
            let text = slice_lines(rope, node.content_span);
            Block {
                tag: classify_text(&text),
                text,
                span: node.span,
            }
        }
    }
}

/// Classifies a text block by its leading syntax.
///
/// Checks run in priority order; the first match wins and anything
/// unrecognised is a paragraph.
pub fn classify_text(text: &str) -> BlockTag {
    let trimmed = text.trim();
    let first = trimmed.lines().next().unwrap_or("").trim();

    if ThematicBreak::matches(trimmed) {
        return BlockTag::Rule;
    }
    if let Some(image) = ImageLine::parse(trimmed) {
        return BlockTag::Image {
            alt: image.alt,
            path: image.path,
        };
    }
    if is_table(trimmed) {
        return BlockTag::Table;
    }
    if let Some(level) = Heading::level(first) {
        return BlockTag::Heading { level };
    }
    if BlockQuote::is_quote_line(first) {
        return BlockTag::Quote;
    }
    if ListMarker::all_lines(trimmed, ListMarker::unordered_item) {
        return BlockTag::UnorderedList;
    }
    if ListMarker::all_lines(trimmed, ListMarker::ordered_item) {
        return BlockTag::OrderedList;
    }
    BlockTag::Paragraph
}

fn is_table(trimmed: &str) -> bool {
    let mut rows = trimmed.lines().map(str::trim).filter(|l| !l.is_empty());
    match (rows.next(), rows.next()) {
        (Some(header), Some(separator)) => Table::is_row(header) && Table::is_separator(separator),
        _ => false,
    }
}
