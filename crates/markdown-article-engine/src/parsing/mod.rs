pub mod blocks;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{Block, BlockBuilder, BlockNode, MarkdownLineClassifier, tag_block};
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Splits a document into blocks.
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::debug!("split document into {} blocks", blocks.len());
    ParsedDoc { blocks }
}

/// Classifies every block of a parsed document, in order.
pub fn tag_blocks(rope: &Rope, doc: &ParsedDoc) -> Vec<Block> {
    doc.blocks.iter().map(|b| tag_block(rope, b)).collect()
}
