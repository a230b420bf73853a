use crate::{
    options::RenderOptions,
    parsing::{
        blocks::{Block, BlockTag, kinds::Heading},
        rope::truncate_chars,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleExtraction {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Derives the document title from the first non-image block.
///
/// - Level-1 heading: its text is the title and the block is removed so the
///   title is not rendered twice.
/// - Level-2 heading: its text is the title and the block stays.
/// - Anything else: the first line, cut to `title_max_chars`; the block stays.
///
/// Only that one block is consulted. An empty result falls back to the
/// placeholder.
pub fn extract_title(mut blocks: Vec<Block>, opts: &RenderOptions) -> TitleExtraction {
    let Some(idx) = blocks.iter().position(|b| !b.is_image()) else {
        return TitleExtraction {
            title: opts.title_placeholder.clone(),
            blocks,
        };
    };

    let first_line = blocks[idx].first_line();
    let title = match blocks[idx].tag {
        BlockTag::Heading { level: 1 | 2 } => Heading::text(first_line).to_string(),
        _ => truncate_chars(first_line, opts.title_max_chars).to_string(),
    };

    if matches!(blocks[idx].tag, BlockTag::Heading { level: 1 }) {
        blocks.remove(idx);
    }

    let title = if title.is_empty() {
        opts.title_placeholder.clone()
    } else {
        title
    };
    TitleExtraction { title, blocks }
}
