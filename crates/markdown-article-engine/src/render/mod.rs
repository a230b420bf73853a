//! # Block Rendering
//!
//! One rendering rule per [`BlockTag`], each producing a fragment in the
//! restricted vocabulary of [`html`]. Every block renders to exactly one
//! fragment.

pub mod code;
pub mod html;
pub mod list;
pub mod table;

use crate::{
    options::RenderOptions,
    parsing::{
        blocks::{
            Block, BlockTag,
            kinds::{BlockQuote, Heading},
        },
        inline::rewrite_inline,
    },
};

use html::{LINE_BREAK, RULE, Tag};

/// Renders one classified block.
pub fn render_block(block: &Block, opts: &RenderOptions) -> String {
    let inline = opts.inline();
    match &block.tag {
        BlockTag::Rule => RULE.to_string(),
        BlockTag::Code { language } => code::render_code(&block.text, language.as_deref(), opts),
        BlockTag::Table => table::render_table(&block.text, opts),
        BlockTag::Heading { level } => {
            let text = rewrite_inline(Heading::text(block.first_line()), inline);
            match level {
                1 | 2 => html::wrap(Tag::H2, &text),
                3 => html::wrap(Tag::H3, &text),
                _ => html::wrap(Tag::P, &html::wrap(Tag::Strong, &text)),
            }
        }
        BlockTag::Quote => {
            let body = block
                .text
                .lines()
                .map(BlockQuote::body)
                .collect::<Vec<_>>()
                .join("\n");
            html::wrap(
                Tag::Blockquote,
                &rewrite_inline(&body, inline).replace('\n', LINE_BREAK),
            )
        }
        BlockTag::UnorderedList => list::render_list(&block.text, false, inline),
        BlockTag::OrderedList => list::render_list(&block.text, true, inline),
        BlockTag::Image { .. } | BlockTag::Paragraph => render_paragraph(&block.text, opts),
    }
}

/// Renders every block in order, one fragment per block.
pub fn render_blocks(blocks: &[Block], opts: &RenderOptions) -> Vec<String> {
    blocks.iter().map(|b| render_block(b, opts)).collect()
}

fn render_paragraph(text: &str, opts: &RenderOptions) -> String {
    let lines = text
        .trim()
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    let text = rewrite_inline(&lines, opts.inline()).replace('\n', LINE_BREAK);
    html::wrap(Tag::P, &text)
}
