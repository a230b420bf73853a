//! # Document Assembly
//!
//! Runs the stages in order, each a pure function of the previous output:
//!
//! raw text → blocks → title extraction → image extraction → rendered
//! fragments → [`Article`].

pub mod images;
pub mod title;

use std::path::Path;

use serde::Serialize;
use xi_rope::Rope;

use crate::{
    options::RenderOptions,
    parsing::{blocks::Block, parse_document, tag_blocks},
    render::render_blocks,
};

pub use images::{ContentImage, ImageExtraction, extract_images, resolve_image_path};
pub use title::{TitleExtraction, extract_title};

/// The result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    /// Path of the first image in the document, if any.
    pub cover_image: Option<String>,
    /// Every image after the cover, with its splice position.
    pub content_images: Vec<ContentImage>,
    /// Concatenated rendered blocks.
    pub html: String,
    /// Number of blocks after title and image removal. Every `block_index`
    /// is below this unless the document has no blocks at all.
    pub total_blocks: usize,
}

/// A document split, titled and stripped of images, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDocument {
    pub title: String,
    pub cover_image: Option<ContentImage>,
    pub content_images: Vec<ContentImage>,
    pub blocks: Vec<Block>,
}

/// Splits, classifies and extracts title and images.
pub fn prepare(rope: &Rope, base_dir: &Path, opts: &RenderOptions) -> PreparedDocument {
    let doc = parse_document(rope);
    let blocks = tag_blocks(rope, &doc);
    let TitleExtraction { title, blocks } = extract_title(blocks, opts);
    let ImageExtraction {
        cover_image,
        content_images,
        blocks,
    } = extract_images(blocks, base_dir);

    PreparedDocument {
        title,
        cover_image,
        content_images,
        blocks,
    }
}

impl PreparedDocument {
    /// Renders each block to one fragment, in order.
    pub fn fragments(&self, opts: &RenderOptions) -> Vec<String> {
        render_blocks(&self.blocks, opts)
    }

    pub fn into_article(self, opts: &RenderOptions) -> Article {
        let fragments = self.fragments(opts);
        Article {
            title: self.title,
            cover_image: self.cover_image.map(|c| c.path),
            content_images: self.content_images,
            html: fragments.concat(),
            total_blocks: self.blocks.len(),
        }
    }
}

/// Converts a whole document.
pub fn build_article(rope: &Rope, base_dir: &Path, opts: &RenderOptions) -> Article {
    let article = prepare(rope, base_dir, opts).into_article(opts);
    log::debug!(
        "assembled '{}': {} blocks, {} content images",
        article.title,
        article.total_blocks,
        article.content_images.len()
    );
    article
}
