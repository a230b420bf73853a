use std::path::Path;

use relative_path::RelativePath;
use serde::Serialize;

use crate::parsing::{
    blocks::{Block, BlockTag},
    rope::truncate_chars,
};

const AFTER_TEXT_MAX_CHARS: usize = 80;

/// An image pulled out of the block stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentImage {
    /// Resolved path: relative paths are joined onto the document directory.
    pub path: String,
    pub alt: String,
    /// Index, in the image-free block sequence, of the block this image
    /// follows. An image before every block also gets 0; `leading` tells the
    /// two apart.
    pub block_index: usize,
    /// True when no block precedes the image, so it goes before block 0
    /// rather than after it.
    pub leading: bool,
    /// Last line of the block the image follows, for human cross-checking.
    pub after_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageExtraction {
    /// The first image in document order.
    pub cover_image: Option<ContentImage>,
    /// Every other image, in document order.
    pub content_images: Vec<ContentImage>,
    /// The block sequence with image blocks removed.
    pub blocks: Vec<Block>,
}

/// Removes image blocks from the stream and records where each one was.
pub fn extract_images(blocks: Vec<Block>, base_dir: &Path) -> ImageExtraction {
    let mut images = Vec::new();
    let mut retained: Vec<Block> = Vec::with_capacity(blocks.len());

    for block in blocks {
        if let BlockTag::Image { alt, path } = &block.tag {
            let image = ContentImage {
                path: resolve_image_path(path, base_dir),
                alt: alt.clone(),
                block_index: retained.len().saturating_sub(1),
                leading: retained.is_empty(),
                after_text: retained.last().map(after_text).unwrap_or_default(),
            };
            log::debug!(
                "extracted image {} after block {}",
                image.path,
                image.block_index
            );
            images.push(image);
            continue;
        }
        retained.push(block);
    }

    let mut images = images.into_iter();
    ImageExtraction {
        cover_image: images.next(),
        content_images: images.collect(),
        blocks: retained,
    }
}

/// Joins a relative image path onto `base_dir`. Absolute paths and URLs pass
/// through unchanged.
pub fn resolve_image_path(path: &str, base_dir: &Path) -> String {
    if Path::new(path).is_absolute() || path.contains("://") || path.starts_with("data:") {
        return path.to_string();
    }
    RelativePath::new(path)
        .normalize()
        .to_path(base_dir)
        .display()
        .to_string()
}

fn after_text(block: &Block) -> String {
    let last = block
        .text
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    truncate_chars(last, AFTER_TEXT_MAX_CHARS).to_string()
}
