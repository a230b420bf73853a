//! Converts a constrained Markdown dialect into an HTML fragment for
//! rich-text article editors with a small tag vocabulary.
//!
//! Images are lifted out of the document with their positions so that a
//! publishing step can upload and splice them back in.

pub mod assemble;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;

use std::path::Path;

use xi_rope::Rope;

pub use assemble::{Article, ContentImage, PreparedDocument, build_article, prepare};
pub use options::RenderOptions;

/// Converts `markdown` into an [`Article`]. Relative image paths are
/// resolved against `base_dir`, normally the directory of the source file.
pub fn convert(markdown: &str, base_dir: &Path, options: &RenderOptions) -> Article {
    let rope = Rope::from(markdown);
    build_article(&rope, base_dir, options)
}
