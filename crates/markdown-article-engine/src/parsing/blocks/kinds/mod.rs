//! Block-specific types that own their syntax delimiters.
//!
//! Classifier, splitter and renderer code ask these types; none of them
//! hardcode `#`, `>` or ```` ``` ````.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod image;
pub mod list;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use image::ImageLine;
pub use list::ListMarker;
pub use rule::ThematicBreak;
pub use table::Table;
