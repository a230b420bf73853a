//! # Inline Rewriting
//!
//! Turns the inline Markdown inside a block's text into HTML, leaving block
//! wrapping to the renderers.
//!
//! ## Pass Order
//!
//! 1. Code spans: rendered and stashed as raw zones (`stash`)
//! 2. Strong: `**text**`
//! 3. Emphasis: `*text*`, scanned with a `Cursor` so that stars touching
//!    other stars or whitespace are left alone
//! 4. Links: `[text](url)`
//!
//! Each pass sees the output of the previous one. The order matters: link,
//! strong and emphasis delimiters would otherwise cross-match.
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**x**` `` renders as a code span holding
//! literal stars.

pub mod cursor;
pub mod kinds;
pub mod rewrite;
pub mod stash;

pub use rewrite::{InlineOptions, rewrite_inline};
