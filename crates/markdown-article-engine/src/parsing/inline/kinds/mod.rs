//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` ` `` - raw zone that suppresses other rewriting
//! - **`Strong`** / **`Emphasis`**: `**` and `*`
//! - **`Link`**: `[text](url)`; `![alt](url)` stays literal

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
