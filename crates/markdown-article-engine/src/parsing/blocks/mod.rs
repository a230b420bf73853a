//! # Block Splitting and Classification
//!
//! Two-phase block parsing followed by a stateless tagging pass.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blank, fence marker, single-line opener)
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine with
//!    two states, outside and inside a fence, emits `BlockNode`s
//! 3. **Tagging** (`tag`): each completed block is classified by ordered
//!    predicate checks on its leading syntax into a `Block`
//!
//! ## Key Invariants
//!
//! - Every non-blank line belongs to exactly one block
//! - Blank lines separate blocks and never produce one, except inside a fence
//!   where they are content
//! - An unclosed fence at end of input is still a code block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod tag;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use tag::{classify_text, tag_block};
pub use types::{Block, BlockKind, BlockNode, BlockTag};
