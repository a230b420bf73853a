pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use slice::{slice_lines, slice_to_string, truncate_chars};
pub use span::Span;
