use serde::{Deserialize, Serialize};

use crate::parsing::inline::InlineOptions;

/// Knobs for one conversion. Passed explicitly into every stage that needs
/// them; nothing is read from process-wide state mid-parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Title used when the document has no content at all.
    pub title_placeholder: String,
    /// Character limit for a title taken from a plain first line.
    pub title_max_chars: usize,
    /// Number of `-` in the rule between table header and rows.
    pub table_rule_width: usize,
    /// Text placed between table cells.
    pub table_cell_separator: String,
    /// Emit a bold language label paragraph before code blocks.
    pub code_language_labels: bool,
    /// Strip converter escape artifacts before inline rewriting.
    pub unescape_pandoc: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title_placeholder: "Untitled".to_string(),
            title_max_chars: 100,
            table_rule_width: 20,
            table_cell_separator: " | ".to_string(),
            code_language_labels: true,
            unescape_pandoc: false,
        }
    }
}

impl RenderOptions {
    pub fn inline(&self) -> InlineOptions {
        InlineOptions {
            unescape_pandoc: self.unescape_pandoc,
        }
    }
}
