use crate::{
    options::RenderOptions,
    parsing::{blocks::kinds::Table, inline::rewrite_inline},
};

use super::html::{self, LINE_BREAK, Tag};

/// Renders a pipe table as a single paragraph.
///
/// The target editor does not render table elements reliably, so the table
/// becomes bold header cells, a rule of dashes and one line per data row,
/// every line ending in a line break.
pub fn render_table(text: &str, opts: &RenderOptions) -> String {
    let inline = opts.inline();
    let sep = opts.table_cell_separator.as_str();
    let mut rows = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let mut body = String::new();
    if let Some(header) = rows.next() {
        let cells: Vec<String> = Table::cells(header)
            .into_iter()
            .map(|c| html::wrap(Tag::Strong, &rewrite_inline(c, inline)))
            .collect();
        body.push_str(&cells.join(sep));
        body.push_str(LINE_BREAK);
    }
    body.push_str(&"-".repeat(opts.table_rule_width));
    body.push_str(LINE_BREAK);

    for row in rows.filter(|r| !Table::is_separator(r)) {
        let cells: Vec<String> = Table::cells(row)
            .into_iter()
            .map(|c| rewrite_inline(c, inline))
            .collect();
        body.push_str(&cells.join(sep));
        body.push_str(LINE_BREAK);
    }

    html::wrap(Tag::P, &body)
}
