use crate::parsing::{
    blocks::kinds::ListMarker,
    inline::{InlineOptions, rewrite_inline},
};

use super::html::{self, Tag};

/// Renders a list block. Markers are stripped and each item is rewritten
/// inline and wrapped in `<li>`.
pub fn render_list(text: &str, ordered: bool, inline: InlineOptions) -> String {
    let (container, marker): (Tag, fn(&str) -> Option<&str>) = if ordered {
        (Tag::Ol, ListMarker::ordered_item)
    } else {
        (Tag::Ul, ListMarker::unordered_item)
    };

    let items: String = text
        .lines()
        .map(str::trim)
        .filter_map(marker)
        .map(|item| html::wrap(Tag::Li, &rewrite_inline(item, inline)))
        .collect();

    html::wrap(container, &items)
}
