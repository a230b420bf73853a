//! The restricted HTML vocabulary.
//!
//! Nothing outside this module spells an element name; the target editor
//! only renders these elements reliably.

/// Elements the renderer may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    P,
    H2,
    H3,
    Blockquote,
    Ul,
    Ol,
    Li,
    Strong,
    Em,
    Code,
    Pre,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Blockquote => "blockquote",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Li => "li",
            Tag::Strong => "strong",
            Tag::Em => "em",
            Tag::Code => "code",
            Tag::Pre => "pre",
        }
    }
}

pub const LINE_BREAK: &str = "<br>";
pub const RULE: &str = "<hr/>";

/// `<tag>inner</tag>`
pub fn wrap(tag: Tag, inner: &str) -> String {
    let name = tag.name();
    format!("<{name}>{inner}</{name}>")
}

/// `<tag class="…">inner</tag>`
pub fn wrap_with_class(tag: Tag, class: &str, inner: &str) -> String {
    let name = tag.name();
    let class = html_escape::encode_double_quoted_attribute(class);
    format!("<{name} class=\"{class}\">{inner}</{name}>")
}

/// Escapes `<` and `>` only. Ampersands are left alone so that escaping
/// already-escaped text is a no-op.
pub fn escape_angle_brackets(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}

/// Joins lines with line-break elements.
pub fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines.into_iter().collect::<Vec<_>>().join(LINE_BREAK)
}
