/// Code span inline type with owned delimiters.
///
/// Code spans are raw zones: no other inline rewriting happens inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    /// A code span that has already been rendered.
    pub const RENDERED_OPEN: &'static str = "<code>";
    pub const RENDERED_CLOSE: &'static str = "</code>";
}
