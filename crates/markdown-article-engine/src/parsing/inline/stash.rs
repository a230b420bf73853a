use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::render::html::{self, Tag};

use super::{cursor::Cursor, kinds::CodeSpan};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

/// Raw zones lifted out of a text during rewriting.
///
/// Each zone is replaced by a private-use placeholder so that later passes
/// can see across it (`**`code`**` is still bold) without touching its
/// content.
#[derive(Debug, Default)]
pub struct Stash {
    zones: Vec<String>,
}

impl Stash {
    fn hold(&mut self, rendered: String, out: &mut String) {
        out.push(OPEN);
        out.push_str(&self.zones.len().to_string());
        out.push(CLOSE);
        self.zones.push(rendered);
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Puts every stashed zone back in place of its placeholder.
    pub fn restore(&self, text: &str) -> String {
        if self.zones.is_empty() {
            return text.to_string();
        }
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\x{E000}(\d+)\x{E001}").expect("Invalid placeholder regex")
        });
        re.replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| self.zones.get(i))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
    }
}

/// Renders backtick code spans and lifts them, together with any
/// already-rendered `<code>…</code>` spans, into a [`Stash`].
///
/// Backtick runs do not nest: a span closes at the next backtick, and an
/// empty or unclosed span stays literal.
pub fn stash_code_spans(text: &str) -> (String, Stash) {
    let mut cur = Cursor::new(text);
    let mut stash = Stash::default();
    let mut out = String::with_capacity(text.len());
    let mut text_start = 0;

    while !cur.eof() {
        if let Some((start, end, rendered)) = try_rendered_code(&mut cur)
            .or_else(|| try_code_span(&mut cur))
        {
            out.push_str(&text[text_start..start]);
            stash.hold(rendered, &mut out);
            text_start = end;
            continue;
        }
        cur.bump();
    }

    out.push_str(&text[text_start..]);
    (out, stash)
}

fn try_rendered_code(cur: &mut Cursor<'_>) -> Option<(usize, usize, String)> {
    if !cur.starts_with(CodeSpan::RENDERED_OPEN.as_bytes()) {
        return None;
    }
    let start = cur.pos();
    let close = cur.find_from(start + CodeSpan::RENDERED_OPEN.len(), CodeSpan::RENDERED_CLOSE)?;
    let end = close + CodeSpan::RENDERED_CLOSE.len();
    cur.jump_to(end);
    Some((start, end, cur.s[start..end].to_string()))
}

fn try_code_span(cur: &mut Cursor<'_>) -> Option<(usize, usize, String)> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let start = cur.pos();
    let close = cur.find_from(start + 1, "`")?;
    let inner = &cur.s[start + 1..close];
    if inner.is_empty() {
        return None;
    }
    let end = close + 1;
    cur.jump_to(end);
    Some((
        start,
        end,
        html::wrap(Tag::Code, &html::escape_angle_brackets(inner)),
    ))
}
