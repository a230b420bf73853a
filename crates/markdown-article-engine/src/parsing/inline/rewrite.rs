use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::render::html::{self, Tag};

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Link, Strong},
    stash::stash_code_spans,
};

/// Switches for optional inline passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineOptions {
    /// Remove backslash escapes and superscript carets left by document
    /// converters before any other rewriting.
    pub unescape_pandoc: bool,
}

/// Rewrites inline spans of a block's text into HTML.
///
/// Passes run in a fixed order, each over the output of the previous one:
/// code spans, strong, emphasis, links. Code spans are stashed behind
/// placeholders so their content is never reinterpreted, and already
/// rendered tags contain no delimiters, so running the rewriter on its own
/// output changes nothing. Unbalanced delimiters stay literal.
pub fn rewrite_inline(text: &str, opts: InlineOptions) -> String {
    let (text, stash) = stash_code_spans(text);
    let text = if opts.unescape_pandoc {
        unescape_pandoc(&text)
    } else {
        text
    };
    let text = strong(&text);
    let text = emphasis(&text);
    let text = links(&text);
    stash.restore(&text)
}

/// `**text**` to `<strong>`. Non-greedy and single-line. The content must
/// not start or end with a star, so in `***x***` the outer star pair is left
/// for the emphasis pass and nests outside the strong tag.
pub fn strong(text: &str) -> String {
    static STRONG: OnceLock<Regex> = OnceLock::new();
    let re = STRONG.get_or_init(|| {
        let delim = regex::escape(Strong::DELIM);
        Regex::new(&format!(r"{delim}([^*\n](?:.*?[^*\n])?){delim}"))
            .expect("Invalid strong regex")
    });
    re.replace_all(text, |caps: &Captures| html::wrap(Tag::Strong, &caps[1]))
        .into_owned()
}

/// `*text*` to `<em>`.
pub fn emphasis(text: &str) -> String {
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut text_start = 0;

    while !cur.eof() {
        if let Some((start, inner, end)) = try_emphasis(&mut cur) {
            out.push_str(&text[text_start..start]);
            out.push_str(&html::wrap(Tag::Em, inner));
            text_start = end;
            continue;
        }
        cur.bump();
    }

    out.push_str(&text[text_start..]);
    out
}

fn try_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<(usize, &'a str, usize)> {
    if cur.peek() != Some(Emphasis::STAR) || cur.prev() == Some(Emphasis::STAR) {
        return None;
    }
    let start = cur.pos();
    let close = cur.find_from(start + 1, "*")?;
    let s: &'a str = cur.s;
    let inner = &s[start + 1..close];

    if inner.is_empty()
        || inner.contains('\n')
        || inner.starts_with(char::is_whitespace)
        || inner.ends_with(char::is_whitespace)
        || s.as_bytes().get(close + 1) == Some(&Emphasis::STAR)
        || !strong_tags_balanced(inner)
    {
        return None;
    }

    cur.jump_to(close + 1);
    Some((start, inner, close + 1))
}

/// True if every `<strong>` in `text` is closed inside it and no
/// `</strong>` comes before its opener. Emphasis must not cut a strong
/// span in half.
fn strong_tags_balanced(text: &str) -> bool {
    let open = format!("<{}>", Tag::Strong.name());
    let close = format!("</{}>", Tag::Strong.name());
    let mut depth = 0usize;
    let mut rest = text;
    while let Some(at) = rest.find('<') {
        rest = &rest[at..];
        if let Some(after) = rest.strip_prefix(open.as_str()) {
            depth += 1;
            rest = after;
        } else if let Some(after) = rest.strip_prefix(close.as_str()) {
            let Some(d) = depth.checked_sub(1) else {
                return false;
            };
            depth = d;
            rest = after;
        } else {
            rest = &rest[1..];
        }
    }
    depth == 0
}

/// `[text](url)` to `<a href="url">text</a>`.
pub fn links(text: &str) -> String {
    static LINK: OnceLock<Regex> = OnceLock::new();
    let re = LINK.get_or_init(|| {
        Regex::new(r"(!?)\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex")
    });
    re.replace_all(text, |caps: &Captures| {
        if &caps[1] == Link::IMAGE_BANG {
            return caps[0].to_string();
        }
        let href = html_escape::encode_double_quoted_attribute(caps[3].trim());
        format!("<a href=\"{href}\">{}</a>", &caps[2])
    })
    .into_owned()
}

/// Strips converter escape artifacts: `\[`, `\]`, `\\`, `\+`, `\-`, `\.` and
/// superscript carets (`^8^` to `8`).
pub fn unescape_pandoc(text: &str) -> String {
    static CARETS: OnceLock<Regex> = OnceLock::new();
    let re = CARETS.get_or_init(|| Regex::new(r"\^([^\^]+)\^").expect("Invalid caret regex"));

    let text = text
        .replace("\\[", "[")
        .replace("\\]", "]")
        .replace("\\\\", "\\")
        .replace("\\+", "+")
        .replace("\\-", "-")
        .replace("\\.", ".");
    re.replace_all(&text, "$1").into_owned()
}
