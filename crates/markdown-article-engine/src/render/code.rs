use crate::options::RenderOptions;

use super::html::{self, Tag};

/// First-line prefixes that mark real code rather than a language name.
const CODE_PREFIXES: [&str; 7] = ["#", "//", "/*", "import", "from", "def", "class"];
const MAX_LANGUAGE_LEN: usize = 20;

/// Renders a fenced code block.
///
/// The target editor has no code block element, so the content goes inside
/// `<blockquote><pre><code>` with lines joined by line breaks. Only angle
/// brackets are escaped and no inline rewriting happens.
pub fn render_code(text: &str, language: Option<&str>, opts: &RenderOptions) -> String {
    let mut lines: Vec<&str> = text.split('\n').map(|l| l.trim_end_matches('\r')).collect();

    let language = match language {
        Some(lang) => Some(lang),
        None => {
            let sniffed = sniff_language(&lines);
            if sniffed.is_some() {
                lines.remove(0);
            }
            sniffed
        }
    };

    let escaped: Vec<String> = lines.iter().map(|l| html::escape_angle_brackets(l)).collect();
    let body = html::join_lines(escaped.iter().map(String::as_str));

    let code = match language {
        Some(lang) => html::wrap_with_class(Tag::Code, &format!("language-{lang}"), &body),
        None => html::wrap(Tag::Code, &body),
    };
    let block = html::wrap(Tag::Blockquote, &html::wrap(Tag::Pre, &code));

    match language {
        Some(lang) if opts.code_language_labels => {
            let label = html::wrap(
                Tag::P,
                &html::wrap(Tag::Strong, &html::escape_angle_brackets(lang)),
            );
            format!("{label}{block}")
        }
        _ => block,
    }
}

/// A bare identifier on the first line of a multi-line block, as left behind
/// when a converter moves the fence's language onto its own line.
fn sniff_language<'a>(lines: &[&'a str]) -> Option<&'a str> {
    if lines.len() < 2 {
        return None;
    }
    let first = lines[0].trim();
    let looks_like_name = !first.is_empty()
        && first.chars().count() < MAX_LANGUAGE_LEN
        && first
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '-' | '.' | '_'))
        && !CODE_PREFIXES.iter().any(|p| first.starts_with(p));
    looks_like_name.then_some(first)
}
