/// Signature of a line that looks like a fence opener or closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Info string after the backticks (`rust` in ```` ```rust ````), if any.
    pub info: Option<String>,
}

/// Fenced code block type with owned delimiter constant.
///
/// Only backtick fences are recognised. Any fence line closes an open fence,
/// even one that carries an info string.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Checks a trimmed line for a fence marker.
    pub fn sig(trimmed: &str) -> Option<FenceSig> {
        let rest = trimmed.strip_prefix(Self::BACKTICKS)?;
        let info = rest.trim_start_matches('`').trim();
        Some(FenceSig {
            info: (!info.is_empty()).then(|| info.to_string()),
        })
    }

    /// The language named by a fence info string: its first word.
    pub fn language(info: &str) -> Option<&str> {
        info.split_whitespace().next()
    }
}
