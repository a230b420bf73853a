/// Strong emphasis, `**text**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

/// Emphasis, `*text*`.
///
/// A star next to another star belongs to strong emphasis or a rule, and a
/// star followed by whitespace is a bullet or arithmetic, never emphasis.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
}
