/// Inline link, `[text](url)`.
///
/// The same syntax prefixed with `!` is an inline image, which the target
/// surface cannot show mid-paragraph; it is left as literal text.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: &'static str = "!";
}
