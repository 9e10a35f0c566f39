use std::sync::OnceLock;

use regex::Regex;

/// Inline link, `[text](url)`.
///
/// The text may not contain brackets and the url may not contain parentheses.
pub struct Link;

impl Link {
    /// Character that turns link syntax into image syntax when it directly
    /// precedes the opening bracket.
    pub const IMAGE_MARKER: char = '!';

    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }
}

/// Inline image, `![alt](url)`.
pub struct Image;

impl Image {
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }
}
