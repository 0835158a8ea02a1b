use std::sync::OnceLock;

use regex::Regex;

/// `[label](url)`
pub struct Link;

impl Link {
    /// Non-greedy label and target, both on a single line.
    pub const PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }
}

/// `![alt](src)`
///
/// A superset of [`Link`]: every image also contains a link-shaped match.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }
}
