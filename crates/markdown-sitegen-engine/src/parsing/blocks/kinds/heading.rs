use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one to six `#` then whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const PATTERN: &'static str = r"^#{1,6}\s";

    fn regex() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid heading regex"))
    }

    /// The heading level, or `None` if the block is not a heading.
    pub fn level(block: &str) -> Option<u8> {
        let m = Self::regex().find(block)?;
        let hashes = m.as_str().chars().filter(|&c| c == Self::MARKER).count();
        u8::try_from(hashes).ok()
    }

    /// The block with its marker removed, once.
    pub fn strip_marker(block: &str) -> &str {
        match Self::regex().find(block) {
            Some(m) => &block[m.end()..],
            None => block,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(Heading::level("# a"), Some(1));
        assert_eq!(Heading::level("#### a"), Some(4));
        assert_eq!(Heading::level("###### a"), Some(6));
        assert_eq!(Heading::level("####### a"), None);
        assert_eq!(Heading::level("#a"), None);
        assert_eq!(Heading::level(" # a"), None);
    }

    #[test]
    fn strips_only_the_leading_marker() {
        assert_eq!(Heading::strip_marker("## Title ## again"), "Title ## again");
        assert_eq!(Heading::strip_marker("# # nested"), "# nested");
    }
}
