use std::sync::OnceLock;

use regex::Regex;

/// `* item` or `- item` on every line.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    pub fn is_list(block: &str) -> bool {
        block.lines().all(|line| Self::marker(line).is_some())
    }

    fn marker(line: &str) -> Option<&'static str> {
        Self::MARKERS.into_iter().find(|m| line.starts_with(*m))
    }

    /// The line with its marker removed.
    pub fn item_text(line: &str) -> &str {
        match Self::marker(line) {
            Some(marker) => &line[marker.len()..],
            None => line,
        }
    }
}

/// `1. item`, `2. item`, ... with consecutive numbers starting at 1.
pub struct OrderedList;

impl OrderedList {
    pub const FIRST_MARKER: &'static str = "1. ";
    pub const PATTERN: &'static str = r"^([0-9]+)\.\s";

    fn regex() -> &'static Regex {
        static ORDERED_LIST_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_LIST_REGEX
            .get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid ordered list regex"))
    }

    /// The item number of a line, if it carries a marker.
    pub fn number(line: &str) -> Option<u64> {
        let caps = Self::regex().captures(line)?;
        caps.get(1)?.as_str().parse().ok()
    }

    pub fn is_list(block: &str) -> bool {
        if !block.starts_with(Self::FIRST_MARKER) {
            return false;
        }
        block
            .lines()
            .zip(1u64..)
            .all(|(line, expected)| Self::number(line) == Some(expected))
    }

    /// The line with its numeric marker removed; markers vary in width.
    pub fn item_text(line: &str) -> &str {
        match Self::regex().find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }
}
