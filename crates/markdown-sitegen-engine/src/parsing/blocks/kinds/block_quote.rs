/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one `>` and at most one space after it.
    ///
    /// Deeper prefixes are left in place: `> > a` becomes `> a`, which the
    /// nested document parse sees as a quote again.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Strips one level of quoting from every line.
    pub fn unquote(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), "hello");
    }

    #[test]
    fn strip_only_one_space() {
        assert_eq!(BlockQuote::strip_prefix(">   code"), "  code");
    }

    #[test]
    fn strip_one_level_of_nesting() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), "> hello");
        assert_eq!(BlockQuote::strip_prefix(">> hello"), "> hello");
    }

    #[test]
    fn bare_marker_becomes_empty() {
        assert_eq!(BlockQuote::strip_prefix(">"), "");
        assert_eq!(BlockQuote::strip_prefix("> "), "");
    }

    #[test]
    fn unquote_keeps_line_structure() {
        assert_eq!(
            BlockQuote::unquote("> first\n>\n> second"),
            "first\n\nsecond"
        );
    }
}
