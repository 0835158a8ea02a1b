/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` followed by whitespace. Holds the level, 1 to 6.
    Heading(u8),
    /// Fenced with three backticks at both ends.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
    /// Anything else.
    Paragraph,
}
