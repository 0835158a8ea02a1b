/// A line that forces a block boundary and is kept as its own block.
pub const LINE_BREAK: &str = "<br>";

/// Segmenter state between lines.
#[derive(Debug)]
enum SegmentState<'a> {
    Idle,
    Open(Vec<&'a str>),
}

impl SegmentState<'_> {
    fn close_into(self, blocks: &mut Vec<String>) {
        if let SegmentState::Open(lines) = self {
            blocks.push(lines.join("\n"));
        }
    }
}

/// Splits a document into blocks on blank lines.
///
/// Lines are trimmed; blank and whitespace-only lines only separate blocks,
/// so leading, trailing and repeated blank lines never produce empty blocks.
/// A line that is exactly `<br>` closes the open block and is emitted as a
/// block of its own.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut state = SegmentState::Idle;

    for line in markdown.lines() {
        let line = line.trim();
        state = match (state, line) {
            (state, "") => {
                state.close_into(&mut blocks);
                SegmentState::Idle
            }
            (state, LINE_BREAK) => {
                state.close_into(&mut blocks);
                blocks.push(LINE_BREAK.to_string());
                SegmentState::Idle
            }
            (SegmentState::Idle, line) => SegmentState::Open(vec![line]),
            (SegmentState::Open(mut lines), line) => {
                lines.push(line);
                SegmentState::Open(lines)
            }
        };
    }

    // EOF flush
    state.close_into(&mut blocks);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_paragraph_list() {
        let md = "# Heading\n\nParagraph line one.\nParagraph line two.\n\n* item a\n* item b\n";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "# Heading",
                "Paragraph line one.\nParagraph line two.",
                "* item a\n* item b",
            ]
        );
    }

    #[test]
    fn leading_and_trailing_blank_lines() {
        let md = "\n\n   \nfirst\n\n\n\nsecond\n\n  \n";
        assert_eq!(markdown_to_blocks(md), vec!["first", "second"]);
    }

    #[test]
    fn lines_are_trimmed() {
        let md = "   indented line   \n\ttabbed line\t";
        assert_eq!(markdown_to_blocks(md), vec!["indented line\ntabbed line"]);
    }

    #[test]
    fn whitespace_only_lines_separate_blocks() {
        assert_eq!(markdown_to_blocks("a\n \t \nb"), vec!["a", "b"]);
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(markdown_to_blocks("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn line_break_is_its_own_block() {
        assert_eq!(
            markdown_to_blocks("above\n<br>\nbelow"),
            vec!["above", "<br>", "below"]
        );
    }

    #[test]
    fn empty_document() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks("\n \n\n").is_empty());
    }
}
