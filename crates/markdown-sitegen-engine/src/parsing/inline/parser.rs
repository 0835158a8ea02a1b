use crate::html::Node;
use crate::parsing::ParseError;

use super::{
    convert::spans_to_nodes,
    delimiter::split_by_delimiter,
    kinds::{CodeSpan, Emphasis},
    links::{split_images, split_links},
    types::{InlineStyle, TextSpan},
};

/// Delimiter passes in the order they run.
///
/// `***` must precede `**`, which must precede `*`: each shorter marker is a
/// prefix of the longer ones and would otherwise split them apart.
pub const DELIMITER_PRIORITY: [(&str, InlineStyle); 4] = [
    (Emphasis::BOLD_ITALIC, InlineStyle::BoldItalic),
    (Emphasis::BOLD, InlineStyle::Bold),
    (Emphasis::ITALIC, InlineStyle::Italic),
    (CodeSpan::TICK, InlineStyle::Code),
];

/// Tokenizes a run of text into typed spans.
///
/// Runs every delimiter pass in [`DELIMITER_PRIORITY`] order, then extracts
/// images, then links.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, style) in DELIMITER_PRIORITY {
        spans = split_by_delimiter(spans, delimiter, style)?;
    }

    // Images before links: `![a](b)` contains the link-shaped `[a](b)`.
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Tokenizes `text` and converts each span to a node.
pub fn text_to_nodes(text: &str) -> Result<Vec<Node>, ParseError> {
    Ok(spans_to_nodes(text_to_spans(text)?))
}
