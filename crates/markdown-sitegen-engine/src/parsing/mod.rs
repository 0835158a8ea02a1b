pub mod blocks;
pub mod inline;

use crate::html::Node;

use blocks::{block_to_node, markdown_to_blocks};

/// How many quotes may nest inside each other.
pub const MAX_QUOTE_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unbalanced delimiter {delimiter:?} in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },
    #[error("Block quotes nested deeper than {limit} levels")]
    QuoteDepthExceeded { limit: usize },
}

/// Converts a Markdown document into a `div` holding one subtree per block.
///
/// The returned tree is not validated; call [`Node::render`] to serialize it.
/// An empty document yields a `div` without children, which fails to render.
pub fn markdown_to_html_node(markdown: &str) -> Result<Node, ParseError> {
    parse_nested(markdown, 0)
}

/// Document pipeline at a given quote depth.
pub(crate) fn parse_nested(markdown: &str, depth: usize) -> Result<Node, ParseError> {
    let blocks = markdown_to_blocks(markdown);
    log::debug!("Blocks at depth {depth}: {blocks:?}");

    let children = blocks
        .iter()
        .map(|block| block_to_node(block, depth))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::container("div", children))
}
