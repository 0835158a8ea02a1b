use crate::html::Node;
use crate::parsing::{MAX_QUOTE_DEPTH, ParseError, inline::text_to_nodes, parse_nested};

use super::{
    classify::block_to_block_kind,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Converts one block to its HTML subtree.
///
/// `depth` is the quote nesting level the block sits at; top-level blocks
/// are at depth 0.
pub fn block_to_node(block: &str, depth: usize) -> Result<Node, ParseError> {
    match block_to_block_kind(block) {
        BlockKind::Heading(level) => heading_to_node(block, level),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block, depth),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
        BlockKind::Paragraph => paragraph_to_node(block),
    }
}

pub fn paragraph_to_node(block: &str) -> Result<Node, ParseError> {
    Ok(Node::container("p", text_to_nodes(block)?))
}

pub fn heading_to_node(block: &str, level: u8) -> Result<Node, ParseError> {
    let text = Heading::strip_marker(block);
    Ok(Node::container(format!("h{level}"), text_to_nodes(text)?))
}

/// Unquotes every line and parses the result as a document of its own, so a
/// quote may hold any block structure, including further quotes.
pub fn quote_to_node(block: &str, depth: usize) -> Result<Node, ParseError> {
    if depth >= MAX_QUOTE_DEPTH {
        return Err(ParseError::QuoteDepthExceeded {
            limit: MAX_QUOTE_DEPTH,
        });
    }
    let inner = parse_nested(&BlockQuote::unquote(block), depth + 1)?;
    Ok(Node::container("blockquote", vec![inner]))
}

/// Code content is emitted as-is, without inline parsing.
pub fn code_to_node(block: &str) -> Node {
    Node::container("pre", vec![Node::leaf("code", CodeFence::content(block))])
}

pub fn unordered_list_to_node(block: &str) -> Result<Node, ParseError> {
    list_to_node("ul", block, UnorderedList::item_text)
}

pub fn ordered_list_to_node(block: &str) -> Result<Node, ParseError> {
    list_to_node("ol", block, OrderedList::item_text)
}

fn list_to_node(tag: &str, block: &str, item_text: fn(&str) -> &str) -> Result<Node, ParseError> {
    let items = block
        .lines()
        .map(|line| -> Result<Node, ParseError> {
            Ok(Node::container("li", text_to_nodes(item_text(line))?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::container(tag, items))
}
