use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Determines the kind of a raw block.
///
/// Rules are checked in order and the first match wins: heading, code,
/// quote, unordered list, ordered list, paragraph. A block that starts like
/// an ordered list but breaks the numbering is a paragraph.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading(level);
    }
    if CodeFence::is_fenced(block) {
        return BlockKind::Code;
    }
    if BlockQuote::is_quote(block) {
        return BlockKind::Quote;
    }
    if UnorderedList::is_list(block) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::is_list(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
