use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a block by inspecting its text.
///
/// Total and deterministic. Rules are tried in priority order: heading,
/// code fence, quote, unordered list, ordered list. The line-based rules
/// require every line to match; anything else is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }
    if CodeFence::is_fenced(block) {
        return BlockKind::CodeFence;
    }
    if block.split('\n').all(BlockQuote::is_quote_line) {
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
