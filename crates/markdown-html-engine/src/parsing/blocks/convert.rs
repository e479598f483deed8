use crate::{error::ParseResult, html::HtmlNode};

use super::{
    classify::classify,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockKind,
};

/// Converts one block to its HTML node, dispatching on [`classify`].
pub fn block_to_node(block: &str) -> ParseResult<HtmlNode> {
    let kind = classify(block);
    log::debug!(
        "{kind} block: {:?}",
        block.lines().next().unwrap_or_default()
    );

    match kind {
        BlockKind::Paragraph => Paragraph::to_node(block),
        BlockKind::Heading { .. } => Heading::to_node(block),
        BlockKind::CodeFence => CodeFence::to_node(block),
        BlockKind::Quote => BlockQuote::to_node(block),
        BlockKind::UnorderedList => UnorderedList::to_node(block),
        BlockKind::OrderedList => OrderedList::to_node(block),
    }
}
