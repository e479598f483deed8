use crate::{
    error::{ParseError, ParseResult},
    html::HtmlNode,
    parsing::{blocks::BlockKind, inline::text_to_children},
};

/// Unordered list block type: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    /// The marker every line must start with to classify as a list.
    pub const MARKER: &'static str = "- ";
    /// Characters stripped from the front of an item.
    pub const BULLET_CHARS: [char; 3] = ['*', '-', ' '];

    pub fn is_list(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::MARKER))
    }

    /// Strips every leading `*`, `-` and space, so the item text starts at
    /// its first other character.
    pub fn item_text(line: &str) -> &str {
        line.trim_start_matches(Self::BULLET_CHARS)
    }

    /// Builds `<ul>` with one `<li>` per line.
    pub fn to_node(block: &str) -> ParseResult<HtmlNode> {
        let items = block
            .lines()
            .map(|line| list_item(Self::item_text(line)))
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(HtmlNode::element("ul", items))
    }
}

/// Ordered list block type: lines numbered `1. `, `2. `, ... without gaps.
pub struct OrderedList;

impl OrderedList {
    /// Separates the item number from its text.
    pub const SEPARATOR: &'static str = ". ";

    /// The marker line `index` (0-based) must start with.
    pub fn expected_marker(index: usize) -> String {
        format!("{}{}", index + 1, Self::SEPARATOR)
    }

    pub fn is_list(block: &str) -> bool {
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::expected_marker(i)))
    }

    /// Builds `<ol>` with one `<li>` per line, splitting each line on the
    /// first separator.
    pub fn to_node(block: &str) -> ParseResult<HtmlNode> {
        let items = block
            .lines()
            .map(|line| {
                let (_, text) = line.split_once(Self::SEPARATOR).ok_or_else(|| {
                    ParseError::MalformedBlockStructure {
                        kind: BlockKind::OrderedList,
                        line: line.to_string(),
                        reason: "missing \". \" after the item number",
                    }
                })?;
                list_item(text)
            })
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(HtmlNode::element("ol", items))
    }
}

fn list_item(text: &str) -> ParseResult<HtmlNode> {
    Ok(HtmlNode::element("li", text_to_children(text)?))
}
