use crate::{
    error::{ParseError, ParseResult},
    html::HtmlNode,
    parsing::{blocks::BlockKind, inline::text_to_children},
};

/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips the prefix and surrounding whitespace from one quote line.
    ///
    /// Returns `None` if the line is not a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }

    /// Builds `<blockquote>` with the quoted lines joined by single spaces.
    pub fn to_node(block: &str) -> ParseResult<HtmlNode> {
        let lines = block
            .lines()
            .map(|line| {
                Self::strip_prefix(line).ok_or_else(|| ParseError::MalformedBlockStructure {
                    kind: BlockKind::Quote,
                    line: line.to_string(),
                    reason: "every quote line must start with `>`",
                })
            })
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(HtmlNode::element(
            "blockquote",
            text_to_children(&lines.join(" "))?,
        ))
    }
}
