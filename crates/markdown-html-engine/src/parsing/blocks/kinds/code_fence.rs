use crate::{
    error::{ParseError, ParseResult},
    html::HtmlNode,
    parsing::blocks::BlockKind,
};

/// Fenced code block type. A raw zone: content is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True if `block` opens and closes with a fence.
    ///
    /// The two fences may not overlap, so a bare "```" is not a code block.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// The raw code between the fences, without surrounding newlines.
    pub fn content(block: &str) -> ParseResult<&str> {
        if !Self::is_fenced(block) {
            return Err(ParseError::MalformedBlockStructure {
                kind: BlockKind::CodeFence,
                line: block.lines().next().unwrap_or_default().to_string(),
                reason: "code block must open and close with ```",
            });
        }
        let inner = &block[Self::FENCE.len()..block.len() - Self::FENCE.len()];
        Ok(inner.trim_matches('\n'))
    }

    /// Builds `<pre><code>raw</code></pre>`.
    pub fn to_node(block: &str) -> ParseResult<HtmlNode> {
        let code = HtmlNode::element("code", vec![HtmlNode::text(Self::content(block)?)]);
        Ok(HtmlNode::element("pre", vec![code]))
    }
}
