use crate::{error::ParseResult, html::HtmlNode, parsing::inline::text_to_children};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no
/// other kind matches. Lines are joined with single spaces.
pub struct Paragraph;

impl Paragraph {
    pub fn to_node(block: &str) -> ParseResult<HtmlNode> {
        let text = block.lines().collect::<Vec<_>>().join(" ");
        Ok(HtmlNode::element("p", text_to_children(&text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_lines_with_single_spaces() {
        let node = Paragraph::to_node("This is **bolded** paragraph\ntext in a p\ntag here").unwrap();
        assert_eq!(
            node.to_html(),
            "<p>This is <b>bolded</b> paragraph text in a p tag here</p>"
        );
    }
}
