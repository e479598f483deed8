use crate::{
    error::ParseResult,
    html::{Element, HtmlNode},
};

use super::{pipeline::text_to_spans, types::TextSpan};

/// Maps a typed span to its HTML node. Total: every span has a node.
pub fn span_to_node(span: TextSpan) -> HtmlNode {
    match span {
        TextSpan::Plain(text) => HtmlNode::Text(text),
        TextSpan::Bold(text) => HtmlNode::element("b", vec![HtmlNode::Text(text)]),
        TextSpan::Italic(text) => HtmlNode::element("i", vec![HtmlNode::Text(text)]),
        TextSpan::Code(text) => HtmlNode::element("code", vec![HtmlNode::Text(text)]),
        TextSpan::Link { text, url } => Element::new("a")
            .with_attribute("href", url)
            .with_children(vec![HtmlNode::Text(text)])
            .into(),
        // void element: the alt text lives in the attribute, not a child
        TextSpan::Image { alt, url } => Element::new("img")
            .with_attribute("src", url)
            .with_attribute("alt", alt)
            .into(),
    }
}

/// Runs the inline pipeline over `text` and converts every span.
pub fn text_to_children(text: &str) -> ParseResult<Vec<HtmlNode>> {
    Ok(text_to_spans(text)?.into_iter().map(span_to_node).collect())
}
