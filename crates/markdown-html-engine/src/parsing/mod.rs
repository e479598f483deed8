pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::{
    error::ParseResult,
    html::{HtmlNode, RenderOptions},
};

use blocks::{block_to_node, split_blocks};
use inline::text_to_children;

/// Converts a whole document into a `<div>` holding one node per block.
///
/// # Errors
/// The first malformed block or inline construct aborts the conversion;
/// no partial tree is returned.
pub fn markdown_to_html_node(markdown: &str) -> ParseResult<HtmlNode> {
    let blocks = split_blocks(markdown);
    log::debug!("document split into {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| block_to_node(block))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(HtmlNode::element("div", children))
}

/// Converts and renders a document with default [`RenderOptions`].
pub fn markdown_to_html(markdown: &str) -> ParseResult<String> {
    markdown_to_html_with(markdown, &RenderOptions::default())
}

pub fn markdown_to_html_with(markdown: &str, opts: &RenderOptions) -> ParseResult<String> {
    Ok(markdown_to_html_node(markdown)?.render(opts))
}

/// Converts inline-only text (a title, a caption) into a tag-less fragment.
///
/// No block structure is recognised: `# x` stays literal text.
pub fn inline_markdown_to_node(text: &str) -> ParseResult<HtmlNode> {
    Ok(HtmlNode::Fragment(text_to_children(text)?))
}
