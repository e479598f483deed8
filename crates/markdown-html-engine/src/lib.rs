pub mod error;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{ParseError, ParseResult};
pub use html::{Element, HtmlNode, RenderOptions, VoidStyle};
pub use parsing::{
    blocks::BlockKind,
    inline::TextSpan,
    inline_markdown_to_node, markdown_to_html, markdown_to_html_node, markdown_to_html_with,
};
