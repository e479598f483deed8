//! Document-level tests for the parsing module.
//!
//! Trees are checked against the output invariants, then asserted as an
//! outline (`normalize`) or as rendered HTML.

mod normalize;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{
    error::ParseError,
    html::{HtmlNode, RenderOptions, VoidStyle},
    parsing::{inline_markdown_to_node, markdown_to_html, markdown_to_html_node, markdown_to_html_with},
};

fn convert(md: &str) -> HtmlNode {
    let root = markdown_to_html_node(md).unwrap();
    invariants::check(&root);
    root
}

#[test]
fn heading_document() {
    let root = convert("# Heading");
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].tag(), Some("h1"));
    assert_eq!(root.children()[0].text_content(), "Heading");
    assert_snapshot!(normalize::outline(&root), @r#"
div
  h1
    "Heading"
"#);
}

#[test]
fn bold_in_paragraph() {
    let root = convert("This is **bold** text");
    assert_eq!(
        root.children()[0].children(),
        &[
            HtmlNode::text("This is "),
            HtmlNode::element("b", vec![HtmlNode::text("bold")]),
            HtmlNode::text(" text"),
        ]
    );
}

#[test]
fn image_then_link() {
    let root = convert("![alt](u.png) and [link](v.com)");
    assert_snapshot!(normalize::outline(&root), @r#"
div
  p
    img src="u.png" alt="alt"
    " and "
    a href="v.com"
      "link"
"#);
}

#[test]
fn delimiter_at_edges_keeps_empty_text_nodes() {
    let root = convert("**bold**");
    let p = &root.children()[0];
    assert_eq!(p.children().len(), 3);
    assert_eq!(p.to_html(), "<p><b>bold</b></p>");
}

#[test]
fn empty_document_is_empty_div() {
    let root = convert("");
    assert!(root.children().is_empty());
    assert_snapshot!(root.to_html(), @"<div></div>");
}

#[test]
fn whitespace_document_is_empty_div() {
    assert_eq!(markdown_to_html("   \n\n\n   \n").unwrap(), "<div></div>");
}

#[test]
fn paragraphs_keep_source_order() {
    assert_snapshot!(
        markdown_to_html("First\n\n\nSecond\n\nThird").unwrap(),
        @"<div><p>First</p><p>Second</p><p>Third</p></div>"
    );
}

#[test]
fn code_fence_is_raw() {
    assert_snapshot!(
        markdown_to_html("```\nlet snake_case = **1**;\n```").unwrap(),
        @"<div><pre><code>let snake_case = **1**;</code></pre></div>"
    );
}

#[test]
fn every_block_kind() {
    let md = "# Title

This is **bolded** paragraph
text in a p
tag here

> A _quote_
> continues

- one
- `two`

1. first
2. [second](/s)

```
fn main() {
    println!(\"hi\");
}
```";
    let root = convert(md);
    assert_eq!(
        root.to_html(),
        "<div><h1>Title</h1>\
<p>This is <b>bolded</b> paragraph text in a p tag here</p>\
<blockquote>A <i>quote</i> continues</blockquote>\
<ul><li>one</li><li><code>two</code></li></ul>\
<ol><li>first</li><li><a href=\"/s\">second</a></li></ol>\
<pre><code>fn main() {\nprintln!(\"hi\");\n}</code></pre></div>"
    );
}

#[test]
fn inline_error_aborts_document() {
    let err = markdown_to_html_node("# Title\n\nSome _broken text").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedInlineMarkup {
            delimiter: "_".into(),
            text: "Some _broken text".into(),
        }
    );
}

#[test]
fn inline_error_inside_list_item_aborts_document() {
    let err = markdown_to_html_node("- fine\n- not `fine").unwrap_err();
    assert!(matches!(err, ParseError::MalformedInlineMarkup { .. }));
}

#[test]
fn unbalanced_underscore_in_plain_words_is_rejected() {
    assert!(markdown_to_html("call snake_case here").is_err());
}

#[test]
fn malformed_links_stay_literal() {
    assert_snapshot!(
        markdown_to_html("see [broken link without url and ![img](").unwrap(),
        @"<div><p>see [broken link without url and ![img](</p></div>"
    );
}

#[test]
fn inline_fragment_has_no_wrapper() {
    let node = inline_markdown_to_node("A **b** [c](d)").unwrap();
    assert_eq!(node.tag(), None);
    assert_snapshot!(node.to_html(), @r#"A <b>b</b> <a href="d">c</a>"#);
}

#[test]
fn render_options_apply_to_whole_document() {
    let opts = RenderOptions {
        escape_text: true,
        void_style: VoidStyle::Xhtml,
    };
    assert_snapshot!(
        markdown_to_html_with("1 < 2 & ![a](x.png)", &opts).unwrap(),
        @r#"<div><p>1 &lt; 2 &amp; <img src="x.png" alt="a" /></p></div>"#
    );
}
