use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Element, HtmlNode};

/// How void elements (`<img>`, `<br>`, ...) are closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoidStyle {
    /// `<img src="a.png">`
    #[default]
    Html,
    /// `<img src="a.png" />`
    Xhtml,
}

/// Options controlling HTML serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape text values and attribute values. Off by default: text is
    /// emitted verbatim.
    pub escape_text: bool,
    pub void_style: VoidStyle,
}

fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

impl Element {
    /// Attributes rendered as ` key="value"` pairs in insertion order.
    ///
    /// Returns an empty string when the element has no attributes.
    pub fn props_to_html(&self) -> String {
        let mut out = String::new();
        self.write_props(&mut out, &RenderOptions::default());
        out
    }

    fn write_props(&self, out: &mut String, opts: &RenderOptions) {
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            if opts.escape_text {
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
            } else {
                out.push_str(value);
            }
            out.push('"');
        }
    }

    fn write_html(&self, out: &mut String, opts: &RenderOptions) {
        out.push('<');
        out.push_str(&self.tag);
        self.write_props(out, opts);

        if is_void_tag(&self.tag) {
            match opts.void_style {
                VoidStyle::Html => out.push('>'),
                VoidStyle::Xhtml => out.push_str(" />"),
            }
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_html(out, opts);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl HtmlNode {
    /// Serializes the tree depth-first.
    pub fn render(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();
        self.write_html(&mut out, opts);
        out
    }

    /// Serializes with [`RenderOptions::default`].
    pub fn to_html(&self) -> String {
        self.render(&RenderOptions::default())
    }

    fn write_html(&self, out: &mut String, opts: &RenderOptions) {
        match self {
            HtmlNode::Text(value) => {
                if opts.escape_text {
                    out.push_str(&html_escape::encode_text(value));
                } else {
                    out.push_str(value);
                }
            }
            HtmlNode::Element(el) => el.write_html(out, opts),
            HtmlNode::Fragment(children) => {
                for child in children {
                    child.write_html(out, opts);
                }
            }
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
