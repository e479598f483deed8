//! # HTML Node Tree
//!
//! The output model of the converter: a strictly hierarchical tree where
//! every child is owned by exactly one parent.
//!
//! ## Modules
//!
//! - **`render`**: depth-first serialization to an HTML string (`RenderOptions`)
//!
//! ## Variants
//!
//! - **`Element`**: a tagged node with ordered attributes and children
//! - **`Text`**: a raw text leaf, never has children
//! - **`Fragment`**: a tag-less container that only groups siblings; it
//!   renders as the concatenation of its children

pub mod render;

pub use render::{RenderOptions, VoidStyle};

/// A node in the HTML output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Element(Element),
    Text(String),
    Fragment(Vec<HtmlNode>),
}

/// A tagged HTML element.
///
/// Attributes keep insertion order so rendered output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<HtmlNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_children(mut self, children: Vec<HtmlNode>) -> Self {
        self.children = children;
        self
    }

    /// Sets an attribute, replacing the value in place if the name exists.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl HtmlNode {
    /// Shorthand for an element node holding `children`.
    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element(Element::new(tag).with_children(children))
    }

    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Text(value.into())
    }

    /// The element tag, or `None` for text and fragment nodes.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Element(el) => Some(&el.tag),
            HtmlNode::Text(_) | HtmlNode::Fragment(_) => None,
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Element(el) => &el.children,
            HtmlNode::Fragment(children) => children,
            HtmlNode::Text(_) => &[],
        }
    }

    /// Concatenated text of all descendant text leaves, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            HtmlNode::Text(value) => out.push_str(value),
            HtmlNode::Element(_) | HtmlNode::Fragment(_) => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for HtmlNode {
    fn from(el: Element) -> Self {
        HtmlNode::Element(el)
    }
}
