use crate::html::HtmlNode;

/// Formats a node tree as an indented outline for snapshot testing.
///
/// One node per line: elements as `tag` followed by their attributes,
/// text leaves as quoted strings, fragments as `#fragment`.
pub fn outline(node: &HtmlNode) -> String {
    let mut lines = Vec::new();
    push_lines(node, 0, &mut lines);
    lines.join("\n")
}

fn push_lines(node: &HtmlNode, depth: usize, lines: &mut Vec<String>) {
    let prefix = "  ".repeat(depth);
    match node {
        HtmlNode::Text(value) => lines.push(format!("{prefix}{value:?}")),
        HtmlNode::Fragment(children) => {
            lines.push(format!("{prefix}#fragment"));
            for child in children {
                push_lines(child, depth + 1, lines);
            }
        }
        HtmlNode::Element(el) => {
            let attrs: String = el
                .attributes
                .iter()
                .map(|(k, v)| format!(" {k}={v:?}"))
                .collect();
            lines.push(format!("{prefix}{}{attrs}", el.tag));
            for child in &el.children {
                push_lines(child, depth + 1, lines);
            }
        }
    }
}
