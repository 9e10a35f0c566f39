use crate::html::{Attributes, HtmlNode, LeafNode};

use super::types::{SpanKind, TextSpan};

/// Converts a span into the leaf node that renders it.
///
/// | kind   | output                        |
/// |--------|-------------------------------|
/// | Plain  | raw text                      |
/// | Bold   | `<b>`                         |
/// | Italic | `<i>`                         |
/// | Code   | `<code>`                      |
/// | Link   | `<a href="url">`              |
/// | Image  | `<img src="url" alt="alt">`   |
pub fn span_to_html_node(span: &TextSpan) -> HtmlNode {
    let target = span.target().unwrap_or_default();
    let leaf = match span.kind() {
        SpanKind::Plain => LeafNode::text(span.content()),
        SpanKind::Bold => LeafNode::new("b", span.content()),
        SpanKind::Italic => LeafNode::new("i", span.content()),
        SpanKind::Code => LeafNode::new("code", span.content()),
        SpanKind::Link => LeafNode::new("a", span.content())
            .with_attributes(Attributes::new().with("href", target)),
        SpanKind::Image => LeafNode::new("img", "").with_attributes(
            Attributes::new()
                .with("src", target)
                .with("alt", span.content()),
        ),
    };
    leaf.into()
}

pub fn spans_to_html_nodes(spans: &[TextSpan]) -> Vec<HtmlNode> {
    spans.iter().map(span_to_html_node).collect()
}
