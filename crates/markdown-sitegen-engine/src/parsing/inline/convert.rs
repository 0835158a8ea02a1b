use crate::html::Node;

use super::types::{SpanKind, TextSpan};

/// Maps one span to its HTML node.
pub fn span_to_node(span: TextSpan) -> Node {
    let TextSpan { text, kind } = span;
    match kind {
        SpanKind::Plain => Node::text(text),
        SpanKind::Bold => Node::leaf("strong", text),
        SpanKind::Italic => Node::leaf("em", text),
        SpanKind::BoldItalic => Node::container("em", vec![Node::leaf("strong", text)]),
        SpanKind::Code => Node::leaf("code", text),
        SpanKind::Link { url } => Node::leaf("a", text).with_attribute("href", url),
        SpanKind::Image { src } => Node::leaf("img", "")
            .with_attribute("src", src)
            .with_attribute("alt", text),
    }
}

pub fn spans_to_nodes(spans: Vec<TextSpan>) -> Vec<Node> {
    spans.into_iter().map(span_to_node).collect()
}
