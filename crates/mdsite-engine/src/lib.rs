pub mod error;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{ConstructionError, MarkdownError, ParseError, Result};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use parsing::{
    blocks::{BlockType, ListItem, ListMarker, build_list, classify, split_blocks},
    extract_title,
    inline::{SpanKind, TextSpan, parse_spans, span_to_html_node},
    to_document_tree,
};

/// Converts a markdown document into a renderable node tree.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    to_document_tree(markdown)
}

/// Converts a markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(markdown_to_html_node(markdown)?.to_html())
}
