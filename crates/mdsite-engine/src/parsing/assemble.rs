use crate::{
    error::Result,
    html::{HtmlNode, LeafNode, ParentNode},
};

use super::{
    blocks::{
        BlockQuote, BlockType, CodeFence, Heading, ListMarker, build_list, classify, split_blocks,
    },
    inline::{parse_spans, spans_to_html_nodes},
};

/// Tag of the container wrapping the whole document.
pub const ROOT_TAG: &str = "div";

/// Converts a markdown document into a node tree rooted at a `div`.
///
/// Blocks become children of the root in document order.
///
/// # Errors
/// The first parse or construction error from any block. An empty document
/// fails too, since the root would have no children.
pub fn to_document_tree(markdown: &str) -> Result<HtmlNode> {
    let children = split_blocks(markdown)
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("assembled document with {} blocks", children.len());
    Ok(ParentNode::new(ROOT_TAG, children)?.into())
}

/// Converts a single trimmed block.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode> {
    let block_type = classify(block);
    log::trace!("classified block as {block_type:?}: {block:?}");

    match block_type {
        BlockType::Paragraph => inline_parent("p", block),
        BlockType::Heading => {
            let (level, text) = Heading::split(block)?;
            inline_parent(&Heading::tag(level), text)
        }
        BlockType::Code => {
            let code = LeafNode::new("code", CodeFence::content(block));
            Ok(ParentNode::new("pre", vec![code.into()])?.into())
        }
        BlockType::Quote => inline_parent("blockquote", &BlockQuote::content(block)),
        BlockType::UnorderedList => list(block, ListMarker::Unordered),
        BlockType::OrderedList => list(block, ListMarker::Ordered),
    }
}

fn list(block: &str, marker: ListMarker) -> Result<HtmlNode> {
    let lines: Vec<&str> = block.lines().collect();
    build_list(&lines, marker)
}

/// Inline-parses `text` and wraps the result in `tag`.
fn inline_parent(tag: &str, text: &str) -> Result<HtmlNode> {
    let spans = parse_spans(text)?;
    Ok(ParentNode::new(tag, spans_to_html_nodes(&spans))?.into())
}
