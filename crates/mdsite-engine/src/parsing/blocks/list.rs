use crate::{
    error::Result,
    html::{HtmlNode, ParentNode},
    parsing::inline::{parse_spans, spans_to_html_nodes},
};

use super::kinds::ListMarker;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// One line of a list block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Item text with indentation, marker and the following space removed.
    pub text: String,
    /// Leading whitespace characters divided by [`INDENT_WIDTH`], rounded down.
    pub indent_level: usize,
}

impl ListItem {
    /// Reads an item from a raw list line.
    ///
    /// Tabs count as one character of indentation. A line without the
    /// expected marker keeps its trimmed text.
    pub fn from_line(line: &str, marker: ListMarker) -> Self {
        let trimmed = line.trim_start();
        let leading = line.chars().count() - trimmed.chars().count();
        let text = marker.strip(line).unwrap_or(trimmed);
        Self {
            text: text.to_string(),
            indent_level: leading / INDENT_WIDTH,
        }
    }
}

/// An item whose `li` has not been built yet; nested lists may still be
/// appended to `children`.
struct PendingItem {
    children: Vec<HtmlNode>,
    indent_level: usize,
}

/// Builds a nested `ul`/`ol` tree from the lines of one list block.
///
/// A run of deeper-indented lines becomes a nested list of the same flavour,
/// appended to the `li` of the item just before it. Nesting starts from the
/// shallowest indentation in the block.
///
/// # Errors
/// Inline parse errors from item text, or a construction error for an empty
/// list or an item with no content and no nested list.
pub fn build_list(lines: &[&str], marker: ListMarker) -> Result<HtmlNode> {
    let mut items = lines
        .iter()
        .map(|line| -> Result<PendingItem> {
            let item = ListItem::from_line(line, marker);
            let spans = parse_spans(&item.text)?;
            Ok(PendingItem {
                children: spans_to_html_nodes(&spans),
                indent_level: item.indent_level,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let base = items.iter().map(|i| i.indent_level).min().unwrap_or(0);
    let mut pos = 0;
    let top = build_level(&mut items, &mut pos, base, marker)?;
    log::debug!(
        "built {} list with {} top-level items from {} lines",
        marker.tag(),
        top.len(),
        lines.len()
    );

    Ok(ParentNode::new(marker.tag(), top)?.into())
}

/// Collects the sibling `li` nodes at `indent`, starting at `pos`.
///
/// Returns when input runs out or an item shallower than `indent` appears;
/// `pos` is left on that item for the caller.
fn build_level(
    items: &mut [PendingItem],
    pos: &mut usize,
    indent: usize,
    marker: ListMarker,
) -> Result<Vec<HtmlNode>> {
    let mut siblings: Vec<Vec<HtmlNode>> = Vec::new();

    while *pos < items.len() {
        let level = items[*pos].indent_level;
        if level < indent {
            break;
        }
        if level > indent {
            let nested = build_level(items, pos, level, marker)?;
            let list: HtmlNode = ParentNode::new(marker.tag(), nested)?.into();
            match siblings.last_mut() {
                Some(children) => children.push(list),
                None => siblings.push(vec![list]),
            }
            continue;
        }
        siblings.push(std::mem::take(&mut items[*pos].children));
        *pos += 1;
    }

    siblings
        .into_iter()
        .map(|children| -> Result<HtmlNode> {
            Ok(ParentNode::new("li", children)?.into())
        })
        .collect()
}
