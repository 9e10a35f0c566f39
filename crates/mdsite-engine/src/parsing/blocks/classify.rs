use serde::Serialize;

use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker};

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Classifies a trimmed block. First matching rule wins:
///
/// 1. starts with `#`: heading (level checked later)
/// 2. starts and ends with a fence: code
/// 3. every line starts with `>`: quote
/// 4. every line is a `*`/`-`/`+` item: unordered list
/// 5. every line is a `<digits>.` item: ordered list
/// 6. otherwise: paragraph
pub fn classify(block: &str) -> BlockType {
    if Heading::is_heading(block) {
        return BlockType::Heading;
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if BlockQuote::is_quote(block) {
        return BlockType::Quote;
    }
    if block.lines().all(|line| ListMarker::Unordered.matches(line)) {
        return BlockType::UnorderedList;
    }
    if block.lines().all(|line| ListMarker::Ordered.matches(line)) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
