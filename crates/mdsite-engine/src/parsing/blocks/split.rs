/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks, in document order.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines() {
        let md = "\
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn extra_blank_lines_do_not_make_empty_blocks() {
        let md = "first\n\n\n\n\nsecond\n\n   \n\nthird";
        assert_eq!(split_blocks(md), vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n\n\n").is_empty());
    }

    #[test]
    fn joined_blocks_split_back_in_order() {
        let blocks = vec!["# Title", "para one\nline two", "> quoted", "1. a\n2. b"];
        assert_eq!(split_blocks(&blocks.join("\n\n")), blocks);
    }

    #[test]
    fn trims_surrounding_whitespace_but_keeps_inner_indentation() {
        assert_eq!(
            split_blocks("  * a\n  * b  \n"),
            vec!["* a\n  * b"]
        );
    }
}
