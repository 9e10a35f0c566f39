/// Block quote, every line prefixed with `>`.
pub struct BlockQuote;

impl BlockQuote {
    pub const MARKER: char = '>';

    pub fn is_quote(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::MARKER))
    }

    /// Quote text with the `>` prefix and surrounding whitespace removed from
    /// each line, rejoined with newlines.
    pub fn content(block: &str) -> String {
        block
            .lines()
            .map(|line| line.trim_start_matches(Self::MARKER).trim())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
