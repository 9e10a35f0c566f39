/// Triple-backtick fenced code block.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// A code block opens and closes with a fence.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Code between the fences, trimmed. Taken literally.
    pub fn content(block: &str) -> &str {
        let inner = block.strip_prefix(Self::FENCE).unwrap_or(block);
        let inner = inner.strip_suffix(Self::FENCE).unwrap_or(inner);
        inner.trim()
    }
}
