use thiserror::Error;

/// Errors raised while reading markdown syntax.
///
/// Any of these aborts conversion of the whole document. Inline syntax that
/// merely fails to match (an unterminated link, say) is not an error and
/// stays plain text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unbalanced delimiter {delimiter:?} in text: {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("invalid heading level {level} in block: {block:?}")]
    InvalidHeadingLevel { level: usize, block: String },

    #[error("no h1 title found at the start of the document")]
    MissingTitle,
}

/// Errors raised while building the HTML node tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("parent node <{tag}> must have at least one child")]
    EmptyChildren { tag: String },

    #[error("parent node must have a tag")]
    MissingTag,
}

/// Any failure converting a markdown document into a node tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

pub type Result<T, E = MarkdownError> = std::result::Result<T, E>;
