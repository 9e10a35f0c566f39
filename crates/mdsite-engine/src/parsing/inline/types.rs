use serde::Serialize;

/// The formatting kind of a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text with a single formatting kind.
///
/// `target` holds the URL and is only ever set for links and images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

impl TextSpan {
    /// A span of one of the delimiter kinds. Links and images need a URL and
    /// go through [`TextSpan::link`] / [`TextSpan::image`].
    pub(crate) fn styled(content: impl Into<String>, kind: SpanKind) -> Self {
        debug_assert!(!matches!(kind, SpanKind::Link | SpanKind::Image));
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Code)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    /// An image; `alt` becomes the span content.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
