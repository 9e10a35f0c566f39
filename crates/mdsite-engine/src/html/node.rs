use crate::error::ConstructionError;

use super::Attributes;

/// Elements rendered as a bare opening tag with no content and no closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Renders this node and everything below it as a single HTML string.
    pub fn to_html(&self) -> String {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Literal content, optionally wrapped in a tag.
///
/// Without a tag the content is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// A tagless leaf: raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn is_void(&self) -> bool {
        self.tag
            .as_deref()
            .is_some_and(|tag| VOID_ELEMENTS.contains(&tag))
    }

    pub fn to_html(&self) -> String {
        let Some(tag) = self.tag.as_deref() else {
            return self.value.clone();
        };
        let attrs = self.attributes.to_html();
        if self.is_void() {
            format!("<{tag}{attrs}>")
        } else {
            format!("<{tag}{attrs}>{}</{tag}>", self.value)
        }
    }
}

/// A tag wrapping an ordered, non-empty list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// Builds a parent node.
    ///
    /// Fails if `tag` is empty or there are no children.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, ConstructionError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(ConstructionError::MissingTag);
        }
        if children.is_empty() {
            return Err(ConstructionError::EmptyChildren { tag });
        }
        Ok(Self {
            tag,
            children,
            attributes: Attributes::new(),
        })
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn to_html(&self) -> String {
        let inner: String = self.children.iter().map(HtmlNode::to_html).collect();
        format!(
            "<{tag}{attrs}>{inner}</{tag}>",
            tag = self.tag,
            attrs = self.attributes.to_html()
        )
    }
}
