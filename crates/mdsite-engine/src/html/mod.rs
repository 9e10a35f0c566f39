//! # HTML Node Tree
//!
//! A minimal node tree that renders to an HTML string.
//!
//! ## Types
//!
//! - **`HtmlNode`**: closed enum over the two node variants
//! - **`LeafNode`**: literal text, optionally wrapped in a tag; never has children
//! - **`ParentNode`**: a tag wrapping one or more children; never has literal text
//! - **`Attributes`**: insertion-ordered attribute list
//!
//! ## Invariants
//!
//! - A parent always has a non-empty tag and at least one child (checked in
//!   [`ParentNode::new`])
//! - A leaf always has content; the empty string is valid content
//! - Rendering is infallible once a tree is built and produces a single line
//!   with no escaping

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode, VOID_ELEMENTS};
