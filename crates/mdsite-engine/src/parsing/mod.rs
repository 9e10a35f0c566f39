//! # Markdown Parsing
//!
//! One-way pipeline from raw markdown to an [`HtmlNode`] tree:
//!
//! ```text
//! text -> blocks -> classified blocks -> inline spans / list items -> HtmlNode tree
//! ```
//!
//! ## Modules
//!
//! - **`blocks`**: segmentation, classification and list structuring
//! - **`inline`**: span parsing and span-to-node conversion
//! - **`assemble`**: `to_document_tree()`, dispatching each block to its builder
//! - **`title`**: `extract_title()` for page generation
//!
//! Everything here is a pure function of its input. The first error aborts
//! the whole document; there is no per-block recovery.
//!
//! [`HtmlNode`]: crate::html::HtmlNode

pub mod assemble;
pub mod blocks;
pub mod inline;
pub mod title;

pub use assemble::{block_to_html_node, to_document_tree};
pub use title::extract_title;
