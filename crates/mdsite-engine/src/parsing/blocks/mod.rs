//! # Block Parsing
//!
//! Block-level structure of a markdown document.
//!
//! ## Phases
//!
//! 1. **Segmentation** (`split`): the document is cut into blocks on blank
//!    lines (`\n\n`); each block is trimmed and empty blocks are dropped
//! 2. **Classification** (`classify`): each block gets exactly one
//!    [`BlockType`], decided from its own text only
//! 3. **List structuring** (`list`): list blocks become nested `ul`/`ol`
//!    trees driven by indentation
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types owning their markers (Heading, CodeFence, BlockQuote, ListMarker)
//! - **`split`**: `split_blocks()`
//! - **`classify`**: `classify()` and `BlockType`
//! - **`list`**: `ListItem` and `build_list()`
//!
//! ## Key Invariants
//!
//! - Classification priority is fixed: heading, code, quote, unordered list,
//!   ordered list, then paragraph
//! - A block mixing list marker styles is a paragraph
//! - Code blocks are raw: their content is never inline-parsed

pub mod classify;
pub mod kinds;
pub mod list;
pub mod split;

pub use classify::{BlockType, classify};
pub use kinds::{BlockQuote, CodeFence, Heading, ListMarker};
pub use list::{ListItem, build_list};
pub use split::split_blocks;
