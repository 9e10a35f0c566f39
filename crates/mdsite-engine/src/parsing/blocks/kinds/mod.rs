//! # Block Kinds
//!
//! Block-specific types that own their markers. Classification and assembly
//! call into these instead of hardcoding `#`, `>` or fences.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_marker;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_marker::ListMarker;
