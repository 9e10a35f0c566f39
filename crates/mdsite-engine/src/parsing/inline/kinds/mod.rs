//! # Inline Kinds
//!
//! Each inline kind owns its syntax: delimiter strings for the balanced kinds,
//! compiled patterns for links and images. Parser code refers to these and
//! never spells out `**` or `![` itself.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};
