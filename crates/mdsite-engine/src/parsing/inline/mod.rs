//! # Inline Parsing
//!
//! Turns one block's worth of raw text into an ordered list of [`TextSpan`]s.
//!
//! ## Pass Order
//!
//! Parsing is a cascade of splitting passes over the spans still marked
//! plain. Each pass leaves already-typed spans alone:
//!
//! 1. bold on `**`
//! 2. italic on `*`
//! 3. code on `` ` ``
//! 4. links `[text](url)` not preceded by `!`
//! 5. images `![alt](url)`
//!
//! Bold runs before italic so `**` is never read as two italic delimiters.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: delimiter constants and link/image patterns, owned per kind
//! - **`delimiter`**: the balanced-delimiter split used by bold, italic and code
//! - **`pattern`**: the link and image splits
//! - **`parser`**: `parse_spans()` entry point
//! - **`convert`**: `TextSpan` to `HtmlNode`
//!
//! ## Failure Modes
//!
//! An odd number of bold/italic/code delimiters is a [`ParseError`]. Link and
//! image syntax that does not match (missing `)`, stray `[`) is left as
//! plain text.
//!
//! [`ParseError`]: crate::error::ParseError

pub mod convert;
pub mod delimiter;
pub mod kinds;
pub mod parser;
pub mod pattern;
pub mod types;

pub use convert::{span_to_html_node, spans_to_html_nodes};
pub use parser::parse_spans;
pub use types::{SpanKind, TextSpan};
