use crate::error::ParseError;

use super::types::{SpanKind, TextSpan};

/// Splits every plain span on `delimiter`, marking the delimited runs as `kind`.
///
/// Segments alternate plain / `kind`, starting with plain. Empty plain
/// segments are dropped; empty delimited segments are kept, so `****` yields
/// one empty bold span. Non-plain spans pass through unchanged.
///
/// # Errors
/// [`ParseError::UnbalancedDelimiter`] if a plain span contains an odd number
/// of delimiters.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content();
        if text.matches(delimiter).count() % 2 != 0 {
            return Err(ParseError::UnbalancedDelimiter {
                delimiter,
                text: text.to_string(),
            });
        }

        for (i, part) in text.split(delimiter).enumerate() {
            if i % 2 == 1 {
                out.push(TextSpan::styled(part, kind));
            } else if !part.is_empty() {
                out.push(TextSpan::plain(part));
            }
        }
    }

    Ok(out)
}
