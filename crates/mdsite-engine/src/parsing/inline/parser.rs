use crate::error::ParseError;

use super::{
    delimiter::split_delimiter,
    kinds::{Bold, CodeSpan, Italic},
    pattern::{split_images, split_links},
    types::{SpanKind, TextSpan},
};

/// Parses inline markdown into an ordered list of [`TextSpan`]s.
///
/// Empty input gives an empty list. If any line starts (after leading
/// whitespace) with `*` or a `<digits>.` marker, the whole input is returned
/// as one plain span so list markers are never read as emphasis.
///
/// # Errors
/// [`ParseError::UnbalancedDelimiter`] for an odd number of `**`, `*` or
/// `` ` `` delimiters in any plain run.
pub fn parse_spans(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    if text.is_empty() {
        return Ok(vec![]);
    }

    if text.lines().any(starts_with_list_marker) {
        log::trace!("inline text starts with a list marker, keeping it plain: {text:?}");
        return Ok(vec![TextSpan::plain(text)]);
    }

    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, Bold::DELIMITER, SpanKind::Bold)?;
    let spans = split_delimiter(spans, Italic::DELIMITER, SpanKind::Italic)?;
    let spans = split_delimiter(spans, CodeSpan::DELIMITER, SpanKind::Code)?;
    let spans = split_links(spans);
    Ok(split_images(spans))
}

/// `*` or `<digits>.` at the start of the line, ignoring indentation.
fn starts_with_list_marker(line: &str) -> bool {
    let line = line.trim_start();
    if line.starts_with(Italic::DELIMITER) {
        return true;
    }
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_text_has_no_spans() {
        assert_eq!(parse_spans("").unwrap(), vec![]);
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            parse_spans("This is some text with **bold** and *italic*").unwrap(),
            vec![
                TextSpan::plain("This is some text with "),
                TextSpan::bold("bold"),
                TextSpan::plain(" and "),
                TextSpan::italic("italic"),
            ]
        );
    }

    #[test]
    fn every_kind_in_one_line() {
        let text = "This is **text** with an _italic_ word and a `code block` and an \
                    ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            parse_spans(text).unwrap(),
            vec![
                TextSpan::plain("This is "),
                TextSpan::bold("text"),
                TextSpan::plain(" with an _italic_ word and a "),
                TextSpan::code("code block"),
                TextSpan::plain(" and an "),
                TextSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextSpan::plain(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn image_only() {
        assert_eq!(
            parse_spans("![alt](http://x/y.png)").unwrap(),
            vec![TextSpan::image("alt", "http://x/y.png")]
        );
    }

    #[test]
    fn emphasis_inside_link_text_is_split_first() {
        assert_eq!(
            parse_spans("see [the *docs*](https://docs.rs)").unwrap(),
            vec![
                TextSpan::plain("see [the "),
                TextSpan::italic("docs"),
                TextSpan::plain("](https://docs.rs)"),
            ]
        );
    }

    #[rstest]
    #[case("* a list item with *emphasis*")]
    #[case("  *indented star")]
    #[case("1. numbered *item")]
    #[case("first line\n42. second line")]
    #[case("**bold at the start**")]
    fn list_marker_lines_stay_plain(#[case] text: &str) {
        assert_eq!(parse_spans(text).unwrap(), vec![TextSpan::plain(text)]);
    }

    #[rstest]
    #[case("an *odd* number of *stars", "*")]
    #[case("one ** pair and a ** half **", "**")]
    #[case("an `unclosed code span", "`")]
    fn unbalanced_delimiters_fail(#[case] text: &str, #[case] delimiter: &str) {
        match parse_spans(text) {
            Err(ParseError::UnbalancedDelimiter { delimiter: d, .. }) => assert_eq!(d, delimiter),
            other => panic!("expected unbalanced delimiter error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_link_is_plain_text() {
        assert_eq!(
            parse_spans("a [link](missing-paren").unwrap(),
            vec![TextSpan::plain("a [link](missing-paren")]
        );
    }

    #[test]
    fn number_without_dot_is_not_a_marker() {
        assert_eq!(
            parse_spans("2024 was *fine*").unwrap(),
            vec![TextSpan::plain("2024 was "), TextSpan::italic("fine")]
        );
    }
}
