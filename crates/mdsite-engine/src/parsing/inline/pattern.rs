use regex::Regex;

use super::{
    kinds::{Image, Link},
    types::TextSpan,
};

/// Splits `![alt](url)` images out of every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, Image::pattern(), |_, _| true, |alt, url| {
        TextSpan::image(alt, url)
    })
}

/// Splits `[text](url)` links out of every plain span.
///
/// Bracket syntax directly preceded by `!` is image syntax and is skipped.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(
        spans,
        Link::pattern(),
        |text, start| !text[..start].ends_with(Link::IMAGE_MARKER),
        |content, url| TextSpan::link(content, url),
    )
}

/// Shared scan for link-like patterns.
///
/// `pattern` must have two capture groups: the content and the url. Matches
/// rejected by `accept(text, match_start)` stay part of the surrounding text.
fn split_matches(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    accept: impl Fn(&str, usize) -> bool,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content();
        let mut cursor = 0;
        let mut found = false;

        for caps in pattern.captures_iter(text) {
            let (Some(full), Some(content), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if !accept(text, full.start()) {
                continue;
            }
            found = true;
            if full.start() > cursor {
                out.push(TextSpan::plain(&text[cursor..full.start()]));
            }
            out.push(make(content.as_str(), url.as_str()));
            cursor = full.end();
        }

        if !found {
            out.push(span);
        } else if cursor < text.len() {
            out.push(TextSpan::plain(&text[cursor..]));
        }
    }

    out
}
