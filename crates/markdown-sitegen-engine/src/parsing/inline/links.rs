use regex::Regex;

use super::{
    kinds::{Image, Link},
    types::TextSpan,
};

/// Extracts `![alt](src)` images from every `Plain` span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_by_pattern(spans, Image::regex(), |alt, src| TextSpan::image(alt, src))
}

/// Extracts `[label](url)` links from every `Plain` span.
///
/// Run after [`split_images`], otherwise the link pattern claims the
/// bracketed part of each image.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_by_pattern(spans, Link::regex(), |label, url| TextSpan::link(label, url))
}

/// Consumes matches left to right: text before each match becomes `Plain`,
/// the match becomes a span built by `make(label, target)`, and whatever
/// follows the last match becomes a trailing `Plain` span.
fn split_by_pattern(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces = split_text(&span.text, pattern, make);
        if pieces.is_empty() {
            out.push(span);
        } else {
            out.extend(pieces);
        }
    }
    out
}

/// Returns an empty vector when `text` has no match.
fn split_text(text: &str, pattern: &Regex, make: fn(&str, &str) -> TextSpan) -> Vec<TextSpan> {
    let mut pieces = vec![];
    let mut rest = 0;

    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let (_, [label, target]) = caps.extract();

        let before = &text[rest..whole.start()];
        if !before.is_empty() {
            pieces.push(TextSpan::plain(before));
        }
        pieces.push(make(label, target));
        rest = whole.end();
    }

    if !pieces.is_empty() && rest < text.len() {
        pieces.push(TextSpan::plain(&text[rest..]));
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::SpanKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_link() {
        let out = split_links(vec![TextSpan::plain(
            "This is text with a link [to boot dev](https://www.boot.dev)",
        )]);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("This is text with a link "),
                TextSpan::link("to boot dev", "https://www.boot.dev"),
            ]
        );
    }

    #[test]
    fn several_links_with_trailing_text() {
        let out = split_links(vec![TextSpan::plain("[one](/1), [two](/2)!")]);
        assert_eq!(
            out,
            vec![
                TextSpan::link("one", "/1"),
                TextSpan::plain(", "),
                TextSpan::link("two", "/2"),
                TextSpan::plain("!"),
            ]
        );
    }

    #[test]
    fn images_then_links() {
        let spans = vec![TextSpan::plain("See ![alt](img.png) and [link](url)")];
        let out = split_links(split_images(spans));
        assert_eq!(
            out,
            vec![
                TextSpan::plain("See "),
                TextSpan::image("alt", "img.png"),
                TextSpan::plain(" and "),
                TextSpan::link("link", "url"),
            ]
        );
    }

    #[test]
    fn images_only_leaves_links_plain() {
        let out = split_images(vec![TextSpan::plain("[link](url) ![img](i.png)")]);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("[link](url) "),
                TextSpan::image("img", "i.png"),
            ]
        );
    }

    #[test]
    fn no_match_passes_span_through() {
        let span = TextSpan::plain("no [links] (here)");
        assert_eq!(split_links(vec![span.clone()]), vec![span]);
    }

    #[test]
    fn resolved_spans_are_not_rescanned() {
        let code = TextSpan::new("[not](a link)", SpanKind::Code);
        assert_eq!(split_links(vec![code.clone()]), vec![code]);
    }

    #[test]
    fn empty_label_and_target_are_kept() {
        assert_eq!(
            split_links(vec![TextSpan::plain("[]()")]),
            vec![TextSpan::link("", "")]
        );
    }
}
