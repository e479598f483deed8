use crate::error::ParseResult;

use super::{
    kinds::Delimiter,
    split::{split_by_delimiter, split_images, split_links},
    types::TextSpan,
};

/// Delimiter passes, applied in this order after the pattern passes.
pub const DELIMITER_PASSES: [Delimiter; 3] = [Delimiter::BOLD, Delimiter::ITALIC, Delimiter::CODE];

/// Converts raw inline text into an ordered sequence of typed spans.
///
/// Passes run in a fixed order: images, links, bold, italic, code.
/// Images go before links because the link pattern matches the bracket part
/// of an image. Both pattern passes go before the delimiter passes so that
/// `_` or `**` inside a URL or alt text are never read as emphasis.
///
/// # Errors
/// Fails on the first unbalanced delimiter.
pub fn text_to_spans(text: &str) -> ParseResult<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];

    let spans = split_images(spans);
    let mut spans = split_links(spans);
    log::trace!("pattern passes produced {} spans", spans.len());

    for delimiter in DELIMITER_PASSES {
        spans = split_by_delimiter(spans, delimiter.marker, delimiter.style)?;
        log::trace!(
            "{:?} pass produced {} spans",
            delimiter.style,
            spans.len()
        );
    }

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(
            text_to_spans("Just some text").unwrap(),
            vec![TextSpan::plain("Just some text")]
        );
    }

    #[test]
    fn every_kind_in_one_line() {
        let spans = text_to_spans(
            "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        )
        .unwrap();

        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                TextSpan::Bold("text".into()),
                TextSpan::plain(" with an "),
                TextSpan::Italic("italic".into()),
                TextSpan::plain(" word and a "),
                TextSpan::Code("code block".into()),
                TextSpan::plain(" and an "),
                TextSpan::Image {
                    alt: "obi wan image".into(),
                    url: "https://i.imgur.com/fJRm4Vk.jpeg".into(),
                },
                TextSpan::plain(" and a "),
                TextSpan::Link {
                    text: "link".into(),
                    url: "https://boot.dev".into(),
                },
            ]
        );
    }

    #[test]
    fn underscores_in_urls_are_not_italic() {
        let spans = text_to_spans("see [docs](https://example.com/a_b_c) now").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("see "),
                TextSpan::Link {
                    text: "docs".into(),
                    url: "https://example.com/a_b_c".into(),
                },
                TextSpan::plain(" now"),
            ]
        );
    }

    #[test]
    fn image_is_matched_before_link() {
        let spans = text_to_spans("![alt](u.png) and [link](v.com)").unwrap();
        assert!(matches!(spans[0], TextSpan::Image { .. }));
        assert!(matches!(spans[2], TextSpan::Link { .. }));
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn unbalanced_emphasis_fails_the_whole_text() {
        let err = text_to_spans("a **bold** and _dangling").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedInlineMarkup { ref delimiter, .. } if delimiter == "_"
        ));
    }
}
