use crate::error::{ParseError, ParseResult};

use super::{
    kinds::{BracketMatch, Image, Link},
    types::{DelimitedStyle, TextSpan},
};

/// Splits every plain span on `delimiter`, turning the enclosed parts into
/// spans of `style`.
///
/// Parts at odd positions are enclosed; parts at even positions stay plain,
/// empty ones included, so a balanced run of `n` parts always yields `n`
/// spans that start and end plain. Non-plain spans pass through untouched.
///
/// # Errors
/// [`ParseError::MalformedInlineMarkup`] if a plain span holds an odd
/// number of delimiters.
pub fn split_by_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    style: DelimitedStyle,
) -> ParseResult<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        match span {
            TextSpan::Plain(text) => {
                let parts: Vec<&str> = text.split(delimiter).collect();
                if parts.len() % 2 == 0 {
                    return Err(ParseError::MalformedInlineMarkup {
                        delimiter: delimiter.to_string(),
                        text: text.clone(),
                    });
                }
                out.extend(parts.into_iter().enumerate().map(|(i, part)| {
                    if i % 2 == 0 {
                        TextSpan::plain(part)
                    } else {
                        style.span(part)
                    }
                }));
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Splits `![alt](url)` occurrences out of every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_by_pattern(spans, Image::extract, |alt, url| TextSpan::Image {
        alt: alt.to_string(),
        url: url.to_string(),
    })
}

/// Splits `[text](url)` occurrences out of every plain span.
///
/// Run [`split_images`] first: the link pattern also matches the bracket
/// part of an image.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_by_pattern(spans, Link::extract, |text, url| TextSpan::Link {
        text: text.to_string(),
        url: url.to_string(),
    })
}

/// Shared scan for the bracket/paren patterns.
///
/// Plain runs around matches are kept only when non-empty. A plain span
/// without any match is passed through as is.
fn split_by_pattern(
    spans: Vec<TextSpan>,
    extract: fn(&str) -> Vec<BracketMatch<'_>>,
    make: impl Fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let matches = extract(&text);
        if matches.is_empty() {
            out.push(TextSpan::Plain(text));
            continue;
        }

        let mut last = 0;
        for found in &matches {
            push_plain(&mut out, &text[last..found.range.start]);
            out.push(make(found.label, found.url));
            last = found.range.end;
        }
        push_plain(&mut out, &text[last..]);
    }

    out
}

fn push_plain(out: &mut Vec<TextSpan>, run: &str) {
    if !run.is_empty() {
        out.push(TextSpan::plain(run));
    }
}
