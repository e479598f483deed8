//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Delimiter`**: `BOLD` (`**`), `ITALIC` (`_`), `CODE` (backtick)
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern
//!
//! The splitters take these constants and extractors; they never hardcode
//! a marker or a pattern.

use std::ops::Range;

use regex::Regex;

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::Link;

/// One `[label](url)`-shaped occurrence and its byte range in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketMatch<'a> {
    pub range: Range<usize>,
    pub label: &'a str,
    pub url: &'a str,
}

fn bracket_matches<'a>(pattern: &Regex, text: &'a str) -> Vec<BracketMatch<'a>> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            Some(BracketMatch {
                range: caps.get(0)?.range(),
                label: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}
