use std::sync::OnceLock;

use regex::Regex;

use super::{BracketMatch, bracket_matches};

/// Link inline type: `[text](url)`.
///
/// The pattern also matches the bracket part of an image, so images must
/// be split out before links.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\]]+)\]\(([^)]+)\)";

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    /// Every non-overlapping occurrence in `text`, left to right.
    pub fn extract(text: &str) -> Vec<BracketMatch<'_>> {
        bracket_matches(Self::regex(), text)
    }
}
