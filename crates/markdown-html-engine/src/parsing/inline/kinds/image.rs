use std::sync::OnceLock;

use regex::Regex;

use super::{BracketMatch, bracket_matches};

/// Image inline type: `![alt](url)`.
///
/// Alt text may be empty; the URL may not.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\]]*)\]\(([^)]+)\)";

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }

    /// Every non-overlapping occurrence in `text`, left to right.
    pub fn extract(text: &str) -> Vec<BracketMatch<'_>> {
        bracket_matches(Self::regex(), text)
    }
}
