use crate::{
    error::{ParseError, ParseResult},
    html::HtmlNode,
    parsing::{blocks::BlockKind, inline::text_to_children},
};

/// ATX heading block type: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the level if `block` opens with 1-6 markers, a space, and
    /// some text.
    pub fn level(block: &str) -> Option<u8> {
        let (hashes, text) = block.split_once(' ')?;
        if text.is_empty() || !Self::is_marker_run(hashes) {
            return None;
        }
        u8::try_from(hashes.len())
            .ok()
            .filter(|level| *level <= Self::MAX_LEVEL)
    }

    /// Builds `<h{level}>` from a heading block.
    ///
    /// The level is the marker count, capped at [`Heading::MAX_LEVEL`].
    pub fn to_node(block: &str) -> ParseResult<HtmlNode> {
        let markers = block.chars().take_while(|&c| c == Self::MARKER).count();
        let level = markers.min(usize::from(Self::MAX_LEVEL)) as u8;
        let malformed = |reason: &'static str| ParseError::MalformedBlockStructure {
            kind: BlockKind::Heading { level },
            line: block.lines().next().unwrap_or_default().to_string(),
            reason,
        };

        let (hashes, text) = block
            .split_once(' ')
            .ok_or_else(|| malformed("missing space after the heading marker"))?;
        if !Self::is_marker_run(hashes) {
            return Err(malformed("heading must start with `#` markers"));
        }

        Ok(HtmlNode::element(
            format!("h{level}"),
            text_to_children(text)?,
        ))
    }

    fn is_marker_run(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c == Self::MARKER)
    }
}
