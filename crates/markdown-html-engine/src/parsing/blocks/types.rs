use std::fmt;

/// The structural kind of a block.
///
/// A pure function of the block's text, see [`classify`](super::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Running text (default when no other kind matches).
    Paragraph,
    /// An ATX heading, `level` in `1..=6`.
    Heading { level: u8 },
    /// A block wrapped in ``` fences. Raw zone: no inline parsing inside.
    CodeFence,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Paragraph => f.write_str("paragraph"),
            BlockKind::Heading { level } => write!(f, "heading (level {level})"),
            BlockKind::CodeFence => f.write_str("code fence"),
            BlockKind::Quote => f.write_str("quote"),
            BlockKind::UnorderedList => f.write_str("unordered list"),
            BlockKind::OrderedList => f.write_str("ordered list"),
        }
    }
}
