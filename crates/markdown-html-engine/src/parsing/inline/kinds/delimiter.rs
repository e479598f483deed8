use crate::parsing::inline::types::DelimitedStyle;

/// A symmetric inline delimiter and the style it produces.
///
/// Delimiters do not nest: text claimed by one delimiter is never
/// rescanned for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub style: DelimitedStyle,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        style: DelimitedStyle::Bold,
    };

    pub const ITALIC: Delimiter = Delimiter {
        marker: "_",
        style: DelimitedStyle::Italic,
    };

    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        style: DelimitedStyle::Code,
    };
}
