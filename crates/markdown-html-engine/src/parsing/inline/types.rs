/// A contiguous run of inline text carrying one style or role.
///
/// Only `Link` and `Image` carry a URL; the other variants cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    /// Text not (yet) claimed by any inline construct.
    Plain(String),
    Bold(String),
    Italic(String),
    /// Inline code. Contents are literal.
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSpan::Plain(text.into())
    }

    /// Display text, or alt text for images.
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url),
            TextSpan::Plain(_) | TextSpan::Bold(_) | TextSpan::Italic(_) | TextSpan::Code(_) => {
                None
            }
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, TextSpan::Plain(_))
    }
}

/// Span styles produced by the delimiter splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimitedStyle {
    Bold,
    Italic,
    Code,
}

impl DelimitedStyle {
    /// Wraps `text` in a span of this style.
    pub fn span(self, text: impl Into<String>) -> TextSpan {
        let text = text.into();
        match self {
            DelimitedStyle::Bold => TextSpan::Bold(text),
            DelimitedStyle::Italic => TextSpan::Italic(text),
            DelimitedStyle::Code => TextSpan::Code(text),
        }
    }
}
