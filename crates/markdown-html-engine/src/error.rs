use crate::parsing::blocks::BlockKind;

/// Errors raised while converting a Markdown document.
///
/// Conversion is all-or-nothing: the first error aborts the whole document
/// and no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An inline delimiter (`**`, `_`, `` ` ``) has no partner within a
    /// single plain-text run.
    #[error("Unbalanced {delimiter:?} delimiter in: {text:?}")]
    MalformedInlineMarkup { delimiter: String, text: String },

    /// A block line does not follow the shape its block kind requires.
    #[error("Malformed {kind} block at line {line:?}: {reason}")]
    MalformedBlockStructure {
        kind: BlockKind,
        line: String,
        reason: &'static str,
    },
}

pub type ParseResult<T> = Result<T, ParseError>;
