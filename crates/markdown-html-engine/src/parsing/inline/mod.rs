//! # Inline Parsing
//!
//! Splitter-based inline parsing over the text of a single block.
//!
//! ## Architecture
//!
//! Inline text starts life as one `TextSpan::Plain`. A fixed sequence of
//! passes refines the plain spans; spans that a pass has already typed are
//! never rescanned. There is no nesting: `**_x_**` yields a bold span whose
//! text is `_x_`.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` enum (Plain, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned syntax (Delimiter, Image, Link)
//! - **`split`**: the delimiter splitter and the image/link pattern splitters
//! - **`pipeline`**: `text_to_spans()`, the ordered composition of all passes
//! - **`convert`**: `span_to_node()` and `text_to_children()`
//!
//! ## Error Asymmetry
//!
//! An unbalanced delimiter is an error. A bracket/paren construct that does
//! not fit the image or link pattern is left as plain text.

pub mod convert;
pub mod kinds;
pub mod pipeline;
pub mod split;
pub mod types;

pub use convert::{span_to_node, text_to_children};
pub use pipeline::text_to_spans;
pub use split::{split_by_delimiter, split_images, split_links};
pub use types::{DelimitedStyle, TextSpan};
