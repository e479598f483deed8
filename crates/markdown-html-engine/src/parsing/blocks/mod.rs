//! # Block Parsing
//!
//! Blank-line based block parsing. There is no container stack: a block
//! is everything between two blank lines, and its kind is decided by
//! looking at its text as a whole.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines and every
//!    line is trimmed; empty blocks are dropped
//!
//! 2. **Classification** (`classify`): each block gets exactly one
//!    `BlockKind`, paragraph being the fallback
//!
//! 3. **Conversion** (`convert`): `block_to_node` dispatches on the kind and
//!    hands the block's text to the matching kind type
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned syntax and node builders
//!   (Heading, CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks`
//! - **`classify`**: `classify`
//! - **`convert`**: `block_to_node`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Quote and list kinds require every line to match, otherwise the block
//!   is a paragraph

pub mod classify;
pub mod convert;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use convert::block_to_node;
pub use split::split_blocks;
pub use types::BlockKind;
