//! # Block Parsing
//!
//! Builds the minimal block tree the conversion engine needs.
//!
//! ## Phases
//!
//! 1. **Frontmatter** (`kinds::frontmatter`): a leading `---` block is split off
//!    before anything else looks at the text.
//! 2. **Block construction** (`builder`): the remainder goes through
//!    pulldown-cmark's offset iterator and a `BlockBuilder` folds the events into
//!    line-aligned `BlockNode`s, nesting blockquote contents as children.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`
//! - **`kinds`**: syntax owned by this crate (frontmatter, blockquote prefixes)
//! - **`builder`**: `BlockBuilder` event folding and gap filling
//!
//! ## Key Invariants
//!
//! - Top-level nodes cover the document with no gaps or overlaps
//! - A blockquote's children cover the blockquote's span the same way
//! - All node spans are line-aligned byte spans into the document

pub mod builder;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, markdown_options};
pub use types::{BlockKind, BlockNode};
