//! # Inline Scanning
//!
//! The conversion engine only needs one inline fact: where the code spans are.
//! Code spans are raw zones, so a line break inside one is part of the code and
//! must not be rewritten.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with absolute positions
//! - **`code_span`**: `code_spans()` finds backtick-delimited spans

pub mod code_span;
pub mod cursor;

pub use code_span::{CodeSpan, code_spans};
