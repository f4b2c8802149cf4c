pub mod convert;
pub mod document;
pub mod format;
pub mod incremental;
pub mod parsing;

// Re-export key types for easier usage
pub use convert::{
    Conversion, convert_document, convert_range, convert_text, find_candidates, normalize_line,
};
pub use document::{Document, EngineError};
pub use format::{HardBreakFormat, UnknownFormat};
pub use incremental::{EditOutcome, EditorHost, IncrementalController, LineBuffer, Position, convert_host};
