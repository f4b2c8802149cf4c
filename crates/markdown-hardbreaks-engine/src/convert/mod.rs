//! # Conversion
//!
//! Soft-to-hard line break conversion, in two modes that share one notion of
//! what a soft break is:
//!
//! - **Batch** (`batch`): parse the whole document, resolve protected ranges,
//!   and rewrite every eligible boundary inside multi-line paragraphs in one
//!   delta.
//! - **Single line** (`rewrite::normalize_line`): the same classification and
//!   rewrite applied to one line with no structural context, used by the
//!   incremental controller.
//!
//! ## Modules
//!
//! - **`classify`**: `classify()` decides what a line's trailing boundary is
//! - **`protect`**: `resolve()` computes the byte ranges that are never rewritten
//! - **`rewrite`**: marker stripping and the per-line rewrite primitive
//! - **`batch`**: `convert_document()`, `convert_range()` and candidate discovery

pub mod batch;
pub mod classify;
pub mod protect;
pub mod rewrite;

pub use batch::{
    BreakCandidate, Conversion, Rewrite, convert_document, convert_range, convert_text,
    find_candidates,
};
pub use classify::{LineBreak, classify};
pub use protect::{ProtectedRange, Protection, resolve};
pub use rewrite::{normalize_line, plan_line};
