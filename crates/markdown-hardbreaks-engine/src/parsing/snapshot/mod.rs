//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a block forest as a stable, indented text outline
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (coverage with no
//!   gaps, line alignment, children contained in parents, protected ranges
//!   sorted and disjoint)

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_protected};
pub use normalize::{normalize, outline};
