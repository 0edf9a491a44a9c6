//! Run classification.
//!
//! This module splits symbol vectors into typed spans over the
//! character-type lattice defined in [`crate::core`].

pub mod span;
pub mod split;

// Re-export main types and functions for convenience
pub use span::Span;
pub use split::{SplitOptions, split, split_with};
