//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in vec64.
//!
//! # Example
//!
//! ```
//! use vec64::prelude::*;
//!
//! let symbols = vectorize("aGVsbG8=");
//! for span in split(&symbols).unwrap() {
//!     println!("{:?} {}", span, span.probability());
//! }
//! let codes = pair_encode(&symbols, 0).unwrap();
//! assert_eq!(pair_decode(&codes).unwrap(), symbols);
//! ```

pub use crate::{
    // Lattice
    CTypeInfo,
    CharType,

    // Errors
    SymbolError,
    UnknownCategoryError,

    // Splitting
    Span,
    SplitOptions,

    // Config
    Vec64Config,

    // Core operations
    pair_decode,
    pair_encode,
    probability,
    split,
    split_with,
    unvectorize,
    vectorize,
    vectorize_with,
};
