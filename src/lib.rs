//! Base64 symbol analysis.
//!
//! Text is turned into a vector of symbol indexes (0-63 for the Base64
//! alphabet, 64 for padding) by [`vectorize`]. The vector can then be
//! [`split`] into [`Span`]s typed by a lattice of sixteen [`CharType`]s,
//! each span carrying the [`probability`] that a random sequence of its
//! length would be classified exactly that way, or packed two symbols at a
//! time with [`pair_encode`].
//!
//! ```
//! use vec64::{CharType, split, vectorize};
//!
//! let spans = split(&vectorize("/hello/World4")).unwrap();
//! assert_eq!(spans[1], (1, 6, CharType::Lower));
//! assert_eq!(spans.last().unwrap().ctype, CharType::Alnum);
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::config::CONFIG_FILE_NAME;
pub use crate::core::{
    CTypeInfo, CTypeSet, CharType, OutputSettings, PairSettings, SplitSettings, Vec64Config,
    VectorizeSettings, exact_probabilities, parse_separator, probability,
};
pub use crate::encoders::{
    ALPHABET, MAX_PAIR_CODE, PAD_MARKER, PAD_PAIR, PAD_PAIR_CODE, PAD_SYMBOL, SymbolError,
    UnknownCategoryError, decode_pair, disable_color, encode_pair, find_closest_category,
    pair_decode, pair_encode, symbol_index, unvectorize, vectorize, vectorize_with,
};
pub use crate::features::{Span, SplitOptions, split, split_with};
