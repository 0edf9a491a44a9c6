pub mod errors;
pub mod pair;
pub mod vectorize;

// Re-export the public API of the codecs
pub use errors::{SymbolError, UnknownCategoryError, disable_color, find_closest_category};
pub use pair::{MAX_PAIR_CODE, PAD_PAIR, PAD_PAIR_CODE, decode_pair, encode_pair, pair_decode, pair_encode};
pub use vectorize::{ALPHABET, PAD_MARKER, PAD_SYMBOL, symbol_index, unvectorize, vectorize, vectorize_with};
