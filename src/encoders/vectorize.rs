//! Base64 text to symbol indexes and back.

use super::errors::SymbolError;

/// The 64 alphabet symbols, in index order.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Symbol index used for padding by default.
pub const PAD_SYMBOL: u8 = 64;

/// The pad marker character.
pub const PAD_MARKER: u8 = b'=';

/// At most this many pad markers are recognised.
const MAX_PADDING: usize = 2;

const INVALID: u8 = 0xFF;

const SYMBOL_INDEX_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Index of an alphabet symbol, or `None` for any other byte.
pub const fn symbol_index(byte: u8) -> Option<u8> {
    match SYMBOL_INDEX_TABLE[byte as usize] {
        INVALID => None,
        index => Some(index),
    }
}

/// Convert Base64 text into symbol indexes, padding with [`PAD_SYMBOL`].
///
/// ```
/// use vec64::vectorize;
///
/// assert_eq!(vectorize("hello"), [33, 30, 37, 37, 40]);
/// assert_eq!(vectorize("hello==="), [33, 30, 37, 37, 40, 64, 64]);
/// ```
pub fn vectorize(input: impl AsRef<[u8]>) -> Vec<u8> {
    vectorize_with(input, PAD_SYMBOL)
}

/// Convert Base64 text into symbol indexes.
///
/// Alphabet symbols become their index (0-63). Up to two `=` become
/// `pad_with`; any further `=` is dropped. Every other byte is dropped too,
/// and once one has been seen no later `=` is recognised as padding.
pub fn vectorize_with(input: impl AsRef<[u8]>, pad_with: u8) -> Vec<u8> {
    let input = input.as_ref();
    let mut symbols = Vec::with_capacity(input.len());
    let mut pad_count = 0usize;
    let mut pad_locked = false;

    for &byte in input {
        if let Some(index) = symbol_index(byte) {
            symbols.push(index);
        } else if byte == PAD_MARKER {
            if !pad_locked && pad_count < MAX_PADDING {
                symbols.push(pad_with);
                pad_count += 1;
            }
        } else {
            pad_locked = true;
        }
    }

    symbols
}

/// Inverse of [`vectorize`]: map symbol indexes back to text.
///
/// [`PAD_SYMBOL`] maps back to `=`.
///
/// # Errors
///
/// Returns [`SymbolError::InvalidSymbol`] for any index above 64.
pub fn unvectorize(symbols: &[u8]) -> Result<String, SymbolError> {
    symbols
        .iter()
        .enumerate()
        .map(|(position, &symbol)| match symbol {
            PAD_SYMBOL => Ok(char::from(PAD_MARKER)),
            _ => ALPHABET
                .get(symbol as usize)
                .map(|&byte| char::from(byte))
                .ok_or(SymbolError::InvalidSymbol {
                    value: symbol,
                    position,
                }),
        })
        .collect()
}
