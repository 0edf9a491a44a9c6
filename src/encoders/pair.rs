//! Packing of adjacent symbol indexes into a single code.
//!
//! A pair `(a, b)` packs to `b * 64 + a`. The pad pair `(64, 64)` would
//! pack to `65 * 64`, which is out of the formula's range, so it gets the
//! dedicated code [`PAD_PAIR_CODE`] instead.
//!
//! The packing is not injective when a pad symbol comes first: `(64, b)`
//! packs to the same code as `(0, b + 1)` and decodes as the latter. Every
//! other pair round-trips.

use super::errors::SymbolError;
use super::vectorize::PAD_SYMBOL;

/// Code reserved for the pair `(64, 64)`.
pub const PAD_PAIR_CODE: u16 = 4160;

/// Highest valid pair code.
pub const MAX_PAIR_CODE: u16 = PAD_PAIR_CODE;

/// Two-byte literal a [`PAD_PAIR_CODE`] decodes to (`b"@@"`).
pub const PAD_PAIR: [u8; 2] = [PAD_SYMBOL, PAD_SYMBOL];

/// Pack one pair of symbol indexes.
pub fn encode_pair(first: u8, second: u8) -> Result<u16, SymbolError> {
    if first > PAD_SYMBOL {
        return Err(SymbolError::InvalidSymbol {
            value: first,
            position: 0,
        });
    }
    if second > PAD_SYMBOL {
        return Err(SymbolError::InvalidSymbol {
            value: second,
            position: 1,
        });
    }

    match (first, second) {
        (PAD_SYMBOL, PAD_SYMBOL) => Ok(PAD_PAIR_CODE),
        _ => Ok(u16::from(second) * 64 + u16::from(first)),
    }
}

/// Unpack one pair code.
pub fn decode_pair(code: u16) -> Result<[u8; 2], SymbolError> {
    match code {
        PAD_PAIR_CODE => Ok(PAD_PAIR),
        0..PAD_PAIR_CODE => Ok([(code & 63) as u8, (code >> 6) as u8]),
        _ => Err(SymbolError::InvalidPairCode { code, position: 0 }),
    }
}

/// Pack symbol indexes two at a time, starting at offset `start`.
///
/// A trailing unpaired symbol is left out, as is everything before
/// `start`.
///
/// ```
/// use vec64::{pair_encode, vectorize};
///
/// let codes = pair_encode(&vectorize("hello=="), 1).unwrap();
/// assert_eq!(codes, [37 << 6 | 30, 40 << 6 | 37, 4160]);
/// ```
///
/// # Errors
///
/// Returns [`SymbolError::InvalidSymbol`] for indexes above 64.
pub fn pair_encode(symbols: &[u8], start: usize) -> Result<Vec<u16>, SymbolError> {
    let Some(tail) = symbols.get(start..) else {
        return Ok(Vec::new());
    };

    tail.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let offset = start + 2 * i;
            encode_pair(pair[0], pair[1]).map_err(|e| {
                let position = offset + e.position();
                e.at(position)
            })
        })
        .collect()
}

/// Inverse of [`pair_encode`].
///
/// # Errors
///
/// Returns [`SymbolError::InvalidPairCode`] for codes above 4160.
pub fn pair_decode(codes: &[u16]) -> Result<Vec<u8>, SymbolError> {
    let mut symbols = Vec::with_capacity(codes.len() * 2);
    for (position, &code) in codes.iter().enumerate() {
        let pair = decode_pair(code).map_err(|e| e.at(position))?;
        symbols.extend_from_slice(&pair);
    }
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::vectorize::vectorize;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use std::collections::HashSet;

    #[test]
    fn test_individual_pairs() {
        let cases: [(&str, u16); 11] = [
            ("AA", 0 * 64 + 0),
            ("/A", 0 * 64 + 63),
            ("AB", 1 * 64 + 0),
            ("/B", 1 * 64 + 63),
            ("A/", 63 * 64 + 0),
            ("//", 63 * 64 + 63),
            ("A=", 64 * 64 + 0),
            ("/=", 64 * 64 + 63),
            ("==", 64 * 64 + 64),
            ("Cj", 35 * 64 + 2),
            ("o=", 64 * 64 + 40),
        ];
        for (text, expected) in cases {
            assert_eq!(pair_encode(&vectorize(text), 0).unwrap(), vec![expected], "{}", text);
        }
    }

    #[test]
    fn test_sequences() {
        let cases: [(&str, usize, Vec<u16>); 7] = [
            ("", 0, vec![]),
            ("hello", 0, vec![(30 << 6) | 33, (37 << 6) | 37]),
            ("hello=", 0, vec![(30 << 6) | 33, (37 << 6) | 37, (64 << 6) | 40]),
            ("hello==", 0, vec![(30 << 6) | 33, (37 << 6) | 37, (64 << 6) | 40]),
            ("hello", 1, vec![(37 << 6) | 30, (40 << 6) | 37]),
            ("hello=", 1, vec![(37 << 6) | 30, (40 << 6) | 37]),
            ("hello==", 1, vec![(37 << 6) | 30, (40 << 6) | 37, (64 << 6) | 64]),
        ];
        for (text, start, expected) in cases {
            assert_eq!(
                pair_encode(&vectorize(text), start).unwrap(),
                expected,
                "{} from {}",
                text,
                start
            );
        }
    }

    #[test]
    fn test_start_past_end() {
        assert_eq!(pair_encode(&vectorize("hello"), 5).unwrap(), Vec::<u16>::new());
        assert_eq!(pair_encode(&vectorize("hello"), 50).unwrap(), Vec::<u16>::new());
    }

    #[test]
    fn test_round_trip_sub_sequence() {
        let symbols = vectorize("aGVsbG8gd29ybGQ==");
        for start in 0..symbols.len() {
            let codes = pair_encode(&symbols, start).unwrap();
            let paired = (symbols.len() - start) / 2 * 2;
            assert_eq!(pair_decode(&codes).unwrap(), &symbols[start..start + paired]);
        }
    }

    #[test]
    fn test_every_code_round_trips() {
        for code in 0..=MAX_PAIR_CODE {
            let pair = decode_pair(code).unwrap();
            assert_eq!(encode_pair(pair[0], pair[1]).unwrap(), code);
        }
    }

    #[test]
    fn test_shuffled_codes_decode_to_distinct_pairs() {
        let mut codes: Vec<u16> = (0..=MAX_PAIR_CODE).collect();
        let mut rng = StdRng::seed_from_u64(186283);
        codes.shuffle(&mut rng);

        let decoded = pair_decode(&codes).unwrap();
        assert_eq!(decoded.len(), 2 * 4161);

        let pairs: HashSet<&[u8]> = decoded.chunks_exact(2).collect();
        assert_eq!(pairs.len(), 4161);

        assert_eq!(pair_encode(&decoded, 0).unwrap(), codes);
    }

    #[test]
    fn test_pad_pair_sentinel() {
        assert_eq!(pair_decode(&[PAD_PAIR_CODE]).unwrap(), b"@@");
        assert_eq!(decode_pair(0).unwrap(), [0, 0]);
    }

    #[test]
    fn test_pad_before_symbol_shares_a_code() {
        // "A=BC" keeps the symbols after the pad marker
        let symbols = vectorize("A=BC");
        assert_eq!(symbols, [0, 64, 1, 2]);
        assert_eq!(pair_encode(&symbols, 1).unwrap(), vec![1 * 64 + 64]);
        assert_eq!(pair_encode(&[1, 2, 64, 5], 0).unwrap(), vec![2 * 64 + 1, 5 * 64 + 64]);

        assert_eq!(encode_pair(PAD_SYMBOL, 1).unwrap(), encode_pair(0, 2).unwrap());
        assert_eq!(encode_pair(PAD_SYMBOL, 63).unwrap(), 4096);
        assert_eq!(decode_pair(128).unwrap(), [0, 2]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            pair_decode(&[0, 4161]),
            Err(SymbolError::InvalidPairCode {
                code: 4161,
                position: 1
            })
        );
        assert_eq!(
            pair_encode(&[1, 2, 3, 65], 0),
            Err(SymbolError::InvalidSymbol {
                value: 65,
                position: 3
            })
        );
        // The pad lands in the unpaired tail
        assert_eq!(pair_encode(&[1, 2, 64, 5], 1).unwrap(), vec![(64 << 6) | 2]);
    }
}
