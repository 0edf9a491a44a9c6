//! Exact-classification probabilities.
//!
//! `probability(T, n)` is the chance that `n` symbols drawn uniformly from
//! the 64-symbol alphabet are classified as exactly `T`:
//!
//! ```text
//! probability(T, n) = (|symbols(T)| / 64)^n - Σ probability(E, n) for E in exclusions(T)
//! ```
//!
//! Exclusions always precede their category in [`CharType::ALL`], so one
//! forward pass over the lattice evaluates every category for a length.

use crate::core::ctype::CharType;

/// Probability of every category for one sequence length, indexed by
/// [`CharType::index`].
pub fn exact_probabilities(length: usize) -> [f64; CharType::COUNT] {
    let mut table = [0.0; CharType::COUNT];

    for ctype in CharType::ALL {
        let info = ctype.info();
        table[ctype.index()] = if length == 0 {
            // The empty sequence fits any non-empty symbol set
            if info.symbols().is_empty() { 0.0 } else { 1.0 }
        } else {
            let covered = power(info.unit_probability(), length);
            covered
                - info
                    .exclusions()
                    .iter()
                    .map(|excluded| table[excluded.index()])
                    .sum::<f64>()
        };
    }

    table
}

/// Probability that a random sequence of `length` symbols is classified as
/// exactly `ctype`.
pub fn probability(ctype: CharType, length: usize) -> f64 {
    exact_probabilities(length)[ctype.index()]
}

fn power(base: f64, exponent: usize) -> f64 {
    match i32::try_from(exponent) {
        Ok(exponent) => base.powi(exponent),
        Err(_) => base.powf(exponent as f64),
    }
}
