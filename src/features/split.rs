//! Splitting symbol vectors into typed runs.
//!
//! A run starts out typed by the narrowest category of its first symbol.
//! When a symbol doesn't fit the run's category, the run so far is emitted
//! and the category is generalized, so one logical run can produce several
//! spans sharing a start, each longer and more general than the last.
//! Symbols of the separator category end the run and are emitted on their
//! own.

use crate::core::ctype::CharType;
use crate::encoders::errors::SymbolError;

use super::span::Span;

/// Options for [`split_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Category that ends a run, or `None` to never break runs.
    pub sep: Option<CharType>,
    /// Maximum number of separator breaks, starting from the left. Values
    /// less than one mean no limit.
    pub maxsplit: i64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            sep: Some(CharType::Punct),
            maxsplit: -1,
        }
    }
}

impl SplitOptions {
    pub fn with_sep(mut self, sep: Option<CharType>) -> Self {
        self.sep = sep;
        self
    }

    pub fn with_maxsplit(mut self, maxsplit: i64) -> Self {
        self.maxsplit = maxsplit;
        self
    }

    /// Remaining separator breaks, `None` when unbounded.
    fn budget(&self) -> Option<u64> {
        u64::try_from(self.maxsplit).ok().filter(|&n| n > 0)
    }
}

/// Split a symbol vector on [`CharType::Punct`] with no split limit.
///
/// ```
/// use vec64::{CharType, split, vectorize};
///
/// let spans = split(&vectorize("hello")).unwrap();
/// assert_eq!(spans, [(0, 5, CharType::Lower)]);
/// ```
pub fn split(symbols: &[u8]) -> Result<Vec<Span>, SymbolError> {
    split_with(symbols, &SplitOptions::default())
}

/// Return a list of typed ranges in a symbol vector.
///
/// Once `maxsplit` separators have been consumed, further separator
/// symbols are treated like any other symbol.
///
/// # Errors
///
/// Returns [`SymbolError::InvalidSymbol`] for any index above 64.
pub fn split_with(symbols: &[u8], options: &SplitOptions) -> Result<Vec<Span>, SymbolError> {
    let mut spans = Vec::new();
    let mut budget = options.budget();
    let mut open: Option<(usize, CharType)> = None;

    for (i, &symbol) in symbols.iter().enumerate() {
        let ctype = CharType::of_symbol(symbol).map_err(|e| e.at(i))?;

        if options.sep == Some(ctype) && budget != Some(0) {
            if let Some((start, current)) = open.take() {
                spans.push(Span::new(start, i, current));
            }
            spans.push(Span::new(i, i + 1, ctype));
            if let Some(remaining) = budget.as_mut() {
                *remaining -= 1;
            }
            continue;
        }

        if let Some((start, current)) = open.as_mut() {
            // BASE64 absorbs everything, so this ends
            while !current.absorbs(ctype) {
                spans.push(Span::new(*start, i, *current));
                *current = current.generalize(ctype);
            }
        } else {
            open = Some((i, ctype));
        }
    }

    if let Some((start, current)) = open {
        spans.push(Span::new(start, symbols.len(), current));
    }

    Ok(spans)
}
