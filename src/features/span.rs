use serde::Serialize;

use crate::core::ctype::{CTypeInfo, CharType};
use crate::core::probability::probability;

/// A typed range `[start, limit)` of a symbol vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub limit: usize,
    pub ctype: CharType,
}

impl Span {
    pub fn new(start: usize, limit: usize, ctype: CharType) -> Self {
        Span {
            start,
            limit,
            ctype,
        }
    }

    /// The number of symbols in this span.
    pub fn len(&self) -> usize {
        self.limit - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.limit
    }

    pub fn ctype_info(&self) -> &'static CTypeInfo {
        self.ctype.info()
    }

    /// The probability a random span of this length would have this type.
    pub fn probability(&self) -> f64 {
        probability(self.ctype, self.len())
    }
}

impl From<(usize, usize, CharType)> for Span {
    fn from((start, limit, ctype): (usize, usize, CharType)) -> Self {
        Span::new(start, limit, ctype)
    }
}

impl PartialEq<(usize, usize, CharType)> for Span {
    fn eq(&self, other: &(usize, usize, CharType)) -> bool {
        (self.start, self.limit, self.ctype) == *other
    }
}
