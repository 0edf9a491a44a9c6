//! Character-type lattice.
//!
//! Every symbol index belongs to exactly one of seven narrow categories
//! (six atomic alphabet partitions plus the pad sentinel). Runs of symbols
//! are classified by the smallest category whose members cover the whole
//! run; those categories form a join-semilattice with [`CharType::Base64`]
//! on top.
//!
//! Each category is described by a [`CTypeInfo`] record holding its nominal
//! symbol string and its exclusion set: the narrower categories whose
//! probability mass has to be removed to get the probability of being
//! classified as *exactly* this category (see [`probability`](crate::probability())).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitAnd;
use std::sync::OnceLock;

use crate::encoders::errors::{SymbolError, UnknownCategoryError, find_closest_category};
use crate::encoders::vectorize::{ALPHABET, PAD_SYMBOL, symbol_index};

/// Classification of a run of symbol indexes.
///
/// Variants are declared in construction order: every category's
/// exclusions are declared before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharType {
    /// `A-F`
    UpperAlphahex,
    /// `a-f`
    LowerAlphahex,
    /// `0-9`
    Decimal,
    /// `+` and `/`
    Punct,
    /// `A-Z`
    Upper,
    /// `a-z`
    Lower,
    /// `A-Fa-f`
    Alphahex,
    /// `A-F0-9`
    Upperhex,
    /// `a-f0-9`
    Lowerhex,
    /// `A-Fa-f0-9`
    Hex,
    /// `A-Za-z`
    Alpha,
    /// `A-Z0-9`
    UpperAlnum,
    /// `a-z0-9`
    LowerAlnum,
    /// `A-Za-z0-9`
    Alnum,
    /// Everything
    Base64,
    /// The pad sentinel (symbol index 64)
    Pad,
}

impl CharType {
    /// Number of categories in the lattice.
    pub const COUNT: usize = 16;

    /// All categories, in construction order.
    pub const ALL: [CharType; Self::COUNT] = [
        CharType::UpperAlphahex,
        CharType::LowerAlphahex,
        CharType::Decimal,
        CharType::Punct,
        CharType::Upper,
        CharType::Lower,
        CharType::Alphahex,
        CharType::Upperhex,
        CharType::Lowerhex,
        CharType::Hex,
        CharType::Alpha,
        CharType::UpperAlnum,
        CharType::LowerAlnum,
        CharType::Alnum,
        CharType::Base64,
        CharType::Pad,
    ];

    /// Position of this category in [`CharType::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical upper-case name, e.g. `"UPPER_ALPHAHEX"`.
    pub const fn name(self) -> &'static str {
        match self {
            CharType::UpperAlphahex => "UPPER_ALPHAHEX",
            CharType::LowerAlphahex => "LOWER_ALPHAHEX",
            CharType::Decimal => "DECIMAL",
            CharType::Punct => "PUNCT",
            CharType::Upper => "UPPER",
            CharType::Lower => "LOWER",
            CharType::Alphahex => "ALPHAHEX",
            CharType::Upperhex => "UPPERHEX",
            CharType::Lowerhex => "LOWERHEX",
            CharType::Hex => "HEX",
            CharType::Alpha => "ALPHA",
            CharType::UpperAlnum => "UPPER_ALNUM",
            CharType::LowerAlnum => "LOWER_ALNUM",
            CharType::Alnum => "ALNUM",
            CharType::Base64 => "BASE64",
            CharType::Pad => "PAD",
        }
    }

    /// Parse a category name.
    ///
    /// Matching ignores case and treats `-` like `_`, so `upper-alnum`
    /// and `UPPER_ALNUM` are the same category.
    pub fn from_name(name: &str) -> Result<Self, UnknownCategoryError> {
        let wanted = name.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|ctype| ctype.name() == wanted)
            .ok_or_else(|| {
                let available: Vec<String> =
                    Self::ALL.iter().map(|c| c.name().to_string()).collect();
                let suggestion = find_closest_category(&wanted, &available);
                UnknownCategoryError::new(name, suggestion)
            })
    }

    /// The narrowest category containing a symbol index.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidSymbol`] for values above 64. The
    /// reported position is 0; callers scanning a sequence should use
    /// [`SymbolError::at`] to fix it up.
    pub fn of_symbol(symbol: u8) -> Result<Self, SymbolError> {
        match symbol {
            0..=5 => Ok(CharType::UpperAlphahex),
            6..=25 => Ok(CharType::Upper),
            26..=31 => Ok(CharType::LowerAlphahex),
            32..=51 => Ok(CharType::Lower),
            52..=61 => Ok(CharType::Decimal),
            62..=63 => Ok(CharType::Punct),
            PAD_SYMBOL => Ok(CharType::Pad),
            _ => Err(SymbolError::InvalidSymbol {
                value: symbol,
                position: 0,
            }),
        }
    }

    /// Lattice record for this category.
    pub fn info(self) -> &'static CTypeInfo {
        &lattice().infos[self.index()]
    }

    /// The smallest category covering every member of both operands.
    pub fn generalize(self, other: CharType) -> CharType {
        lattice().joins[self.index()][other.index()]
    }

    /// True when every member of `other` is already a member of `self`,
    /// i.e. generalizing `self` by `other` changes nothing.
    pub fn absorbs(self, other: CharType) -> bool {
        self.generalize(other) == self
    }
}

impl BitAnd for CharType {
    type Output = CharType;

    fn bitand(self, rhs: CharType) -> CharType {
        self.generalize(rhs)
    }
}

impl fmt::Display for CharType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CharType {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Set of categories, one bit per [`CharType::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CTypeSet(u16);

impl CTypeSet {
    pub const EMPTY: CTypeSet = CTypeSet(0);

    pub fn with(self, ctype: CharType) -> Self {
        CTypeSet(self.0 | (1u16 << ctype.index()))
    }

    pub fn union(self, other: CTypeSet) -> Self {
        CTypeSet(self.0 | other.0)
    }

    pub fn contains(self, ctype: CharType) -> bool {
        self.0 & (1u16 << ctype.index()) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in construction order.
    pub fn iter(self) -> impl Iterator<Item = CharType> {
        CharType::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

/// Lattice record: a category, its nominal symbols and its exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CTypeInfo {
    ctype: CharType,
    symbols: String,
    members: u128,
    exclusions: CTypeSet,
}

impl CTypeInfo {
    fn base(ctype: CharType, symbols: &str) -> Self {
        let members = symbols
            .bytes()
            .filter_map(symbol_index)
            .fold(0u128, |acc, index| acc | (1u128 << index));
        CTypeInfo {
            ctype,
            symbols: symbols.to_string(),
            members,
            exclusions: CTypeSet::EMPTY,
        }
    }

    /// The pad sentinel has no alphabet symbols, only symbol index 64.
    fn sentinel(ctype: CharType) -> Self {
        CTypeInfo {
            ctype,
            symbols: String::new(),
            members: 1u128 << PAD_SYMBOL,
            exclusions: CTypeSet::EMPTY,
        }
    }

    fn covers(&self, other: &CTypeInfo) -> bool {
        self.members & other.members == other.members
    }

    /// Merge two categories that don't already contain one another.
    ///
    /// Panics when `self` already covers `other`.
    fn combine(&self, other: &CTypeInfo, ctype: CharType) -> Self {
        assert!(
            !self.covers(other),
            "cannot combine {} with {}: nothing new to add",
            self.ctype,
            other.ctype
        );
        let mut extra: Vec<u8> = other
            .symbols
            .bytes()
            .filter(|b| !self.symbols.as_bytes().contains(b))
            .collect();
        extra.sort_unstable();
        let mut symbols = self.symbols.clone();
        symbols.extend(extra.into_iter().map(char::from));
        CTypeInfo {
            ctype,
            symbols,
            members: self.members | other.members,
            exclusions: self
                .exclusions
                .union(other.exclusions)
                .with(self.ctype)
                .with(other.ctype),
        }
    }

    /// Record that `other`, already inside `self`, is a narrower category.
    ///
    /// Panics when `self` does not cover `other`.
    fn refine(&self, other: &CTypeInfo, ctype: CharType) -> Self {
        assert!(
            self.covers(other),
            "cannot refine {} by {}: not a subset",
            self.ctype,
            other.ctype
        );
        CTypeInfo {
            ctype,
            symbols: self.symbols.clone(),
            members: self.members,
            exclusions: self
                .exclusions
                .union(other.exclusions)
                .with(other.ctype),
        }
    }

    pub fn ctype(&self) -> CharType {
        self.ctype
    }

    /// Nominal symbols, as built up by composition.
    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    /// Whether a symbol index belongs to this category.
    pub fn contains_symbol(&self, symbol: u8) -> bool {
        symbol <= PAD_SYMBOL && self.members & (1u128 << symbol) != 0
    }

    /// Narrower categories whose probability mass is subtracted.
    pub fn exclusions(&self) -> CTypeSet {
        self.exclusions
    }

    /// Probability that one uniformly drawn symbol lies in this category.
    pub fn unit_probability(&self) -> f64 {
        self.symbols.len() as f64 / ALPHABET.len() as f64
    }
}

struct Lattice {
    infos: Vec<CTypeInfo>,
    joins: [[CharType; CharType::COUNT]; CharType::COUNT],
}

static LATTICE: OnceLock<Lattice> = OnceLock::new();

fn lattice() -> &'static Lattice {
    LATTICE.get_or_init(build_lattice)
}

fn build_lattice() -> Lattice {
    use CharType::*;

    // Disjoint types
    let upper_alphahex = CTypeInfo::base(UpperAlphahex, "ABCDEF");
    let lower_alphahex = CTypeInfo::base(LowerAlphahex, "abcdef");
    let decimal = CTypeInfo::base(Decimal, "0123456789");
    let punct = CTypeInfo::base(Punct, "+/");

    // A disjoint type plus symbols no other category claims
    let upper = CTypeInfo::base(Upper, "ABCDEFGHIJKLMNOPQRSTUVWXYZ").refine(&upper_alphahex, Upper);
    let lower = CTypeInfo::base(Lower, "abcdefghijklmnopqrstuvwxyz").refine(&lower_alphahex, Lower);

    // Two disjoint types
    let alphahex = upper_alphahex.combine(&lower_alphahex, Alphahex);
    let upperhex = decimal.combine(&upper_alphahex, Upperhex);
    let lowerhex = decimal.combine(&lower_alphahex, Lowerhex);

    // Compound types
    let hex = upperhex.combine(&lowerhex, Hex).refine(&alphahex, Hex);
    let alpha = upper.combine(&lower, Alpha).refine(&alphahex, Alpha);
    let upper_alnum = upper.combine(&decimal, UpperAlnum).refine(&upperhex, UpperAlnum);
    let lower_alnum = lower.combine(&decimal, LowerAlnum).refine(&lowerhex, LowerAlnum);
    let alnum = upper_alnum
        .combine(&lower_alnum, Alnum)
        .refine(&alpha, Alnum)
        .refine(&hex, Alnum);

    let base64 = alnum.combine(&punct, Base64);
    let pad = CTypeInfo::sentinel(Pad);

    let infos = vec![
        upper_alphahex,
        lower_alphahex,
        decimal,
        punct,
        upper,
        lower,
        alphahex,
        upperhex,
        lowerhex,
        hex,
        alpha,
        upper_alnum,
        lower_alnum,
        alnum,
        base64,
        pad,
    ];
    debug_assert!(infos.iter().zip(CharType::ALL).all(|(i, c)| i.ctype == c));

    let mut joins = [[Base64; CharType::COUNT]; CharType::COUNT];
    for a in CharType::ALL {
        for b in CharType::ALL {
            let union = infos[a.index()].members | infos[b.index()].members;
            joins[a.index()][b.index()] = infos
                .iter()
                .filter(|info| info.members & union == union)
                .min_by_key(|info| info.members.count_ones())
                .map_or(Base64, |info| info.ctype);
        }
    }

    tracing::trace!(categories = infos.len(), "built character-type lattice");
    Lattice { infos, joins }
}
