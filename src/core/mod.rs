//! Character-type lattice, probability model and configuration.

pub mod config;
pub mod ctype;
pub mod probability;

pub use config::{OutputSettings, PairSettings, SplitSettings, Vec64Config, VectorizeSettings, parse_separator};
pub use ctype::{CTypeInfo, CTypeSet, CharType};
pub use probability::{exact_probabilities, probability};
