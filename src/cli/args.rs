use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for turning text into symbol indexes
#[derive(Args, Debug)]
pub struct VectorizeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Index emitted for each '=' pad marker (64 keeps padding distinct, 0 is the RFC value)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=64))]
    pub pad_with: Option<u8>,
}

/// Arguments for turning symbol indexes back into text
#[derive(Args, Debug)]
pub struct UnvectorizeArgs {
    /// File of whitespace or comma separated indexes (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for splitting text into typed spans
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Character type that ends a run, or "none"
    #[arg(short = 's', long, value_name = "TYPE")]
    pub sep: Option<String>,

    /// Maximum number of separator breaks (less than one means no limit)
    #[arg(short = 'm', long, value_name = "N", allow_negative_numbers = true)]
    pub maxsplit: Option<i64>,

    /// Index emitted for each '=' pad marker
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=64))]
    pub pad_with: Option<u8>,

    /// Leave span probabilities out of the output
    #[arg(long)]
    pub no_probabilities: bool,
}

/// Pair codec actions
#[derive(Subcommand, Debug)]
pub enum PairsAction {
    /// Vectorize text and pack its symbols two at a time
    Encode {
        /// Input file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Offset of the first paired symbol
        #[arg(long, value_name = "N")]
        start: Option<usize>,

        /// Index emitted for each '=' pad marker
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=64))]
        pad_with: Option<u8>,
    },

    /// Unpack pair codes into symbol indexes
    Decode {
        /// File of whitespace or comma separated codes (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Print the decoded symbols as text
        #[arg(short = 't', long)]
        text: bool,
    },
}

/// Arguments for listing the character-type lattice
#[derive(Args, Debug)]
pub struct LatticeArgs {
    /// Sequence length the probabilities are computed for
    #[arg(short = 'n', long, default_value = "1")]
    pub length: usize,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List the configuration files that are consulted, in priority order
    List,

    /// Show the effective configuration
    Show,
}
