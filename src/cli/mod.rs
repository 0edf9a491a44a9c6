mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{ConfigAction, LatticeArgs, PairsAction, SplitArgs, UnvectorizeArgs, VectorizeArgs};
use global::GlobalArgs;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "VEC64_LOG";

#[derive(Parser)]
#[command(name = "vec64")]
#[command(version)]
#[command(about = "Vectorize Base64 text, split it into typed runs and pack symbol pairs", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the symbol indexes of the input
    Vectorize(VectorizeArgs),

    /// Turn symbol indexes back into text
    Unvectorize(UnvectorizeArgs),

    /// Split the input into typed spans
    Split(SplitArgs),

    /// Pack or unpack symbol pairs
    Pairs {
        #[command(subcommand)]
        action: PairsAction,
    },

    /// List the character types with their probabilities
    Lattice(LatticeArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        vec64::disable_color();
    }
    init_logging(&cli.global);

    let config = config::load_config(&cli.global)?;

    match cli.command {
        Commands::Vectorize(args) => handlers::vectorize::handle(args, &cli.global, &config),
        Commands::Unvectorize(args) => handlers::vectorize::handle_unvectorize(args, &cli.global, &config),
        Commands::Split(args) => handlers::split::handle(args, &cli.global, &config),
        Commands::Pairs { action } => handlers::pairs::handle(action, &cli.global, &config),
        Commands::Lattice(args) => handlers::lattice::handle(args, &cli.global, &config),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &config),
    }
}

/// Route diagnostics to stderr so stdout stays clean for results.
///
/// `--quiet` and `-v` pick the level; without either, `VEC64_LOG` is
/// honoured and the default is `warn`.
fn init_logging(global: &GlobalArgs) {
    let level = match (global.quiet, global.verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    };

    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!global.no_color)
        .with_target(false)
        .try_init();
}
