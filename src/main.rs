mod cli;

use vec64::{SymbolError, UnknownCategoryError};

fn main() {
    if let Err(e) = cli::run() {
        // Domain errors carry their own "error:" prefix and hint
        if e.is::<SymbolError>() || e.is::<UnknownCategoryError>() {
            eprintln!("{}", e);
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
