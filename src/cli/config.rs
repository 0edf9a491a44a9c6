use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use vec64::Vec64Config;

use crate::cli::global::GlobalArgs;

/// Load the effective configuration, layering `--config` (tilde-expanded)
/// over the standard locations.
pub fn load_config(global: &GlobalArgs) -> Result<Vec64Config, Box<dyn std::error::Error>> {
    let explicit = global
        .config
        .as_deref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()));

    let config = Vec64Config::load_with_overrides(explicit.as_deref())?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Read the whole input from `file` or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let metadata = fs::metadata(file_path)
                .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e))?;
            let file_size = metadata.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    tracing::warn!(
                        "Processing large file ({} bytes, limit: {} bytes)",
                        file_size,
                        global.max_size
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        let data = fs::read(file_path)
            .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e))?;
        tracing::debug!(path = %file_path.display(), bytes = data.len(), "input read");
        Ok(data)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        // Check stdin size after reading
        if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                global.max_size
            )
            .into());
        }

        tracing::debug!(bytes = buffer.len(), "stdin read");
        Ok(buffer)
    }
}

/// Parse whitespace or comma separated numbers. Square brackets are
/// ignored so JSON arrays are accepted too.
pub fn parse_numbers<T>(input: &[u8]) -> Result<Vec<T>, Box<dyn std::error::Error>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let text = std::str::from_utf8(input).map_err(|_| "Input is not valid UTF-8 text")?;

    let tokens = text
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
        .filter(|token| !token.is_empty());

    let mut numbers = Vec::new();
    for (position, token) in tokens.enumerate() {
        let number = token
            .parse::<T>()
            .map_err(|e| format!("Invalid number '{}' at position {}: {}", token, position, e))?;
        numbers.push(number);
    }
    Ok(numbers)
}

/// Join values with single spaces.
pub fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
