use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::ctype::CharType;
use crate::encoders::errors::UnknownCategoryError;
use crate::encoders::vectorize::PAD_SYMBOL;
use crate::features::split::SplitOptions;

/// Settings for turning text into symbol indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorizeSettings {
    /// Value emitted for each recognised pad marker
    #[serde(default = "default_pad_with")]
    pub pad_with: u8,
}

impl Default for VectorizeSettings {
    fn default() -> Self {
        Self {
            pad_with: default_pad_with(),
        }
    }
}

/// Settings for splitting symbol vectors into spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSettings {
    /// Separator character type, or "none"
    #[serde(default = "default_sep")]
    pub sep: String,
    /// Maximum number of separator breaks (less than one means no limit)
    #[serde(default = "default_maxsplit")]
    pub maxsplit: i64,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            sep: default_sep(),
            maxsplit: default_maxsplit(),
        }
    }
}

impl SplitSettings {
    /// Resolve the configured separator; "none" (or an empty string)
    /// disables separators.
    pub fn separator(&self) -> Result<Option<CharType>, UnknownCategoryError> {
        parse_separator(&self.sep)
    }

    pub fn options(&self) -> Result<SplitOptions, UnknownCategoryError> {
        Ok(SplitOptions {
            sep: self.separator()?,
            maxsplit: self.maxsplit,
        })
    }
}

/// Parse a separator name, accepting "none" for no separator.
pub fn parse_separator(name: &str) -> Result<Option<CharType>, UnknownCategoryError> {
    let name = name.trim();
    if name.is_empty() || name.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        CharType::from_name(name).map(Some)
    }
}

/// Settings for pair encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSettings {
    /// Offset of the first paired symbol
    #[serde(default)]
    pub start: usize,
}

/// Output formatting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Emit JSON instead of plain text
    #[serde(default)]
    pub json: bool,
    /// Include span probabilities in split output
    #[serde(default = "default_true")]
    pub probabilities: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            json: false,
            probabilities: true,
        }
    }
}

fn default_pad_with() -> u8 {
    PAD_SYMBOL
}

fn default_sep() -> String {
    CharType::Punct.name().to_string()
}

fn default_maxsplit() -> i64 {
    -1
}

fn default_true() -> bool {
    true
}

/// Configuration loaded from TOML files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vec64Config {
    #[serde(default)]
    pub vectorize: VectorizeSettings,
    #[serde(default)]
    pub split: SplitSettings,
    #[serde(default)]
    pub pairs: PairSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

const DEFAULT_CONFIG: &str = include_str!("../../vec64.toml");

/// Name of configuration files looked up in the user and project directories.
pub const CONFIG_FILE_NAME: &str = "vec64.toml";

impl Vec64Config {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::from_toml(DEFAULT_CONFIG)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Standard override locations, lowest priority first:
    /// `~/.config/vec64/vec64.toml`, then `./vec64.toml`.
    pub fn override_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("vec64").join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }

    /// Loads configuration with overrides.
    ///
    /// Starts from the built-in configuration and layers each existing file
    /// of [`Vec64Config::override_paths`] on top, then `explicit` if given.
    /// Only the keys a file sets are overridden. Unreadable standard files
    /// are skipped with a warning; an unreadable explicit file is an error.
    pub fn load_with_overrides(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;

        for path in Self::override_paths() {
            if !path.exists() {
                continue;
            }
            match read_table(&path) {
                Ok(table) => {
                    tracing::debug!(path = %path.display(), "applying config overrides");
                    merge_tables(&mut merged, table);
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        if let Some(path) = explicit {
            let table = read_table(path)
                .map_err(|e| format!("Cannot load config '{}': {}", path.display(), e))?;
            merge_tables(&mut merged, table);
        }

        let config: Self = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.vectorize.pad_with > PAD_SYMBOL {
            return Err(format!(
                "vectorize.pad_with must be at most {}, got {}",
                PAD_SYMBOL, self.vectorize.pad_with
            )
            .into());
        }
        self.split.separator()?;
        Ok(())
    }

    /// Renders the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn read_table(path: &Path) -> Result<toml::Table, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Deep-merge `overlay` into `base`: nested tables merge key by key, any
/// other value replaces what was there.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let merged = match (base.remove(&key), value) {
            (Some(toml::Value::Table(mut existing)), toml::Value::Table(incoming)) => {
                merge_tables(&mut existing, incoming);
                toml::Value::Table(existing)
            }
            (_, value) => value,
        };
        base.insert(key, merged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = Vec64Config::load_default().unwrap();
        assert_eq!(config, Vec64Config::default());
        assert_eq!(config.vectorize.pad_with, 64);
        assert_eq!(config.split.separator().unwrap(), Some(CharType::Punct));
        assert_eq!(config.split.maxsplit, -1);
        assert_eq!(config.pairs.start, 0);
        assert!(!config.output.json);
        assert!(config.output.probabilities);
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[split]
sep = "decimal"
maxsplit = 2
"#;
        let config = Vec64Config::from_toml(toml_content).unwrap();
        assert_eq!(config.split.separator().unwrap(), Some(CharType::Decimal));
        assert_eq!(config.split.maxsplit, 2);
        // Unset sections keep their defaults
        assert_eq!(config.vectorize, VectorizeSettings::default());
    }

    #[test]
    fn test_separator_none() {
        for name in ["none", "NONE", ""] {
            assert_eq!(parse_separator(name).unwrap(), None);
        }
        let settings = SplitSettings {
            sep: "none".to_string(),
            maxsplit: 3,
        };
        assert_eq!(
            settings.options().unwrap(),
            SplitOptions {
                sep: None,
                maxsplit: 3
            }
        );
    }

    #[test]
    fn test_unknown_separator() {
        let config = Vec64Config::from_toml("[split]\nsep = \"punctuation\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pad_with_out_of_range() {
        let config = Vec64Config::from_toml("[vectorize]\npad_with = 65\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pad_with"));
    }

    #[test]
    fn test_merge_tables_is_deep() {
        let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG).unwrap();
        let overlay: toml::Table = toml::from_str("[split]\nmaxsplit = 4\n[output]\njson = true\n").unwrap();
        merge_tables(&mut base, overlay);

        let config: Vec64Config = toml::Value::Table(base).try_into().unwrap();
        assert_eq!(config.split.maxsplit, 4);
        assert_eq!(config.split.sep, "PUNCT");
        assert!(config.output.json);
        assert!(config.output.probabilities);
    }

    #[test]
    fn test_explicit_file_overrides() {
        let dir = std::env::temp_dir().join(format!("vec64-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.toml");
        std::fs::write(&path, "[vectorize]\npad_with = 0\n").unwrap();

        let config = Vec64Config::load_with_overrides(Some(&path)).unwrap();
        assert_eq!(config.vectorize.pad_with, 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = Path::new("/nonexistent/vec64/custom.toml");
        assert!(Vec64Config::load_with_overrides(Some(missing)).is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = Vec64Config::default();
        config.split.maxsplit = 7;
        let text = config.to_toml().unwrap();
        assert_eq!(Vec64Config::from_toml(&text).unwrap(), config);
    }
}
