use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Errors raised when a symbol vector or pair-code sequence contains values
/// outside its domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// A symbol index above 64
    InvalidSymbol { value: u8, position: usize },
    /// A pair code above 4160
    InvalidPairCode { code: u16, position: usize },
}

impl SymbolError {
    /// Relocate an error reported for a single value to its position in
    /// the enclosing sequence.
    pub fn at(self, position: usize) -> Self {
        match self {
            SymbolError::InvalidSymbol { value, .. } => {
                SymbolError::InvalidSymbol { value, position }
            }
            SymbolError::InvalidPairCode { code, .. } => {
                SymbolError::InvalidPairCode { code, position }
            }
        }
    }

    /// Offset of the offending value.
    pub fn position(&self) -> usize {
        match self {
            SymbolError::InvalidSymbol { position, .. }
            | SymbolError::InvalidPairCode { position, .. } => *position,
        }
    }
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        let (message, hint) = match self {
            SymbolError::InvalidSymbol { value, position } => (
                format!("invalid symbol index {} at position {}", value, position),
                "symbol indexes range from 0 to 63, plus 64 for padding".to_string(),
            ),
            SymbolError::InvalidPairCode { code, position } => (
                format!("invalid pair code {} at position {}", code, position),
                "pair codes range from 0 to 4160".to_string(),
            ),
        };

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m {}", message)?;
            write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
        } else {
            writeln!(f, "error: {}", message)?;
            write!(f, "hint: {}", hint)
        }
    }
}

impl std::error::Error for SymbolError {}

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turn off ANSI colors in error messages for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if COLOR_DISABLED.load(Ordering::Relaxed) {
        return false;
    }

    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a character-type name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl UnknownCategoryError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m unknown character type '{}'",
                self.name
            )?;
        } else {
            writeln!(f, "error: unknown character type '{}'", self.name)?;
        }

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`vec64 lattice`\x1b[0m to see all character types"
            )
        } else {
            write!(f, "      run `vec64 lattice` to see all character types")
        }
    }
}

impl std::error::Error for UnknownCategoryError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching category name
pub fn find_closest_category(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("ALPHA", "ALPHA"), 0);
        assert_eq!(levenshtein_distance("UPPER", "LOWER"), 2);
        assert_eq!(levenshtein_distance("HX", "HEX"), 1);
        assert_eq!(levenshtein_distance("", "PAD"), 3);
    }

    #[test]
    fn test_find_closest_category() {
        let names = vec![
            "ALPHA".to_string(),
            "ALNUM".to_string(),
            "DECIMAL".to_string(),
            "PUNCT".to_string(),
        ];

        assert_eq!(
            find_closest_category("DECIMAL_", &names),
            Some("DECIMAL".to_string())
        );
        assert_eq!(find_closest_category("PUNC", &names), Some("PUNCT".to_string()));
        assert_eq!(find_closest_category("BASE64_URL", &names), None);
    }

    #[test]
    fn test_at_relocates_error() {
        let err = SymbolError::InvalidSymbol {
            value: 99,
            position: 0,
        }
        .at(7);
        assert_eq!(err.position(), 7);
        assert_eq!(
            err,
            SymbolError::InvalidSymbol {
                value: 99,
                position: 7
            }
        );
    }

    #[test]
    fn test_disable_color() {
        disable_color();
        assert!(!should_use_color());

        let err = SymbolError::InvalidPairCode {
            code: 4161,
            position: 3,
        };
        let display = err.to_string();
        assert!(display.starts_with("error: invalid pair code 4161 at position 3"));
        assert!(!display.contains('\x1b'));
    }

    #[test]
    fn test_error_display_no_color() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = SymbolError::InvalidSymbol {
            value: 65,
            position: 12,
        };
        let display = format!("{}", err);
        assert!(display.contains("invalid symbol index 65 at position 12"));
        assert!(display.contains("hint:"));

        let err = UnknownCategoryError::new("PUNC", Some("PUNCT".to_string()));
        let display = format!("{}", err);
        assert!(display.contains("unknown character type 'PUNC'"));
        assert!(display.contains("did you mean 'PUNCT'?"));
        assert!(display.contains("vec64 lattice"));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }
}
