//! Game limits and file locations

use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Answer length when none is requested
pub const DEFAULT_LETTERS: usize = 5;

/// Attempt budget when none is requested
pub const DEFAULT_GUESSES: usize = 6;

/// Accepted answer lengths
pub const LETTERS_RANGE: RangeInclusive<usize> = 2..=27;

/// Accepted attempt budgets
pub const GUESSES_RANGE: RangeInclusive<usize> = 1..=10;

/// Player id used by the interactive modes
pub const LOCAL_PLAYER: &str = "local";

const STORE_FILE: &str = "sessions.json";

/// Default location of the session file: `<data dir>/cordle/sessions.json`
///
/// Falls back to the working directory when the platform has no data dir.
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(STORE_FILE),
        |dir| dir.join("cordle").join(STORE_FILE),
    )
}

/// Player id from the environment's user name, or `player`
#[must_use]
pub fn default_player() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "player".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_range() {
        assert!(LETTERS_RANGE.contains(&DEFAULT_LETTERS));
        assert!(GUESSES_RANGE.contains(&DEFAULT_GUESSES));
    }

    #[test]
    fn store_path_ends_with_file_name() {
        assert!(default_store_path().ends_with(STORE_FILE));
    }

    #[test]
    fn player_is_never_empty() {
        assert!(!default_player().is_empty());
    }
}
