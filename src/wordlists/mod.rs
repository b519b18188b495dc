//! Answer dictionaries
//!
//! Provides the embedded word list and grouping of words by length so a new
//! game can draw a random answer of the requested size.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LETTERS_RANGE;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_fit_letter_range() {
        for &word in WORDS {
            assert!(
                LETTERS_RANGE.contains(&word.len()),
                "Word '{word}' has an unplayable length"
            );
        }
    }

    #[test]
    fn default_length_is_well_stocked() {
        let dictionary = Dictionary::embedded();
        assert!(dictionary.words_of_length(5).len() > 100);
        assert!(dictionary.words_of_length(5).iter().any(|w| w == "crane"));
    }
}
