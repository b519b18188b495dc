//! Words grouped by length

use super::WORDS;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Answer candidates grouped by word length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<String>>,
}

impl Dictionary {
    /// Dictionary built from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS.iter().copied())
    }

    /// Group `words` by length
    ///
    /// Words are trimmed and lowercased; blank entries and entries with
    /// anything other than ASCII letters are skipped, and duplicates removed.
    ///
    /// # Examples
    /// ```
    /// use cordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Crane", "slate", "ox", "n0pe", "crane"]);
    /// assert_eq!(dictionary.words_of_length(5), ["crane", "slate"]);
    /// assert_eq!(dictionary.words_of_length(2), ["ox"]);
    /// assert_eq!(dictionary.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let word = word.to_ascii_lowercase();
            by_length.entry(word.len()).or_default().push(word);
        }

        for words in by_length.values_mut() {
            words.sort_unstable();
            words.dedup();
        }

        Self { by_length }
    }

    /// All words with exactly `len` letters, sorted
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> &[String] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    /// A uniformly random word with `len` letters
    ///
    /// Returns `None` if the dictionary has no word of that length.
    pub fn random_word<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Option<&str> {
        self.words_of_length(len).choose(rng).map(String::as_str)
    }

    /// Word lengths that have at least one word, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}
