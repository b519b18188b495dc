//! Letter-frequency index of an answer
//!
//! Built once per answer. Stores, for every distinct letter, how many times it
//! occurs and at which positions.

use rustc_hash::FxHashMap;

/// Occurrence data for a single letter of the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterEntry {
    occurrences: usize,
    positions: Vec<usize>,
}

impl LetterEntry {
    /// Number of times the letter occurs in the answer
    #[inline]
    #[must_use]
    pub const fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Positions of the letter in the answer, ascending
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// Per-letter occurrence counts and positions for one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterIndex {
    answer: String,
    len: usize,
    letters: FxHashMap<char, LetterEntry>,
}

impl LetterIndex {
    /// Build the index for `answer`
    ///
    /// # Examples
    /// ```
    /// use cordle::core::LetterIndex;
    ///
    /// let index = LetterIndex::new("eerie");
    /// assert_eq!(index.occurrences('e'), 3);
    /// assert_eq!(index.positions_of('e'), &[0, 1, 4]);
    /// assert_eq!(index.occurrences('z'), 0);
    /// ```
    #[must_use]
    pub fn new(answer: &str) -> Self {
        let mut letters: FxHashMap<char, LetterEntry> = FxHashMap::default();
        let mut len = 0;

        for (i, ch) in answer.chars().enumerate() {
            let entry = letters.entry(ch).or_insert_with(|| LetterEntry {
                occurrences: 0,
                positions: Vec::new(),
            });
            entry.occurrences += 1;
            entry.positions.push(i);
            len = i + 1;
        }

        Self {
            answer: answer.to_string(),
            len,
            letters,
        }
    }

    /// The answer this index was built from
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Answer length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up the entry for a letter
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<&LetterEntry> {
        self.letters.get(&letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains_key(&letter)
    }

    /// Number of times `letter` occurs in the answer (0 if absent)
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.letters.get(&letter).map_or(0, LetterEntry::occurrences)
    }

    /// Positions of `letter` in the answer
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letters.get(&letter).map_or(&[], LetterEntry::positions)
    }

    /// Number of distinct letters
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }

    /// Fresh copy of the remaining-occurrence counters
    ///
    /// Counters are signed: scoring decrements them past zero to detect
    /// occurrences beyond the answer's quota.
    pub(crate) fn working_counts(&self) -> FxHashMap<char, isize> {
        self.letters
            .iter()
            .map(|(&ch, entry)| (ch, isize::try_from(entry.occurrences).unwrap_or(isize::MAX)))
            .collect()
    }
}
