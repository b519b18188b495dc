//! Per-player game record
//!
//! The session is owned by the caller (a session store) and handed to the
//! evaluator once per guess. Field names serialize in camelCase so stored
//! records keep the `answer`/`numLetters`/`numGuesses`/`totalGuesses`/`guesses`/
//! `matches` layout.

use super::verdict::VerdictVector;
use serde::{Deserialize, Serialize};

/// State of one player's game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The secret word
    pub answer: String,
    /// Answer length in characters
    pub num_letters: usize,
    /// Maximum number of attempts
    pub num_guesses: usize,
    /// Attempts used so far
    pub total_guesses: usize,
    /// Past guesses, truncated to the answer length
    pub guesses: Vec<String>,
    /// One verdict vector per past guess
    pub matches: Vec<VerdictVector>,
}

impl Session {
    /// Start a fresh session for `answer` with `num_guesses` attempts
    #[must_use]
    pub fn new(answer: impl Into<String>, num_guesses: usize) -> Self {
        let answer = answer.into();
        let num_letters = answer.chars().count();

        Self {
            answer,
            num_letters,
            num_guesses,
            total_guesses: 0,
            guesses: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// A session is playable once it has an answer
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Whether every allowed attempt has been used
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.total_guesses >= self.num_guesses
    }

    /// Attempts left before the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.num_guesses.saturating_sub(self.total_guesses)
    }

    /// Past guesses paired with their verdicts, oldest first
    pub fn history(&self) -> impl Iterator<Item = (&str, &VerdictVector)> {
        self.guesses
            .iter()
            .map(String::as_str)
            .zip(self.matches.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    #[test]
    fn new_session_counts_letters() {
        let session = Session::new("crane", 6);
        assert_eq!(session.num_letters, 5);
        assert_eq!(session.num_guesses, 6);
        assert_eq!(session.total_guesses, 0);
        assert!(session.guesses.is_empty());
        assert!(session.matches.is_empty());
        assert!(session.is_initialized());
        assert_eq!(session.remaining_guesses(), 6);
    }

    #[test]
    fn empty_answer_is_uninitialized() {
        assert!(!Session::new("", 6).is_initialized());
    }

    #[test]
    fn exhausted_when_budget_used() {
        let mut session = Session::new("crane", 2);
        assert!(!session.is_exhausted());
        session.total_guesses = 2;
        assert!(session.is_exhausted());
        assert_eq!(session.remaining_guesses(), 0);
    }

    #[test]
    fn record_uses_camel_case_fields() {
        let mut session = Session::new("ab", 3);
        session.total_guesses = 1;
        session.guesses.push("ba".to_string());
        session.matches.push(vec![Verdict::Present, Verdict::Present]);

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "answer": "ab",
                "numLetters": 2,
                "numGuesses": 3,
                "totalGuesses": 1,
                "guesses": ["ba"],
                "matches": [[1, 1]],
            })
        );

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn history_pairs_guesses_with_matches() {
        let mut session = Session::new("ab", 3);
        session.guesses = vec!["aa".to_string(), "ab".to_string()];
        session.matches = vec![
            vec![Verdict::Exact, Verdict::Absent],
            vec![Verdict::Exact, Verdict::Exact],
        ];

        let history: Vec<_> = session.history().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].0, "ab");
        assert_eq!(history[1].1, &vec![Verdict::Exact, Verdict::Exact]);
    }
}
