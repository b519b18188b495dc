//! Guess evaluation against a session's answer
//!
//! # Scoring
//! A guess is scored in a single left-to-right pass. Every letter that occurs
//! in the answer consumes one unit of that letter's quota:
//! - quota exhausted (counter below zero) -> Absent
//! - position is one of the letter's answer positions -> Exact
//! - otherwise -> Present
//!
//! Exact matches are not reserved ahead of time, so an earlier Present can use
//! up the quota of a later Exact. For answer `crane` the guess `eerie` scores
//! `🟨⬛🟨⬛⬛`: the final `e` sits on the answer's `e` but the first `e` already
//! consumed it.

use super::error::EngineError;
use super::letter_index::LetterIndex;
use super::session::Session;
use super::verdict::{Verdict, VerdictVector};
use tracing::debug;

/// Result of a recorded guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess matched the answer
    Win,
    /// Attempt budget used up without a win
    Exhausted,
    /// Game goes on
    Continue,
}

impl Outcome {
    /// Win and Exhausted end the game
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Exhausted)
    }
}

/// Verdicts for one guess plus the resulting game outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub verdicts: VerdictVector,
    pub outcome: Outcome,
}

/// The Cordle engine
///
/// Holds the letter index of one answer. Stateless between calls apart from
/// that index; all game progress lives in the [`Session`] passed to
/// [`evaluate`](Self::evaluate).
#[derive(Debug, Clone, Default)]
pub struct GuessEvaluator {
    index: Option<LetterIndex>,
}

impl GuessEvaluator {
    /// An evaluator with no answer yet
    #[must_use]
    pub const fn new() -> Self {
        Self { index: None }
    }

    /// An evaluator initialized for the session's answer
    ///
    /// Stays uninitialized if the session has no answer.
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        let mut evaluator = Self::new();
        if session.is_initialized() {
            evaluator.initialize(&session.answer);
        }
        evaluator
    }

    /// Build the letter index for `answer`
    pub fn initialize(&mut self, answer: &str) -> &LetterIndex {
        self.index.insert(LetterIndex::new(answer))
    }

    #[inline]
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.index.is_some()
    }

    /// Score `guess`, record it in `session` and decide the outcome
    ///
    /// Guesses longer than the answer are truncated to the answer length. On
    /// success the truncated guess and its verdicts are appended to the session
    /// and `total_guesses` is incremented, even when the guess wins on the last
    /// attempt (the outcome is then [`Outcome::Win`]).
    ///
    /// A session that has already used every attempt is scored but not
    /// recorded, and the outcome is [`Outcome::Exhausted`].
    ///
    /// # Errors
    ///
    /// Checked in order, leaving the session untouched on failure:
    /// - [`EngineError::NotInitialized`] if the session has no answer or the
    ///   evaluator was not initialized for it
    /// - [`EngineError::GuessTooShort`] if the guess is shorter than the answer
    /// - [`EngineError::InvalidCharacters`] if the guess has anything other than
    ///   ASCII letters
    ///
    /// # Examples
    /// ```
    /// use cordle::core::{GuessEvaluator, Outcome, Session, Verdict};
    ///
    /// let mut session = Session::new("CRANE", 6);
    /// let evaluator = GuessEvaluator::for_session(&session);
    ///
    /// let result = evaluator.evaluate(&mut session, "TRACE").unwrap();
    /// assert_eq!(
    ///     result.verdicts,
    ///     [Verdict::Absent, Verdict::Exact, Verdict::Exact, Verdict::Present, Verdict::Exact]
    /// );
    /// assert_eq!(result.outcome, Outcome::Continue);
    /// assert_eq!(session.total_guesses, 1);
    /// ```
    pub fn evaluate(&self, session: &mut Session, guess: &str) -> Result<Evaluation, EngineError> {
        let index = self
            .index
            .as_ref()
            .filter(|index| session.is_initialized() && index.answer() == session.answer)
            .ok_or(EngineError::NotInitialized)?;

        let guess_len = guess.chars().count();
        if guess_len < index.len() {
            return Err(EngineError::GuessTooShort {
                expected: index.len(),
                actual: guess_len,
            });
        }

        if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EngineError::InvalidCharacters);
        }

        let guess: String = guess.chars().take(index.len()).collect();
        let verdicts = score(index, &guess);

        if session.is_exhausted() {
            debug!(%guess, "session already exhausted, guess not recorded");
            return Ok(Evaluation {
                verdicts,
                outcome: Outcome::Exhausted,
            });
        }

        session.total_guesses += 1;
        session.guesses.push(guess.clone());
        session.matches.push(verdicts.clone());

        let outcome = if guess == session.answer {
            Outcome::Win
        } else if session.is_exhausted() {
            Outcome::Exhausted
        } else {
            Outcome::Continue
        };

        debug!(
            %guess,
            attempt = session.total_guesses,
            of = session.num_guesses,
            ?outcome,
            "guess evaluated"
        );

        Ok(Evaluation { verdicts, outcome })
    }

    /// Map verdicts to square glyphs, in position order
    ///
    /// Returns `None` if the evaluator is not initialized.
    #[must_use]
    pub fn render_squares(&self, verdicts: &[Verdict]) -> Option<Vec<&'static str>> {
        if !self.is_initialized() {
            return None;
        }
        Some(verdicts.iter().map(|v| v.glyph()).collect())
    }
}

/// Single-pass quota scoring of an already truncated guess
fn score(index: &LetterIndex, guess: &str) -> VerdictVector {
    let mut verdicts = vec![Verdict::Absent; index.len()];
    let mut remaining = index.working_counts();

    for (i, ch) in guess.chars().enumerate() {
        if let Some(count) = remaining.get_mut(&ch) {
            *count -= 1;

            verdicts[i] = if *count < 0 {
                Verdict::Absent
            } else if index.positions_of(ch).contains(&i) {
                Verdict::Exact
            } else {
                Verdict::Present
            };
        }
    }

    verdicts
}
