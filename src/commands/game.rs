//! Game commands
//!
//! `newgame`, `guess` and `end` on top of a session store. This layer only
//! validates input, moves sessions in and out of storage and calls the engine.

use crate::config::{DEFAULT_GUESSES, DEFAULT_LETTERS, GUESSES_RANGE, LETTERS_RANGE};
use crate::core::{EngineError, GuessEvaluator, Outcome, Session, VerdictVector};
use crate::store::{SessionStore, StoreError};
use crate::wordlists::Dictionary;
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

/// Command failures, displayed as the reply shown to the player
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Game not started. Start a new game with `newgame`")]
    NoGame,

    #[error("Letters must be between {} and {}", LETTERS_RANGE.start(), LETTERS_RANGE.end())]
    LettersOutOfRange(usize),

    #[error("Guesses must be between {} and {}", GUESSES_RANGE.start(), GUESSES_RANGE.end())]
    GuessesOutOfRange(usize),

    #[error("No {0}-letter words available")]
    NoWords(usize),

    #[error("{}", engine_reply(.0))]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn engine_reply(error: &EngineError) -> &'static str {
    match error {
        EngineError::NotInitialized => "Game not started. Start a new game with `newgame`",
        EngineError::GuessTooShort { .. } => "Incorrect number of characters",
        EngineError::InvalidCharacters => "Guess has invalid characters",
    }
}

/// Requested game size; `None` picks the default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewGameOptions {
    pub letters: Option<usize>,
    pub guesses: Option<usize>,
}

/// Result of a successful guess
#[derive(Debug, Clone)]
pub struct GuessReport {
    pub outcome: Outcome,
    /// Verdicts of this guess
    pub verdicts: VerdictVector,
    /// Session after the guess (already removed from the store if terminal)
    pub session: Session,
    /// One row of square glyphs per recorded guess, separated by spaces
    pub squares: Vec<String>,
}

/// Runs game commands against a session store
pub struct GameService<S> {
    store: S,
    dictionary: Dictionary,
}

impl<S: SessionStore> GameService<S> {
    #[must_use]
    pub const fn new(store: S, dictionary: Dictionary) -> Self {
        Self { store, dictionary }
    }

    /// The player's game in progress, if any
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Store` if the session cannot be read.
    pub fn current(&self, player: &str) -> Result<Option<Session>, CommandError> {
        Ok(self.store.get(player)?)
    }

    /// Start a new game, replacing any game the player already has
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - letters or guesses are out of range
    /// - the dictionary has no word with the requested number of letters
    /// - the session cannot be stored
    pub fn new_game<R: Rng + ?Sized>(
        &mut self,
        player: &str,
        options: NewGameOptions,
        rng: &mut R,
    ) -> Result<Session, CommandError> {
        let letters = options.letters.unwrap_or(DEFAULT_LETTERS);
        let guesses = options.guesses.unwrap_or(DEFAULT_GUESSES);

        if !LETTERS_RANGE.contains(&letters) {
            return Err(CommandError::LettersOutOfRange(letters));
        }
        if !GUESSES_RANGE.contains(&guesses) {
            return Err(CommandError::GuessesOutOfRange(guesses));
        }

        let answer = self
            .dictionary
            .random_word(letters, rng)
            .ok_or(CommandError::NoWords(letters))?;

        let session = Session::new(answer, guesses);
        self.store.set(player, session.clone())?;

        info!(player, letters, guesses, "new game started");
        Ok(session)
    }

    /// Score a guess in the player's current game
    ///
    /// Input is trimmed and lowercased to match the dictionary. A finished game
    /// (win or out of attempts) is removed from the store; otherwise the
    /// updated session is saved.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NoGame` without a game in progress,
    /// `CommandError::Engine` if the guess is rejected, and
    /// `CommandError::Store` on storage failures.
    pub fn guess(&mut self, player: &str, input: &str) -> Result<GuessReport, CommandError> {
        let mut session = self.store.get(player)?.ok_or(CommandError::NoGame)?;
        let guess = input.trim().to_ascii_lowercase();

        let evaluator = GuessEvaluator::for_session(&session);
        let evaluation = evaluator
            .evaluate(&mut session, &guess)
            .inspect_err(|e| warn!(player, %guess, error = %e, "guess rejected"))?;

        let squares = session
            .matches
            .iter()
            .map(|verdicts| {
                evaluator
                    .render_squares(verdicts)
                    .unwrap_or_default()
                    .join(" ")
            })
            .collect();

        if evaluation.outcome.is_terminal() {
            self.store.delete(player)?;
            info!(
                player,
                outcome = ?evaluation.outcome,
                guesses = session.total_guesses,
                "game over"
            );
        } else {
            self.store.set(player, session.clone())?;
        }

        Ok(GuessReport {
            outcome: evaluation.outcome,
            verdicts: evaluation.verdicts,
            session,
            squares,
        })
    }

    /// End the player's game
    ///
    /// Returns whether a game was in progress.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Store` if the session cannot be removed.
    pub fn end(&mut self, player: &str) -> Result<bool, CommandError> {
        let ended = self.store.delete(player)?;
        if ended {
            info!(player, "game ended");
        }
        Ok(ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::store::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service(words: &[&str]) -> GameService<MemoryStore> {
        GameService::new(MemoryStore::new(), Dictionary::from_words(words.iter().copied()))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn new_game_uses_defaults() {
        let mut service = service(&["crane"]);
        let session = service
            .new_game("alice", NewGameOptions::default(), &mut rng())
            .unwrap();

        assert_eq!(session.answer, "crane");
        assert_eq!(session.num_letters, 5);
        assert_eq!(session.num_guesses, 6);
        assert_eq!(service.current("alice").unwrap(), Some(session));
    }

    #[test]
    fn new_game_honors_options() {
        let mut service = service(&["crane", "ox"]);
        let options = NewGameOptions {
            letters: Some(2),
            guesses: Some(10),
        };
        let session = service.new_game("alice", options, &mut rng()).unwrap();

        assert_eq!(session.answer, "ox");
        assert_eq!(session.num_guesses, 10);
    }

    #[test]
    fn new_game_validates_ranges() {
        let mut service = service(&["crane"]);

        for letters in [0, 1, 28] {
            let options = NewGameOptions {
                letters: Some(letters),
                guesses: None,
            };
            assert!(matches!(
                service.new_game("alice", options, &mut rng()),
                Err(CommandError::LettersOutOfRange(n)) if n == letters
            ));
        }

        for guesses in [0, 11] {
            let options = NewGameOptions {
                letters: None,
                guesses: Some(guesses),
            };
            assert!(matches!(
                service.new_game("alice", options, &mut rng()),
                Err(CommandError::GuessesOutOfRange(_))
            ));
        }

        assert!(service.current("alice").unwrap().is_none());
    }

    #[test]
    fn new_game_without_words_of_length() {
        let mut service = service(&["crane"]);
        let options = NewGameOptions {
            letters: Some(7),
            guesses: None,
        };

        let err = service.new_game("alice", options, &mut rng()).unwrap_err();
        assert!(matches!(err, CommandError::NoWords(7)));
        assert_eq!(err.to_string(), "No 7-letter words available");
    }

    #[test]
    fn new_game_replaces_existing() {
        let mut service = service(&["crane"]);
        service.new_game("alice", NewGameOptions::default(), &mut rng()).unwrap();
        service.guess("alice", "slate").unwrap();

        let fresh = service
            .new_game("alice", NewGameOptions::default(), &mut rng())
            .unwrap();
        assert_eq!(fresh.total_guesses, 0);
        assert_eq!(service.current("alice").unwrap().unwrap().total_guesses, 0);
    }

    #[test]
    fn guess_without_game() {
        let mut service = service(&["crane"]);
        let err = service.guess("alice", "crane").unwrap_err();

        assert!(matches!(err, CommandError::NoGame));
        assert_eq!(err.to_string(), "Game not started. Start a new game with `newgame`");
    }

    #[test]
    fn continuing_guess_is_saved() {
        let mut service = service(&["crane"]);
        service.new_game("alice", NewGameOptions::default(), &mut rng()).unwrap();

        let report = service.guess("alice", "  TRACE ").unwrap();
        assert_eq!(report.outcome, Outcome::Continue);
        assert_eq!(report.squares, vec!["⬛ 🟩 🟩 🟨 🟩"]);

        let stored = service.current("alice").unwrap().unwrap();
        assert_eq!(stored.guesses, vec!["trace"]);
        assert_eq!(stored.total_guesses, 1);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut service = service(&["crane"]);
        service.new_game("alice", NewGameOptions::default(), &mut rng()).unwrap();
        service.guess("alice", "slate").unwrap();

        let report = service.guess("alice", "crane").unwrap();
        assert_eq!(report.outcome, Outcome::Win);
        assert_eq!(report.verdicts, vec![Verdict::Exact; 5]);
        assert_eq!(report.squares.len(), 2);
        assert_eq!(report.session.total_guesses, 2);
        assert!(service.current("alice").unwrap().is_none());
    }

    #[test]
    fn running_out_of_guesses_ends_game() {
        let mut service = service(&["crane"]);
        let options = NewGameOptions {
            letters: None,
            guesses: Some(1),
        };
        service.new_game("alice", options, &mut rng()).unwrap();

        let report = service.guess("alice", "slate").unwrap();
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert!(service.current("alice").unwrap().is_none());
    }

    #[test]
    fn rejected_guess_keeps_session() {
        let mut service = service(&["crane"]);
        service.new_game("alice", NewGameOptions::default(), &mut rng()).unwrap();

        let short = service.guess("alice", "cran").unwrap_err();
        assert_eq!(short.to_string(), "Incorrect number of characters");

        let invalid = service.guess("alice", "cr@ne").unwrap_err();
        assert_eq!(invalid.to_string(), "Guess has invalid characters");

        let stored = service.current("alice").unwrap().unwrap();
        assert_eq!(stored.total_guesses, 0);
    }

    #[test]
    fn end_game() {
        let mut service = service(&["crane"]);
        assert!(!service.end("alice").unwrap());

        service.new_game("alice", NewGameOptions::default(), &mut rng()).unwrap();
        assert!(service.end("alice").unwrap());
        assert!(service.current("alice").unwrap().is_none());
    }

    #[test]
    fn range_errors_read_as_replies() {
        assert_eq!(
            CommandError::LettersOutOfRange(30).to_string(),
            "Letters must be between 2 and 27"
        );
        assert_eq!(
            CommandError::GuessesOutOfRange(0).to_string(),
            "Guesses must be between 1 and 10"
        );
    }
}
