//! Engine error kinds

use thiserror::Error;

/// Precondition failures of [`GuessEvaluator::evaluate`](super::GuessEvaluator::evaluate)
///
/// Reported in this order: the first failing check wins. A failed call never
/// mutates the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Cordle not initialized")]
    NotInitialized,

    #[error("Guess length {actual} less than answer length {expected}")]
    GuessTooShort { expected: usize, actual: usize },

    #[error("Guess has non-letters")]
    InvalidCharacters,
}
