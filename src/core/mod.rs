//! Core game engine
//!
//! Pure domain types: the answer's letter index, per-player sessions, verdicts
//! and the evaluator that scores guesses. No I/O happens here.

mod error;
mod evaluator;
mod letter_index;
mod session;
mod verdict;

pub use error::EngineError;
pub use evaluator::{Evaluation, GuessEvaluator, Outcome};
pub use letter_index::{LetterEntry, LetterIndex};
pub use session::Session;
pub use verdict::{Verdict, VerdictVector};
