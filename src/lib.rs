//! Cordle
//!
//! A word-guessing game engine: score guesses against a secret answer, decide
//! win/lose/continue, and render the verdicts as colored squares.
//!
//! # Quick Start
//!
//! ```rust
//! use cordle::core::{GuessEvaluator, Outcome, Session};
//!
//! let mut session = Session::new("crane", 6);
//! let evaluator = GuessEvaluator::for_session(&session);
//!
//! let result = evaluator.evaluate(&mut session, "slate").unwrap();
//! assert_eq!(result.outcome, Outcome::Continue);
//!
//! let squares = evaluator.render_squares(&result.verdicts).unwrap();
//! assert_eq!(squares.concat(), "⬛⬛🟩⬛🟩");
//! ```

// Core game engine
pub mod core;

// Limits and file locations
pub mod config;

// Session storage
pub mod store;

// Answer dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
