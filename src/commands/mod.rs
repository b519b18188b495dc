//! Command implementations

pub mod game;
pub mod simple;

pub use game::{CommandError, GameService, GuessReport, NewGameOptions};
pub use simple::run_simple;
