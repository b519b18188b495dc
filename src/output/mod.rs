//! Terminal output formatting
//!
//! Reply texts and pretty-printing for game commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_command_error, print_game_ended, print_guess_report, print_new_game, print_transcript,
};
