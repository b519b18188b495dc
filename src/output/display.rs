//! Display functions for command results

use super::formatters::{
    format_lose_message, format_new_game, format_num_guesses, format_transcript,
    format_win_message,
};
use crate::commands::{CommandError, GuessReport};
use crate::core::{Outcome, Session};
use colored::Colorize;

/// Print the reply to a new game
pub fn print_new_game(session: &Session) {
    println!("\n{}", format_new_game(session).bright_cyan());
}

/// Print the reply to a guess: outcome banner, transcript and counter
pub fn print_guess_report(player: &str, report: &GuessReport) {
    let session = &report.session;

    match report.outcome {
        Outcome::Win => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format_win_message(player, &session.answer).green().bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        Outcome::Exhausted => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format_lose_message(player, &session.answer).red().bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        Outcome::Continue => {}
    }

    print_transcript(session, &report.squares);

    let counter = format_num_guesses(session);
    if report.outcome.is_terminal() {
        println!("{}", counter.bright_yellow().bold());
    } else {
        println!("{}", counter.bright_yellow());
    }
}

/// Print guess letters, square rows and separators
pub fn print_transcript(session: &Session, squares: &[String]) {
    println!();
    print!("{}", format_transcript(session, squares));
}

/// Print the reply to `end`
pub fn print_game_ended(ended: bool) {
    if ended {
        println!("{}", "Game ended successfully".bright_cyan());
    } else {
        println!("{}", "No game in progress".bright_black());
    }
}

/// Print a rejected command
pub fn print_command_error(error: &CommandError) {
    eprintln!("{} {error}", "❌".red());
}
