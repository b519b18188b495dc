//! Formatting utilities for game replies

use crate::core::Session;

/// Guess letters, uppercased and spaced to line up with a row of squares
#[must_use]
pub fn format_guess_letters(guess: &str) -> String {
    guess
        .chars()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

/// Separator drawn under each transcript row
#[must_use]
pub fn guess_separator(num_letters: usize) -> String {
    "-".repeat(num_letters * 3)
}

/// Guess history: letters, squares and a separator per guess
///
/// `squares` holds one pre-rendered row per recorded guess.
#[must_use]
pub fn format_transcript(session: &Session, squares: &[String]) -> String {
    let separator = guess_separator(session.num_letters);

    session
        .guesses
        .iter()
        .zip(squares)
        .map(|(guess, row)| format!("{}\n{row}\n{separator}\n", format_guess_letters(guess)))
        .collect()
}

/// Attempt counter, e.g. `3/6 Guesses`
#[must_use]
pub fn format_num_guesses(session: &Session) -> String {
    format!("{}/{} Guesses", session.total_guesses, session.num_guesses)
}

#[must_use]
pub fn format_win_message(player: &str, answer: &str) -> String {
    format!("{player} Won!\n\nWord was {}", answer.to_uppercase())
}

#[must_use]
pub fn format_lose_message(player: &str, answer: &str) -> String {
    format!("{player} Lost!\n\nWord was {}", answer.to_uppercase())
}

/// Reply to a successful `newgame`
#[must_use]
pub fn format_new_game(session: &Session) -> String {
    format!(
        "New game started!\n\nLetters: {}\nGuesses: {}",
        session.num_letters, session.num_guesses
    )
}
