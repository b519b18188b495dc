//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use super::game::{GameService, NewGameOptions};
use crate::output::{print_command_error, print_game_ended, print_guess_report, print_new_game};
use crate::store::SessionStore;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    NewGame(NewGameOptions),
    End,
    Quit,
    Help,
    Guess(String),
    Invalid(String),
}

/// Parse a line typed in simple mode
///
/// Commands start with a slash (`/new [letters] [guesses]`, `/end`, `/help`,
/// `/quit`) so they never clash with guesses; anything else is a guess.
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        if line.is_empty() {
            return Input::Invalid("Type a guess or /help".to_string());
        }
        return Input::Guess(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match parts.next().map(str::to_lowercase).as_deref() {
        Some("new" | "newgame") => {
            let mut numbers = parts.map(str::parse::<usize>);
            let letters = numbers.next().transpose();
            let guesses = numbers.next().transpose();
            let extra = numbers.next().is_some();

            match (letters, guesses) {
                (Ok(letters), Ok(guesses)) if !extra => {
                    Input::NewGame(NewGameOptions { letters, guesses })
                }
                _ => Input::Invalid("Usage: /new [letters] [guesses]".to_string()),
            }
        }
        Some("end") => Input::End,
        Some("quit" | "q" | "exit") => Input::Quit,
        Some("help" | "?") => Input::Help,
        _ => Input::Invalid(format!("Unknown command '{line}', try /help")),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S: SessionStore>(service: &mut GameService<S>, player: &str) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Cordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut rng = rand::rng();

    match service.new_game(player, NewGameOptions::default(), &mut rng) {
        Ok(session) => print_new_game(&session),
        Err(e) => print_command_error(&e),
    }

    loop {
        let Some(line) = get_user_input("\nGuess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_input(&line) {
            Input::NewGame(options) => match service.new_game(player, options, &mut rng) {
                Ok(session) => print_new_game(&session),
                Err(e) => print_command_error(&e),
            },
            Input::End => match service.end(player) {
                Ok(ended) => print_game_ended(ended),
                Err(e) => print_command_error(&e),
            },
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Help => print_help(),
            Input::Guess(guess) => match service.guess(player, &guess) {
                Ok(report) => {
                    print_guess_report(player, &report);
                    if report.outcome.is_terminal() {
                        println!("\nType /new to play again or /quit to exit.");
                    }
                }
                Err(e) => print_command_error(&e),
            },
            Input::Invalid(message) => println!("{}", message.yellow()),
        }
    }
}

fn print_help() {
    println!("Guess the hidden word. After each guess:");
    println!("  🟩 letter in the right spot");
    println!("  🟨 letter in the word, wrong spot");
    println!("  ⬛ letter not in the word (or used more often than it appears)\n");
    println!("Commands: /new [letters] [guesses], /end, /help, /quit");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
