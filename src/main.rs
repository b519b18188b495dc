//! Cordle - CLI
//!
//! Word-guessing game with a TUI, a line-based mode and single-shot commands
//! that keep each player's game in a session file between runs.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use cordle::{
    commands::{CommandError, GameService, NewGameOptions, run_simple},
    config::{LOCAL_PLAYER, default_player, default_store_path},
    output::{print_command_error, print_game_ended, print_guess_report, print_new_game},
    store::{JsonFileStore, MemoryStore},
    wordlists::{Dictionary, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cordle",
    about = "Guess the hidden word: 🟩 right spot, 🟨 wrong spot, ⬛ not in the word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player id for newgame/guess/end (default: your user name)
    #[arg(short, long, global = true, env = "CORDLE_PLAYER")]
    player: Option<String>,

    /// Session file for newgame/guess/end
    #[arg(long, global = true, env = "CORDLE_STORE")]
    store: Option<PathBuf>,

    /// Custom dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Number of letters in the word (2-27)
        #[arg(short, long)]
        letters: Option<usize>,

        /// Number of guesses available (1-10)
        #[arg(short, long)]
        guesses: Option<usize>,
    },

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Start a new game, replacing the current one
    Newgame {
        /// Number of letters in the word (2-27)
        #[arg(short, long)]
        letters: Option<usize>,

        /// Number of guesses available (1-10)
        #[arg(short, long)]
        guesses: Option<usize>,
    },

    /// Make a guess in the current game
    Guess {
        /// The guessed word
        word: String,
    },

    /// End the current game
    End,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        letters: None,
        guesses: None,
    });

    init_logging(cli.verbose, matches!(command, Commands::Play { .. }));

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    debug!(words = dictionary.len(), "dictionary loaded");

    let player = cli.player.unwrap_or_else(default_player);
    let store_path = cli.store.unwrap_or_else(default_store_path);

    match command {
        Commands::Play { letters, guesses } => {
            run_play_command(dictionary, NewGameOptions { letters, guesses })?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Simple => {
            let mut service = GameService::new(MemoryStore::new(), dictionary);
            run_simple(&mut service, LOCAL_PLAYER)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Newgame { letters, guesses } => {
            let options = NewGameOptions { letters, guesses };
            Ok(report(run_newgame_command(
                &store_path,
                &player,
                dictionary,
                options,
            )))
        }
        Commands::Guess { word } => Ok(report(run_guess_command(
            &store_path,
            &player,
            dictionary,
            &word,
        ))),
        Commands::End => Ok(report(run_end_command(&store_path, &player, dictionary))),
    }
}

/// Log to stderr; the TUI stays quiet unless `RUST_LOG` asks otherwise
fn init_logging(verbose: u8, tui: bool) {
    let level = match (tui, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cordle={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary selected by `-w`
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        None => Ok(Dictionary::embedded()),
        Some(path) => {
            let dictionary = load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?;
            anyhow::ensure!(
                !dictionary.is_empty(),
                "Word list {} has no usable words",
                path.display()
            );
            Ok(dictionary)
        }
    }
}

/// Print a command failure and turn it into the exit code
fn report(result: Result<(), CommandError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_command_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn file_service(store_path: &Path, dictionary: Dictionary) -> GameService<JsonFileStore> {
    info!(store = %store_path.display(), "using session file");
    GameService::new(JsonFileStore::new(store_path), dictionary)
}

fn run_newgame_command(
    store_path: &Path,
    player: &str,
    dictionary: Dictionary,
    options: NewGameOptions,
) -> Result<(), CommandError> {
    let mut service = file_service(store_path, dictionary);
    let session = service.new_game(player, options, &mut rand::rng())?;
    print_new_game(&session);
    Ok(())
}

fn run_guess_command(
    store_path: &Path,
    player: &str,
    dictionary: Dictionary,
    word: &str,
) -> Result<(), CommandError> {
    let mut service = file_service(store_path, dictionary);
    let report = service.guess(player, word)?;
    print_guess_report(player, &report);
    Ok(())
}

fn run_end_command(
    store_path: &Path,
    player: &str,
    dictionary: Dictionary,
) -> Result<(), CommandError> {
    let mut service = file_service(store_path, dictionary);
    let ended = service.end(player)?;
    print_game_ended(ended);
    Ok(())
}

fn run_play_command(dictionary: Dictionary, options: NewGameOptions) -> Result<()> {
    use cordle::interactive::{App, run_tui};

    let app = App::new(dictionary, options);
    run_tui(app)
}
