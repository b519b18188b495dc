//! TUI application state and logic

use crate::commands::{GameService, NewGameOptions};
use crate::config::LOCAL_PLAYER;
use crate::core::{Outcome, Session};
use crate::store::MemoryStore;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub service: GameService<MemoryStore>,
    pub options: NewGameOptions,
    /// Board being shown; kept after the game ends so the result stays visible
    pub session: Option<Session>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts used (index 0 unused)
    pub guess_distribution: [usize; 11],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(dictionary: Dictionary, options: NewGameOptions) -> Self {
        Self {
            service: GameService::new(MemoryStore::new(), dictionary),
            options,
            session: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Type a word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Letters in the current answer (0 before the first game)
    #[must_use]
    pub fn num_letters(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.num_letters)
    }

    pub fn new_game(&mut self) {
        self.input_buffer.clear();

        match self
            .service
            .new_game(LOCAL_PLAYER, self.options, &mut rand::rng())
        {
            Ok(session) => {
                self.add_message(
                    &format!(
                        "New game! {} letters, {} guesses.",
                        session.num_letters, session.num_guesses
                    ),
                    MessageStyle::Info,
                );
                self.session = Some(session);
                self.input_mode = InputMode::Guessing;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.session = None;
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.service.guess(LOCAL_PLAYER, &guess) {
            Ok(report) => {
                match report.outcome {
                    Outcome::Win => {
                        let used = report.session.total_guesses;
                        self.stats.total_games += 1;
                        self.stats.games_won += 1;
                        if let Some(slot) = self.stats.guess_distribution.get_mut(used) {
                            *slot += 1;
                        }
                        self.add_message(
                            &format!(
                                "🎉 Solved in {used} {}!",
                                if used == 1 { "guess" } else { "guesses" }
                            ),
                            MessageStyle::Success,
                        );
                        self.input_mode = InputMode::GameOver;
                    }
                    Outcome::Exhausted => {
                        self.stats.total_games += 1;
                        self.add_message(
                            &format!("Out of guesses! Word was {}", report.session.answer.to_uppercase()),
                            MessageStyle::Error,
                        );
                        self.input_mode = InputMode::GameOver;
                    }
                    Outcome::Continue => {}
                }
                self.session = Some(report.session);

                if self.input_mode == InputMode::GameOver {
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer = guess;
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a typed character to the guess buffer
    pub fn push_char(&mut self, c: char) {
        let limit = self.num_letters().max(1);
        if c.is_ascii_alphabetic() && self.input_buffer.len() < limit {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal even when the game failed, then report the first error
    let restored = restore_terminal(&mut terminal);
    res?;
    Ok(restored?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let mut app = App::new(Dictionary::from_words(["crane"]), NewGameOptions::default());
        app.new_game();
        app
    }

    #[test]
    fn new_game_shows_empty_board() {
        let app = app();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.num_letters(), 5);
        assert_eq!(app.session.as_ref().unwrap().total_guesses, 0);
    }

    #[test]
    fn typing_is_limited_to_letters_and_length() {
        let mut app = app();
        for c in "Cr4ane!xyz".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "crane");
    }

    #[test]
    fn winning_updates_stats() {
        let mut app = app();
        app.input_buffer = "slate".to_string();
        app.submit_guess();
        assert_eq!(app.input_mode, InputMode::Guessing);

        app.input_buffer = "crane".to_string();
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert_eq!(app.session.as_ref().unwrap().guesses.len(), 2);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejected_guess_keeps_buffer() {
        let mut app = app();
        app.input_buffer = "cra".to_string();
        app.submit_guess();

        assert_eq!(app.input_buffer, "cra");
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Error));
    }

    #[test]
    fn losing_counts_a_game() {
        let mut app = App::new(
            Dictionary::from_words(["crane"]),
            NewGameOptions {
                letters: None,
                guesses: Some(1),
            },
        );
        app.new_game();
        app.input_buffer = "slate".to_string();
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    fn press(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn event_errors_end_the_game_loop() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let app = App::new(Dictionary::from_words(["crane"]), NewGameOptions::default());

        let mut events = vec![
            press(KeyCode::Char('c')),
            Err(io::Error::other("terminal gone")),
        ]
        .into_iter();
        let result = run_app(&mut terminal, app, || events.next().unwrap());

        assert_eq!(result.unwrap_err().to_string(), "terminal gone");
    }

    #[test]
    fn escape_quits_cleanly() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let app = App::new(Dictionary::from_words(["crane"]), NewGameOptions::default());

        let mut events = vec![press(KeyCode::Char('c')), press(KeyCode::Esc)].into_iter();
        assert!(run_app(&mut terminal, app, || events.next().unwrap()).is_ok());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "m9");
    }
}
