//! TUI rendering with ratatui
//!
//! Board, messages and status bar for the interactive game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Session, Verdict};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 CORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile colors for a verdict
fn tile_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Exact => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// One board row of colored letter tiles
fn guess_line<'a>(guess: &str, verdicts: &[Verdict]) -> Line<'a> {
    let mut spans = Vec::with_capacity(verdicts.len() * 2);
    for (ch, &verdict) in guess.chars().zip(verdicts) {
        spans.push(Span::styled(
            format!(" {} ", ch.to_ascii_uppercase()),
            tile_style(verdict),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn pending_line<'a>(typed: &str, num_letters: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(num_letters * 2);
    let mut chars = typed.chars();
    for _ in 0..num_letters {
        let text = chars
            .next()
            .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
        spans.push(Span::styled(text, Style::default().fg(Color::White)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn board_lines<'a>(session: &Session, typed: &str, active: bool) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = session
        .history()
        .flat_map(|(guess, verdicts)| [guess_line(guess, verdicts), Line::from("")])
        .collect();

    let mut empty_rows = session.remaining_guesses();
    if active && empty_rows > 0 {
        lines.push(pending_line(typed, session.num_letters));
        lines.push(Line::from(""));
        empty_rows -= 1;
    }
    for _ in 0..empty_rows {
        lines.push(pending_line("", session.num_letters).style(Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let content = app.session.as_ref().map_or_else(
        || vec![Line::from("No game in progress")],
        |session| {
            board_lines(
                session,
                &app.input_buffer,
                app.input_mode == InputMode::Guessing,
            )
        },
    );

    let board = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let (used, total) = app
        .session
        .as_ref()
        .map_or((0, 0), |s| (s.total_guesses, s.num_guesses));
    let percent = if total == 0 {
        0
    } else {
        (used * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{total} Guesses"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Guess | Enter to submit, Esc to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let letters_text = format!("Letters: {}", app.num_letters());
    f.render_widget(
        Paragraph::new(letters_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Enter: Submit | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessEvaluator;

    #[test]
    fn board_has_a_row_per_attempt() {
        let mut session = Session::new("crane", 4);
        let evaluator = GuessEvaluator::for_session(&session);
        evaluator.evaluate(&mut session, "slate").unwrap();

        // Each row is followed by a spacer line
        let lines = board_lines(&session, "cr", true);
        assert_eq!(lines.len(), 4 * 2);
    }

    #[test]
    fn guess_line_colors_tiles() {
        let line = guess_line("ab", &[Verdict::Exact, Verdict::Absent]);
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[0].content, " A ");
        assert_eq!(line.spans[0].style.bg, Some(Color::Green));
        assert_eq!(line.spans[2].style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn pending_line_pads_with_blanks() {
        let line = pending_line("c", 3);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " C   _   _  ");
    }
}
