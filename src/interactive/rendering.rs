//! TUI rendering with ratatui
//!
//! Header with the win/loss record, the guess grid, status line, notices and the
//! on-screen keyboard.

use super::app::App;
use super::layout::{self, Areas};
use crate::core::{KeyboardHints, LetterStatus, WORD_LENGTH};
use crate::game::{Game, GameStatus, LogicalKey, MAX_GUESSES, NoticeKind};
use crate::stats::StatsStore;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: StatsStore>(f: &mut Frame, app: &App<S>) {
    let Areas {
        header,
        grid,
        status,
        notice,
        keyboard,
        help,
    } = layout::areas(f.area());

    render_header(f, &app.game, header);
    render_grid(f, &app.game, grid);
    render_status(f, &app.game, status);
    render_notice(f, app, notice);
    render_keyboard(f, app.game.hints(), keyboard);
    render_help(f, &app.game, help);
}

/// Tile colors for a known status
fn status_style(status: LetterStatus) -> Style {
    let bg = match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    };
    Style::default()
        .bg(bg)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn render_header<S: StatsStore>(f: &mut Frame, game: &Game<S>, area: Rect) {
    let stats = game.stats();
    let line = Line::from(vec![
        Span::styled("Wins: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(stats.wins.to_string()),
        Span::raw("   "),
        Span::styled("Losses: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(stats.losses.to_string()),
        Span::raw("   "),
        Span::styled(
            format!("Win Rate: {:.0}%", stats.win_rate()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .title(" WORDLE ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_grid<S: StatsStore>(f: &mut Frame, game: &Game<S>, area: Rect) {
    let empty = Style::default().fg(Color::DarkGray);
    let typing = Style::default()
        .bg(Color::Gray)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = (0..MAX_GUESSES)
        .map(|row| {
            let cells: Vec<(String, Style)> = if let (Some(guess), Some(feedback)) =
                (game.history().get(row), game.feedback().get(row))
            {
                (0..WORD_LENGTH)
                    .map(|i| {
                        (
                            char::from(guess.char_at(i)).to_string(),
                            status_style(feedback.status_at(i)),
                        )
                    })
                    .collect()
            } else if row == game.history().len() && !game.is_over() {
                let mut letters = game.buffer().chars();
                (0..WORD_LENGTH)
                    .map(|_| match letters.next() {
                        Some(c) => (c.to_string(), typing),
                        None => ("_".to_string(), empty),
                    })
                    .collect()
            } else {
                (0..WORD_LENGTH).map(|_| ("·".to_string(), empty)).collect()
            };

            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for (i, (letter, style)) in cells.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!("  {letter}  "), style));
            }
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

/// One-line summary of where the game stands
#[must_use]
pub fn status_text<S: StatsStore>(game: &Game<S>) -> String {
    match game.status() {
        GameStatus::Active => format!("Guess {} of {MAX_GUESSES}", game.history().len() + 1),
        GameStatus::Won => format!(
            "Solved in {}/{MAX_GUESSES}! Press Enter to play again",
            game.history().len()
        ),
        GameStatus::Lost => format!(
            "Game Over! The word was {}. Press Enter to play again",
            game.solution()
        ),
    }
}

fn render_status<S: StatsStore>(f: &mut Frame, game: &Game<S>, area: Rect) {
    let color = match game.status() {
        GameStatus::Active => Color::White,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
    };
    let status = Paragraph::new(status_text(game))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(status, area);
}

fn render_notice<S: StatsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, color) = match app.current_notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            (notice.text.as_str(), color)
        }
        None => ("", Color::DarkGray),
    };

    let notice = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(notice, area);
}

fn key_style(hints: &KeyboardHints, key: LogicalKey) -> Style {
    match key {
        LogicalKey::Letter(c) => hints.get(c).map_or_else(
            || Style::default().bg(Color::Gray).fg(Color::Black),
            status_style,
        ),
        LogicalKey::Enter | LogicalKey::Backspace => Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_keyboard(f: &mut Frame, hints: &KeyboardHints, area: Rect) {
    let block = Block::default()
        .title(" Keyboard (click or type) ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);

    for (key, rect) in layout::keyboard_keys(layout::keyboard_inner(area)) {
        let label = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(key_style(hints, key));
        f.render_widget(label, rect);
    }
}

fn render_help<S: StatsStore>(f: &mut Frame, game: &Game<S>, area: Rect) {
    let help_text = if game.is_over() {
        "Enter/n: New Game | Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
