//! Display functions for the line-based game and the stats command

use super::formatters::{create_progress_bar, format_keyboard, format_row, tile};
use crate::core::WORD_LENGTH;
use crate::game::{Game, MAX_GUESSES, Notice, NoticeKind};
use crate::stats::{GameStats, StatsStore};
use colored::Colorize;
use std::io::{self, Write};

/// Write the guess grid followed by the keyboard hints
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write, S: StatsStore>(out: &mut W, game: &Game<S>) -> io::Result<()> {
    writeln!(out)?;
    for (guess, feedback) in game.history().iter().zip(game.feedback()) {
        writeln!(out, "  {}", format_row(guess, feedback))?;
    }
    for _ in game.history().len()..MAX_GUESSES {
        let blank: Vec<String> = (0..WORD_LENGTH)
            .map(|_| tile('·', None).dimmed().to_string())
            .collect();
        writeln!(out, "  {}", blank.join(" "))?;
    }
    writeln!(out)?;
    for line in format_keyboard(game.hints()).lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Write a notice in its kind's color
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    let text = match notice.kind {
        NoticeKind::Success => notice.text.green().bold(),
        NoticeKind::Error => notice.text.red().bold(),
    };
    writeln!(out, "{text}")
}

/// Write the win/loss record
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_stats<W: Write>(out: &mut W, stats: &GameStats) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {} ", "WORDLE STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, "   Played:    {}", stats.games_played())?;
    writeln!(out, "   Wins:      {}", stats.wins.to_string().green().bold())?;
    writeln!(out, "   Losses:    {}", stats.losses.to_string().red())?;
    writeln!(
        out,
        "   Win rate:  [{}] {:.0}%",
        create_progress_bar(stats.win_rate(), 100.0, 20).green(),
        stats.win_rate()
    )?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::MemoryStore;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_guesses_and_blank_rows() {
        let mut game = Game::from_text("crane", MemoryStore::default()).unwrap();
        for c in "trace".chars() {
            game.append_character(c);
        }
        game.submit_guess().unwrap();

        let board = render(|out| write_board(out, &game));
        assert!(board.contains(" T   R   A   C   E "));
        assert_eq!(board.matches(" ·   ·   ·   ·   · ").count(), 5);
        assert!(board.contains(" Q  W  E "));
    }

    #[test]
    fn stats_block() {
        let text = render(|out| write_stats(out, &GameStats { wins: 3, losses: 1 }));
        assert!(text.contains("Played:    4"));
        assert!(text.contains("Wins:      3"));
        assert!(text.contains("75%"));
    }

    #[test]
    fn notice_text() {
        let text = render(|out| write_notice(out, &Notice::lost("CRANE")));
        assert_eq!(text, "Game Over! The word was CRANE\n");
    }
}
