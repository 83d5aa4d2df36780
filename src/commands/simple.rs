//! Simple line-based game
//!
//! Plays a full game without the TUI: each input line is typed into the game as
//! individual keys followed by Enter.

use crate::game::{Game, GameStatus, LogicalKey, MAX_GUESSES};
use crate::output::{write_board, write_notice};
use crate::stats::StatsStore;
use crate::wordlists::WordPool;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// solution cannot be picked.
pub fn run_simple<S: StatsStore, R: Rng + ?Sized>(
    game: Game<S>,
    pool: &WordPool,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(game, pool, rng, &mut stdin.lock(), &mut stdout.lock()).map(|_| ())
}

/// Play games reading guesses from `input` until the player quits or input ends
///
/// Returns the last game so callers can inspect the final state.
///
/// # Errors
///
/// Returns an error if I/O fails or a new solution cannot be picked.
pub fn play<S, R, I, O>(
    mut game: Game<S>,
    pool: &WordPool,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
) -> Result<Game<S>>
where
    S: StatsStore,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║         Wordle - Simple Mode         ║")?;
    writeln!(out, "╚══════════════════════════════════════╝")?;
    writeln!(
        out,
        "Guess the five-letter word in {MAX_GUESSES} tries. Type 'quit' to exit."
    )?;

    loop {
        write_board(out, &game)?;

        if game.is_over() {
            write_summary(out, &game)?;
            match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    game = game.reset(pool.pick(&mut *rng)?);
                    writeln!(out, "\n🔄 New game started!")?;
                    continue;
                }
                _ => break,
            }
        }

        let label = format!("Guess {} of {MAX_GUESSES}", game.history().len() + 1);
        let Some(line) = prompt(input, out, &label)? else {
            break;
        };

        match line.as_str() {
            "quit" | "exit" => break,
            _ => {
                // Start from an empty buffer so every line is one whole guess
                while game.delete_character() {}
                for c in line.chars() {
                    if let Some(key) = LogicalKey::letter(c) {
                        game.handle_key(key);
                    }
                }
                if let Some(notice) = game.handle_key(LogicalKey::Enter) {
                    write_notice(out, &notice)?;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(game)
}

fn write_summary<W: Write, S: StatsStore>(out: &mut W, game: &Game<S>) -> io::Result<()> {
    let stats = game.stats();
    if game.status() == GameStatus::Won {
        writeln!(
            out,
            "{}",
            format!("Solved in {}/{MAX_GUESSES}!", game.history().len())
                .green()
                .bold()
        )?;
    }
    writeln!(out, "\n{}\n", game.share_text())?;
    writeln!(
        out,
        "Record: {} wins, {} losses",
        stats.wins.to_string().green(),
        stats.losses.to_string().red()
    )
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{GameStats, MemoryStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(solution: &str, pool: &[&str], input: &str) -> (Game<MemoryStore>, String) {
        colored::control::set_override(false);
        let game = Game::from_text(solution, MemoryStore::default()).unwrap();
        let pool = WordPool::from_words(pool.iter().map(|w| (*w).to_string()).collect()).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut out = Vec::new();
        let game = play(game, &pool, &mut rng, &mut input.as_bytes(), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_then_decline() {
        let (game, out) = run("crane", &["crane"], "trace\ncrane\nno\n");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.history().len(), 2);
        assert!(out.contains("Congratulations! You won!"));
        assert!(out.contains("Solved in 2/6!"));
        assert!(out.contains("Record: 1 wins, 0 losses"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn short_line_reports_invalid_length() {
        let (game, out) = run("crane", &["crane"], "abc\nquit\n");
        assert!(out.contains("Word must be 5 letters long"));
        assert!(game.history().is_empty());
    }

    #[test]
    fn non_letters_are_ignored() {
        let (game, _) = run("crane", &["crane"], "t-r-a-c-e\n");
        assert_eq!(game.history()[0].text(), "TRACE");
    }

    #[test]
    fn loss_reveals_word() {
        let input = "ghost\n".repeat(MAX_GUESSES) + "no\n";
        let (game, out) = run("crane", &["crane"], &input);
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(out.contains("Game Over! The word was CRANE"));
        assert_eq!(game.stats(), GameStats { wins: 0, losses: 1 });
    }

    #[test]
    fn play_again_starts_new_solution() {
        let (game, out) = run("crane", &["slate"], "crane\nyes\nslate\nno\n");
        assert!(out.contains("New game started"));
        assert_eq!(game.solution().text(), "SLATE");
        assert_eq!(game.stats(), GameStats { wins: 2, losses: 0 });
    }

    #[test]
    fn end_of_input_exits() {
        let (game, out) = run("crane", &["crane"], "tra");
        assert!(game.history().is_empty());
        assert!(out.contains("Thanks for playing"));
    }
}
