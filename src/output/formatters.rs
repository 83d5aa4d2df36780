//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardHints, LetterStatus, WORD_LENGTH, Word};
use crate::game::KEYBOARD_ROWS;
use colored::{ColoredString, Colorize};

/// Format one letter as a colored tile
///
/// `None` renders the neutral tile used for letters without feedback.
#[must_use]
pub fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.black().on_white(),
    }
}

/// Format a scored guess as a row of tiles
#[must_use]
pub fn format_row(guess: &Word, feedback: &Feedback) -> String {
    (0..WORD_LENGTH)
        .map(|i| {
            tile(char::from(guess.char_at(i)), Some(feedback.status_at(i))).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the keyboard, one line per row, colored by hints
#[must_use]
pub fn format_keyboard(hints: &KeyboardHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row, letters)| {
            let keys: Vec<String> = letters
                .chars()
                .map(|c| tile(c, hints.get(c)).to_string())
                .collect();
            format!("{}{}", "  ".repeat(row), keys.join(""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
