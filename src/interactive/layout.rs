//! Screen layout shared by rendering and mouse hit-testing
//!
//! Both sides compute positions from the same frame area, so a click always lands
//! on the key that was drawn there.

use crate::game::{KEYBOARD_ROWS, LogicalKey};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const KEY_GAP: u16 = 1;
const ROW_SPACING: u16 = 2;

/// Regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub grid: Rect,
    pub status: Rect,
    pub notice: Rect,
    pub keyboard: Rect,
    pub help: Rect,
}

/// Split the frame into its regions
#[must_use]
pub fn areas(frame: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(8), // Guess grid
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Notices
            Constraint::Length(7), // Keyboard
            Constraint::Min(1),    // Help
        ])
        .split(frame);

    Areas {
        header: chunks[0],
        grid: chunks[1],
        status: chunks[2],
        notice: chunks[3],
        keyboard: chunks[4],
        help: chunks[5],
    }
}

/// Inside of the keyboard border
#[must_use]
pub fn keyboard_inner(keyboard: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(keyboard)
}

fn key_width(key: LogicalKey) -> u16 {
    match key {
        LogicalKey::Enter => WIDE_KEY_WIDTH,
        _ => KEY_WIDTH,
    }
}

/// Keys of one keyboard row, left to right
///
/// The bottom row is framed by Backspace on the left and Enter on the right.
#[must_use]
pub fn row_keys(row: usize) -> Vec<LogicalKey> {
    let letters = KEYBOARD_ROWS[row].chars().map(LogicalKey::Letter);
    if row == KEYBOARD_ROWS.len() - 1 {
        std::iter::once(LogicalKey::Backspace)
            .chain(letters)
            .chain(std::iter::once(LogicalKey::Enter))
            .collect()
    } else {
        letters.collect()
    }
}

/// Every on-screen key with the cell rectangle it occupies
///
/// `inner` is the keyboard area inside its border. Rows are centered; keys that do
/// not fit are clipped to the area.
#[must_use]
pub fn keyboard_keys(inner: Rect) -> Vec<(LogicalKey, Rect)> {
    let mut keys = Vec::new();

    for row in 0..KEYBOARD_ROWS.len() {
        let y = inner.y + row as u16 * ROW_SPACING;
        if y >= inner.bottom() {
            break;
        }

        let row_keys = row_keys(row);
        let row_width: u16 = row_keys.iter().map(|&k| key_width(k)).sum::<u16>()
            + KEY_GAP * (row_keys.len() as u16).saturating_sub(1);
        let mut x = inner.x + inner.width.saturating_sub(row_width) / 2;

        for key in row_keys {
            let width = key_width(key);
            let rect = Rect::new(x, y, width, 1).intersection(inner);
            if !rect.is_empty() {
                keys.push((key, rect));
            }
            x = x.saturating_add(width + KEY_GAP);
        }
    }

    keys
}

/// Key under a screen position, if any
#[must_use]
pub fn key_at(frame: Rect, column: u16, row: u16) -> Option<LogicalKey> {
    let inner = keyboard_inner(areas(frame).keyboard);
    keyboard_keys(inner)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(key, _)| key)
}
