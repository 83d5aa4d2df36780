//! Game engine
//!
//! The state machine that accepts keys, scores guesses and ends the game.

mod key;
mod notice;
mod state;

pub use key::{KEYBOARD_ROWS, LogicalKey};
pub use notice::{Notice, NoticeKind};
pub use state::{Game, GameError, GameStatus, MAX_GUESSES, Outcome};
