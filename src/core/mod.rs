//! Core domain types for Wordle
//!
//! Words, per-letter scoring, whole-guess feedback and keyboard hints.
//! Everything here is pure and free of I/O.

mod feedback;
mod hints;
mod status;
mod word;

pub use feedback::Feedback;
pub use hints::KeyboardHints;
pub use status::{LetterStatus, score_letter};
pub use word::{WORD_LENGTH, Word, WordError};
