//! Keyboard hint aggregation
//!
//! Folds every submitted guess into one best-known status per letter.

use super::status::{LetterStatus, score_letter};
use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Best-known status per uppercase letter
///
/// Letters that were never guessed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardHints {
    /// Recompute hints from scratch over the whole history
    ///
    /// Every cell is scored with [`score_letter`] and merged by taking the highest
    /// status, so a letter seen `Correct` anywhere is never reported lower.
    #[must_use]
    pub fn compute(history: &[Word], solution: &Word) -> Self {
        let mut hints = Self::default();
        for guess in history {
            for i in 0..WORD_LENGTH {
                hints.merge(guess.char_at(i), score_letter(solution, guess, i));
            }
        }
        hints
    }

    fn merge(&mut self, letter: u8, status: LetterStatus) {
        self.letters
            .entry(letter)
            .and_modify(|best| *best = (*best).max(status))
            .or_insert(status);
    }

    /// Status for a letter, or `None` if it was never guessed
    ///
    /// Lowercase input is looked up as uppercase.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Number of letters with known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True when nothing has been guessed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
