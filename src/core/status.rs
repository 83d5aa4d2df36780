//! Per-letter feedback and the letter scorer

use super::Word;

/// Feedback for a single guessed letter
///
/// Variants are declared in precedence order so the derived `Ord` gives
/// `Absent < Present < Correct`, which is the order used when merging hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter does not occur in the solution
    Absent,
    /// Letter occurs in the solution, at another position
    Present,
    /// Letter is at the same position in the solution
    Correct,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Score the guessed letter at `index` against the solution
///
/// Exact position match first, then a plain "does the solution contain it" check.
/// There is no per-letter budget: a letter guessed more often than it occurs in the
/// solution is reported `Present` at every non-matching position.
///
/// # Panics
/// Panics if `index >= 5`
///
/// # Examples
/// ```
/// use wordle_game::core::{score_letter, LetterStatus, Word};
///
/// let solution = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// assert_eq!(score_letter(&solution, &guess, 0), LetterStatus::Absent);
/// assert_eq!(score_letter(&solution, &guess, 1), LetterStatus::Correct);
/// assert_eq!(score_letter(&solution, &guess, 3), LetterStatus::Present);
/// ```
#[must_use]
pub fn score_letter(solution: &Word, guess: &Word, index: usize) -> LetterStatus {
    let letter = guess.char_at(index);
    if letter == solution.char_at(index) {
        LetterStatus::Correct
    } else if solution.has_letter(letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Absent
    }
}
