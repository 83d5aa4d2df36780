//! Whole-guess feedback
//!
//! A `Feedback` holds one `LetterStatus` per column of a guess, in column order.

use super::status::{LetterStatus, score_letter};
use super::{WORD_LENGTH, Word};

/// Feedback for a complete guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Create feedback from explicit per-column statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score every column of `guess` against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::evaluate(&solution, &guess);
    ///
    /// assert_eq!(feedback.statuses(), &[Absent, Correct, Correct, Present, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(solution: &Word, guess: &Word) -> Self {
        Self(std::array::from_fn(|i| score_letter(solution, guess, i)))
    }

    /// Per-column statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status of a single column
    ///
    /// # Panics
    /// Panics if `index >= 5`
    #[inline]
    #[must_use]
    pub const fn status_at(&self, index: usize) -> LetterStatus {
        self.0[index]
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn evaluate(solution: &str, guess: &str) -> Feedback {
        Feedback::evaluate(&Word::new(solution).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn crane_trace() {
        // R, A and E share columns; C is in CRANE but not at column 3
        let feedback = evaluate("CRANE", "TRACE");
        assert_eq!(
            feedback.statuses(),
            &[Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn apple_paper_uses_plain_contains() {
        // P and A swap places, second P lands on the P at column 2, E is elsewhere
        let feedback = evaluate("APPLE", "PAPER");
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn extra_copies_stay_present() {
        // One E in the solution, three in the guess
        let feedback = evaluate("CRANE", "EEVEE");
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Absent, Present, Correct]
        );
    }

    #[test]
    fn all_absent() {
        let feedback = evaluate("CRANE", "TOMBS");
        assert_eq!(feedback.statuses(), &[Absent; WORD_LENGTH]);
        assert_eq!(feedback.to_emoji(), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn self_match_is_all_correct() {
        for w in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert_eq!(evaluate(w, w).statuses(), &[Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(feedback.status_at(2), Absent);
    }
}
