//! Game state machine
//!
//! A `Game` is one round against one solution: `Active` until the solution is guessed
//! (`Won`) or six guesses are used up (`Lost`). Starting over means building a new
//! instance around a new solution.

use super::{LogicalKey, Notice};
use crate::core::{Feedback, KeyboardHints, WORD_LENGTH, Word, WordError};
use crate::stats::{GameStats, StatsStore};
use log::{debug, info, warn};
use thiserror::Error;

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

/// Errors raised by the game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess submitted with the wrong number of letters
    #[error("Word must be 5 letters long, got {0}")]
    InvalidLength(usize),
    /// Solution is not five letters A-Z
    #[error("Malformed solution: {0}")]
    MalformedSolution(#[from] WordError),
}

/// One game instance
///
/// Owns the solution, guess history, in-progress buffer and the stats store.
#[derive(Debug)]
pub struct Game<S: StatsStore> {
    solution: Word,
    history: Vec<Word>,
    feedback: Vec<Feedback>,
    buffer: String,
    hints: KeyboardHints,
    stats: GameStats,
    store: S,
}

impl<S: StatsStore> Game<S> {
    /// Start a game against `solution`, loading stats from `store`
    pub fn new(solution: Word, store: S) -> Self {
        let stats = store.load().unwrap_or_default();
        Self::with_stats(solution, store, stats)
    }

    /// Start a game against `solution` with counters already in hand
    ///
    /// `stats` is used as-is; `store` only receives the next save.
    pub fn with_stats(solution: Word, store: S, stats: GameStats) -> Self {
        info!(
            "New game started ({} wins, {} losses so far)",
            stats.wins, stats.losses
        );
        debug!("Solution is {solution}");

        Self {
            solution,
            history: Vec::with_capacity(MAX_GUESSES),
            feedback: Vec::with_capacity(MAX_GUESSES),
            buffer: String::with_capacity(WORD_LENGTH),
            hints: KeyboardHints::default(),
            stats,
            store,
        }
    }

    /// Start a game from raw solution text
    ///
    /// # Errors
    ///
    /// Returns `GameError::MalformedSolution` if `solution` is not exactly five ASCII letters.
    pub fn from_text(solution: &str, store: S) -> Result<Self, GameError> {
        Ok(Self::new(Word::new(solution)?, store))
    }

    /// Discard this game and start a fresh one against a new solution
    ///
    /// The stats store and the in-memory counters carry over, so a result whose
    /// save failed is still counted by the next game.
    #[must_use]
    pub fn reset(self, solution: Word) -> Self {
        Self::with_stats(solution, self.store, self.stats)
    }

    /// Tear down the game and hand back its store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Dispatch a logical key
    ///
    /// Returns the notice to show the player, if any.
    pub fn handle_key(&mut self, key: LogicalKey) -> Option<Notice> {
        match key {
            LogicalKey::Letter(c) => {
                self.append_character(c);
                None
            }
            LogicalKey::Backspace => {
                self.delete_character();
                None
            }
            LogicalKey::Enter => match self.submit_guess() {
                Ok(Some(Outcome::Won)) => Some(Notice::won()),
                Ok(Some(Outcome::Lost)) => Some(Notice::lost(self.solution.text())),
                Ok(Some(Outcome::Continue) | None) => None,
                Err(GameError::InvalidLength(_)) => Some(Notice::invalid_length()),
                Err(e @ GameError::MalformedSolution(_)) => {
                    warn!("Rejected guess: {e}");
                    None
                }
            },
        }
    }

    /// Add a letter to the in-progress guess
    ///
    /// Ignored once the game is over, when the buffer already holds five letters, or
    /// when `letter` is not A-Z. Lowercase is accepted and uppercased.
    /// Returns whether the buffer changed.
    pub fn append_character(&mut self, letter: char) -> bool {
        if self.is_over() || self.buffer.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.buffer.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the in-progress guess
    ///
    /// Returns whether the buffer changed.
    pub fn delete_character(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Submit the in-progress guess
    ///
    /// Returns `Ok(None)` without touching anything when the game is already over.
    /// On the transition into `Won` or `Lost` the stats are updated and saved once.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidLength` if the buffer does not hold exactly five
    /// letters. Buffer and history are left unchanged.
    pub fn submit_guess(&mut self) -> Result<Option<Outcome>, GameError> {
        if self.is_over() {
            debug!("Ignoring submit, game is over");
            return Ok(None);
        }

        let len = self.buffer.len();
        if len != WORD_LENGTH {
            debug!("Rejected guess {:?}: {len} letters", self.buffer);
            return Err(GameError::InvalidLength(len));
        }

        // Buffer only ever holds A-Z, so this cannot fail on content
        let guess = Word::new(self.buffer.as_str()).map_err(|_| GameError::InvalidLength(len))?;
        let feedback = Feedback::evaluate(&self.solution, &guess);
        info!(
            "Guess {}/{MAX_GUESSES}: {guess} {}",
            self.history.len() + 1,
            feedback.to_emoji()
        );

        self.history.push(guess);
        self.feedback.push(feedback);
        self.buffer.clear();
        self.hints = KeyboardHints::compute(&self.history, &self.solution);

        let outcome = if self.has_won() {
            Outcome::Won
        } else if self.history.len() == MAX_GUESSES {
            Outcome::Lost
        } else {
            Outcome::Continue
        };

        if outcome != Outcome::Continue {
            self.record_result(outcome == Outcome::Won);
        }

        Ok(Some(outcome))
    }

    fn record_result(&mut self, won: bool) {
        self.stats = self.stats.record(won);
        if won {
            info!("Game won in {} guesses", self.history.len());
        } else {
            info!("Game lost, solution was {}", self.solution);
        }

        if let Err(e) = self.store.save(&self.stats) {
            warn!("Failed to save stats: {e}");
        }
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.history.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// True once the game is won or all guesses are used
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.has_won() || self.history.len() >= MAX_GUESSES
    }

    /// True when the last guess equals the solution
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.history.last() == Some(&self.solution)
    }

    /// Secret word for this game
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Submitted guesses, first attempt first
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Feedback for each submitted guess, parallel to `history`
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Best-known status per letter
    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// Win/loss counters, including this game once it has finished
    #[must_use]
    pub const fn stats(&self) -> GameStats {
        self.stats
    }

    /// Emoji grid of all feedback rows, one row per line
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = if self.has_won() {
            self.history.len().to_string()
        } else {
            "X".to_string()
        };
        let rows: Vec<String> = self.feedback.iter().map(Feedback::to_emoji).collect();
        format!("Wordle {score}/{MAX_GUESSES}\n\n{}", rows.join("\n"))
    }
}
