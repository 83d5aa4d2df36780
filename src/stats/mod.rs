//! Win/loss statistics and their persistence
//!
//! The game only ever talks to a [`StatsStore`]: `load` once when a game starts and
//! `save` once when it finishes. Where the record lives is up to the store.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Lifetime win/loss counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub wins: u32,
    pub losses: u32,
}

impl GameStats {
    /// Total completed games
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win percentage in `0.0..=100.0`, zero when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let played = self.games_played();
        if played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(played) * 100.0
        }
    }

    /// Counters with one more finished game recorded
    #[must_use]
    pub const fn record(self, won: bool) -> Self {
        if won {
            Self {
                wins: self.wins.saturating_add(1),
                losses: self.losses,
            }
        } else {
            Self {
                wins: self.wins,
                losses: self.losses.saturating_add(1),
            }
        }
    }
}

/// Errors raised by stats stores
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("could not determine a data directory for stats")]
    NoDataDir,
    #[error("stats file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stats file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable storage for [`GameStats`]
pub trait StatsStore {
    /// Read the stored record, or `None` if there is none yet
    fn load(&self) -> Option<GameStats>;

    /// Overwrite the stored record
    ///
    /// # Errors
    ///
    /// Returns `StatsError` if the record could not be written. The previous record
    /// must remain readable in that case.
    fn save(&mut self, stats: &GameStats) -> Result<(), StatsError>;
}

/// Enum wrapper for the available stores
///
/// Allows choosing the store at runtime while keeping `Game` generic.
#[derive(Debug)]
pub enum StoreType {
    /// JSON file on disk
    File(JsonFileStore),
    /// Nothing survives the process
    Memory(MemoryStore),
}

impl StatsStore for StoreType {
    fn load(&self) -> Option<GameStats> {
        match self {
            Self::File(s) => s.load(),
            Self::Memory(s) => s.load(),
        }
    }

    fn save(&mut self, stats: &GameStats) -> Result<(), StatsError> {
        match self {
            Self::File(s) => s.save(stats),
            Self::Memory(s) => s.save(stats),
        }
    }
}
