//! In-memory stats store

use super::{GameStats, StatsError, StatsStore};

/// Keeps the record in memory only
///
/// Used for `--no-save` and as the test double for the game.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    stats: Option<GameStats>,
    saves: usize,
}

impl MemoryStore {
    /// Store pre-populated with a record
    #[must_use]
    pub const fn with_stats(stats: GameStats) -> Self {
        Self {
            stats: Some(stats),
            saves: 0,
        }
    }

    /// Number of successful `save` calls
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Option<GameStats> {
        self.stats
    }

    fn save(&mut self, stats: &GameStats) -> Result<(), StatsError> {
        self.stats = Some(*stats);
        self.saves += 1;
        Ok(())
    }
}
