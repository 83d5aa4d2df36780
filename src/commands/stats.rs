//! Stats command
//!
//! Shows or clears the persisted win/loss record.

use crate::output::write_stats;
use crate::stats::{GameStats, StatsStore};
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

/// Write the stored record to `out`
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn show_stats<S: StatsStore, W: Write>(store: &S, out: &mut W) -> Result<GameStats> {
    let stats = store.load().unwrap_or_default();
    write_stats(out, &stats)?;
    Ok(stats)
}

/// Zero the stored record
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn reset_stats<S: StatsStore>(store: &mut S) -> Result<()> {
    store
        .save(&GameStats::default())
        .context("failed to reset stats")?;
    info!("Stats reset");
    Ok(())
}
