//! Logger setup
//!
//! The TUI owns the terminal, so log records go to a file when one is given.
//! Without a file, records go to stderr only when `RUST_LOG` is set and the caller
//! allows it.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::OpenOptions;
use std::path::Path;

/// Initialize the global logger
///
/// The filter comes from `RUST_LOG`, defaulting to `info` for file logging.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger is already set.
pub fn init(log_file: Option<&Path>, stderr_fallback: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never)
                .try_init()?;
        }
        None if stderr_fallback && std::env::var_os("RUST_LOG").is_some() => {
            Builder::from_default_env().try_init()?;
        }
        None => {}
    }
    Ok(())
}
