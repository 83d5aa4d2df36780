//! JSON file stats store
//!
//! The record lives in `stats.json` under the OS data directory (via the
//! `directories` crate) unless a path is given explicitly.

use super::{GameStats, StatsError, StatsStore};
use directories::ProjectDirs;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const STATS_FILE_NAME: &str = "stats.json";

/// Stats persisted as a single JSON record on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by an explicit file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the OS-standard location
    ///
    /// - Linux: `~/.local/share/wordle_game/stats.json`
    /// - macOS: `~/Library/Application Support/wordle_game/stats.json`
    /// - Windows: `%APPDATA%\wordle_game\data\stats.json`
    ///
    /// # Errors
    ///
    /// Returns `StatsError::NoDataDir` if no home directory can be found.
    pub fn open_default() -> Result<Self, StatsError> {
        Ok(Self::new(Self::data_dir()?.join(STATS_FILE_NAME)))
    }

    /// OS-standard data directory for the game
    ///
    /// # Errors
    ///
    /// Returns `StatsError::NoDataDir` if no home directory can be found.
    pub fn data_dir() -> Result<PathBuf, StatsError> {
        ProjectDirs::from("", "", "wordle_game")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StatsError::NoDataDir)
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<GameStats>, StatsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StatsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StatsError::Json {
                path: self.path.clone(),
                source,
            })
    }

    fn write(&self, stats: &GameStats) -> Result<(), StatsError> {
        let io_err = |source| StatsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(stats).map_err(|source| StatsError::Json {
            path: self.path.clone(),
            source,
        })?;

        // Write next to the target and rename so a failed write never truncates the record
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Option<GameStats> {
        match self.read() {
            Ok(stats) => {
                debug!("Loaded stats from {}: {stats:?}", self.path.display());
                stats
            }
            Err(e) => {
                warn!("Ignoring unreadable stats: {e}");
                None
            }
        }
    }

    fn save(&mut self, stats: &GameStats) -> Result<(), StatsError> {
        self.write(stats)?;
        debug!("Saved stats to {}: {stats:?}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("wordle_game_{}_{nanos}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_loads_none() {
        let store = JsonFileStore::new(temp_path("missing.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("stats.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&GameStats { wins: 7, losses: 3 }).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load(), Some(GameStats { wins: 7, losses: 3 }));
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn save_overwrites_previous_record() {
        let path = temp_path("stats.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&GameStats { wins: 1, losses: 0 }).unwrap();
        store.save(&GameStats { wins: 1, losses: 1 }).unwrap();
        assert_eq!(store.load(), Some(GameStats { wins: 1, losses: 1 }));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn corrupt_file_loads_none() {
        let path = temp_path("stats.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.read(), Err(StatsError::Json { .. })));
        assert_eq!(store.load(), None);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
