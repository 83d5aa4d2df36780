//! Word lists for picking solutions
//!
//! A [`WordSource`] says where candidates come from; a [`WordPool`] holds the loaded
//! candidates and picks one solution per game, uniformly at random.

mod embedded;
pub mod loader;
pub mod remote;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use remote::DEFAULT_WORDS_URL;

use crate::core::Word;
use crate::game::GameError;
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading candidate words
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word list {0} is empty")]
    Empty(String),
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch word list from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Where candidate words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// List compiled into the binary
    Embedded,
    /// One word per line
    File(PathBuf),
    /// JSON array served over HTTP
    Remote(String),
}

impl WordSource {
    /// Interpret a `--words` argument
    ///
    /// - "embedded": built-in list
    /// - "remote": the default remote endpoint
    /// - "http://..." / "https://...": that endpoint
    /// - anything else: a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            "remote" => Self::Remote(DEFAULT_WORDS_URL.to_string()),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Self::Remote(url.to_string())
            }
            path => Self::File(PathBuf::from(path)),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Embedded => "embedded".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Remote(url) => url.clone(),
        }
    }
}

/// Loaded, non-empty set of candidate solutions
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Load candidates from a source
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError` if the source cannot be read or yields no words.
    pub fn load(source: &WordSource) -> Result<Self, WordSourceError> {
        let words = match source {
            WordSource::Embedded => loader::words_from_slice(ANSWERS),
            WordSource::File(path) => {
                loader::load_from_file(path).map_err(|source| WordSourceError::Io {
                    path: path.clone(),
                    source,
                })?
            }
            WordSource::Remote(url) => remote::fetch_words(url)?,
        };

        let pool =
            Self::from_words(words).ok_or_else(|| WordSourceError::Empty(source.describe()))?;
        info!(
            "Loaded {} candidate words from {}",
            pool.len(),
            source.describe()
        );
        Ok(pool)
    }

    /// Pool from an explicit list, or `None` if it is empty
    #[must_use]
    pub fn from_words(words: Vec<String>) -> Option<Self> {
        (!words.is_empty()).then_some(Self { words })
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty pool cannot be built
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a solution uniformly at random, uppercased
    ///
    /// # Errors
    ///
    /// Returns `GameError::MalformedSolution` if the chosen candidate is not five letters A-Z.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, GameError> {
        let choice = self.words.choose(rng).map_or("", String::as_str);
        Ok(Word::new(choice)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert!(ANSWERS_COUNT > 0);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid solution");
        }
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
        assert_eq!(
            WordSource::from_arg("remote"),
            WordSource::Remote(DEFAULT_WORDS_URL.to_string())
        );
        assert_eq!(
            WordSource::from_arg("https://example.com/words"),
            WordSource::Remote("https://example.com/words".to_string())
        );
        assert_eq!(
            WordSource::from_arg("words.txt"),
            WordSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn embedded_pool_loads() {
        let pool = WordPool::load(&WordSource::Embedded).unwrap();
        assert_eq!(pool.len(), ANSWERS_COUNT);
        assert!(!pool.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = WordSource::File(PathBuf::from("/definitely/not/here.txt"));
        assert!(matches!(
            WordPool::load(&source),
            Err(WordSourceError::Io { .. })
        ));
    }

    #[test]
    fn empty_pool_rejected() {
        assert!(WordPool::from_words(Vec::new()).is_none());
    }

    #[test]
    fn pick_uppercases() {
        let pool = WordPool::from_words(vec!["crane".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pool.pick(&mut rng).unwrap().text(), "CRANE");
    }

    #[test]
    fn pick_covers_pool() {
        let words: Vec<String> = ["crane", "slate", "trace"].map(String::from).to_vec();
        let pool = WordPool::from_words(words).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.pick(&mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn malformed_candidate_fails_fast() {
        let pool = WordPool::from_words(vec!["toolong".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            pool.pick(&mut rng),
            Err(GameError::MalformedSolution(_))
        ));
    }
}
