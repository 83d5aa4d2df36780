//! Wordle Game
//!
//! Terminal Wordle: six tries to find a five-letter word, per-letter feedback,
//! keyboard hints and a persistent win/loss record.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Game, LogicalKey, Outcome};
//! use wordle_game::stats::MemoryStore;
//!
//! let mut game = Game::from_text("crane", MemoryStore::default()).unwrap();
//! for c in "trace".chars() {
//!     game.handle_key(LogicalKey::Letter(c));
//! }
//! assert_eq!(game.submit_guess(), Ok(Some(Outcome::Continue)));
//! println!("{}", game.feedback()[0].to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Win/loss persistence
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
