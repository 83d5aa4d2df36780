//! Terminal output formatting
//!
//! Colored boards, keyboard hints and stats for the non-TUI modes.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_notice, write_stats};
