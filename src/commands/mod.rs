//! Command implementations

pub mod simple;
pub mod stats;

pub use simple::{play, run_simple};
pub use stats::{reset_stats, show_stats};
