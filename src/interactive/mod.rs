//! Interactive TUI interface

mod app;
pub mod layout;
mod rendering;

pub use app::{Action, App, run_tui, translate_key};
pub use rendering::status_text;
