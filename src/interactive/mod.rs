//! Interactive terminal UI
//!
//! crossterm supplies raw input and ratatui draws the frame; all game logic
//! stays behind the [`Controller`](crate::control::Controller).

mod app;
mod rendering;

pub use app::{run_tui, translate};
pub use rendering::ui;
