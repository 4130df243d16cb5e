//! Terminal output formatting
//!
//! Coloured tiles and summaries for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_round_result, print_score, print_statistics};
