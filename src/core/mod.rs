//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types and the guess evaluator.
//! Everything here is pure and has no knowledge of sessions, input or screens.

mod feedback;
mod flag;
mod letter;
mod word;

pub use feedback::Feedback;
pub use flag::LetterFlag;
pub use letter::{ALPHABET_LEN, Letter};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per round
pub const MAX_ROWS: usize = 6;

/// Keyboard rows, top to bottom
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Score `guess` against `target`; see [`Feedback::evaluate`]
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    Feedback::evaluate(guess, target)
}
