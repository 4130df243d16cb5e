//! Game-level errors

use crate::core::WordError;
use thiserror::Error;

/// Errors surfaced by the game layer
///
/// Ignored input is never an error; only conditions the surrounding
/// application has to act on end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Every word the source can produce has already been played
    #[error("word pool exhausted: all {pool} words have already been played")]
    WordPoolExhausted { pool: usize },

    #[error(transparent)]
    InvalidWord(#[from] WordError),
}
