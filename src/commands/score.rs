//! Score command
//!
//! Evaluates one guess against one target without starting a game.

use crate::core::{Feedback, Word};
use crate::error::GameError;

/// Result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, GameError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
