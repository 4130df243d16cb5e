//! Guess evaluation
//!
//! Scores a guess against the target word letter by letter. Duplicate letters
//! are resolved so that a letter is never flagged more often than it occurs in
//! the target, and exact matches always win over displaced ones.

use super::{LetterFlag, WORD_LENGTH, Word};
use std::fmt;

/// Flags for one evaluated guess, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFlag; WORD_LENGTH]);

impl Feedback {
    /// Every position correct
    pub const SOLVED: Self = Self([LetterFlag::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(flags: [LetterFlag; WORD_LENGTH]) -> Self {
        Self(flags)
    }

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and consume
    ///    those target positions
    /// 2. Second pass: left to right over the remaining guess positions, claim
    ///    the lowest unconsumed target position holding the same letter and
    ///    mark it `Present`
    /// 3. Everything else stays `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFlag::*, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let target = Word::new("crane").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::evaluate(&guess, &target).flags(),
    ///     &[Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let target = target.letters();

        let mut flags = [LetterFlag::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: index ties guess[i], target[i], flags[i] and consumed[i] together
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                flags[i] = LetterFlag::Correct;
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if flags[i] == LetterFlag::Correct {
                continue;
            }
            let claim = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]);
            if let Some(j) = claim {
                flags[i] = LetterFlag::Present;
                consumed[j] = true;
            }
        }

        Self(flags)
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> &[LetterFlag; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&flag| flag == LetterFlag::Correct)
    }

    /// Number of positions carrying `flag`
    #[must_use]
    pub fn count(&self, flag: LetterFlag) -> usize {
        self.0.iter().filter(|&&f| f == flag).count()
    }

    /// Render as emoji squares, e.g. "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|flag| flag.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.0 {
            write!(f, "{}", flag.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let flags: Vec<LetterFlag> = s
            .chars()
            .map(LetterFlag::from_code)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        flags
            .try_into()
            .map(Self)
            .map_err(|_| format!("Feedback must have {WORD_LENGTH} flags: {s}"))
    }
}
