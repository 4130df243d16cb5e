//! Five-letter word representation
//!
//! A Word stores the normalized uppercase text alongside its letters so that
//! evaluation can index positions directly.

use super::{Letter, WORD_LENGTH};
use std::fmt;
use thiserror::Error;

/// A validated five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly five letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is trimmed and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let letters: Vec<Letter> = text
            .bytes()
            .map(Letter::from_byte)
            .collect::<Option<_>>()
            .ok_or(WordError::InvalidCharacters)?;
        let letters: [Letter; WORD_LENGTH] = letters
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self::from_letters(letters))
    }

    /// Build a word from already-validated letters
    #[must_use]
    pub fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        let text = letters.iter().map(|l| l.as_char()).collect();
        Self { text, letters }
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Number of times `letter` appears in the word
    #[must_use]
    pub fn count_of(&self, letter: Letter) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letter_at(0).as_char(), 'C');
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
        assert_eq!(Word::new("  slate \n").unwrap().text(), "SLATE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_count_of_duplicates() {
        let word = Word::new("speed").unwrap();
        let e = Letter::from_char('E').unwrap();
        let s = Letter::from_char('S').unwrap();
        let z = Letter::from_char('Z').unwrap();
        assert_eq!(word.count_of(e), 2);
        assert_eq!(word.count_of(s), 1);
        assert_eq!(word.count_of(z), 0);
    }

    #[test]
    fn word_from_letters_matches_parse() {
        let parsed = Word::new("flute").unwrap();
        let rebuilt = Word::from_letters(*parsed.letters());
        assert_eq!(parsed, rebuilt);
        assert_eq!(format!("{rebuilt}"), "FLUTE");
    }
}
