//! Alphabet letters
//!
//! The game uses the fixed 26-letter uppercase Latin alphabet. A `Letter` is
//! a validated byte in `b'A'..=b'Z'`, so every other type can index tables by
//! letter without re-checking.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, folding lowercase to uppercase
    ///
    /// Returns `None` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q').map(Letter::as_char), Some('Q'));
    /// assert!(Letter::from_char('7').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Create a letter from an ASCII byte
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Letter at a given alphabet index (0 = A)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(b'A' + index as u8))
        } else {
            None
        }
    }

    /// Position in the alphabet (A = 0, Z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
