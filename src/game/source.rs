//! Word sources
//!
//! A `WordSource` is the dictionary the game draws targets from. The session
//! layers its own repeat-avoidance on top via [`draw_unused`].

use super::WordHistory;
use crate::core::Word;
use crate::error::GameError;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Random samples tried before falling back to a scan of unused words
const SAMPLE_ATTEMPTS: usize = 16;

/// Something that can hand out target words
pub trait WordSource {
    /// Every word this source can produce
    fn words(&self) -> &[Word];

    /// Draw one word, or `None` if the source is empty
    fn sample(&mut self) -> Option<Word>;
}

/// A word list with its own random number generator
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    rng: StdRng,
}

impl WordList {
    /// Create a word list seeded from the operating system
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a word list with a fixed seed for reproducible draws
    #[must_use]
    pub fn seeded(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS-seeded otherwise
    #[must_use]
    pub fn with_seed(words: Vec<Word>, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(words, seed),
            None => Self::new(words),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn words(&self) -> &[Word] {
        &self.words
    }

    fn sample(&mut self) -> Option<Word> {
        self.words.choose(&mut self.rng).cloned()
    }
}

/// Draw a word that is not in `history`
///
/// Samples the source a bounded number of times; if every sample was already
/// played, scans the source for the first unused word instead.
///
/// # Errors
/// Returns `GameError::WordPoolExhausted` when every word in the source is in
/// `history` (or the source is empty).
pub fn draw_unused<S>(source: &mut S, history: &WordHistory) -> Result<Word, GameError>
where
    S: WordSource + ?Sized,
{
    for _ in 0..SAMPLE_ATTEMPTS {
        match source.sample() {
            Some(word) if !history.contains(&word) => return Ok(word),
            Some(_) => {}
            None => break,
        }
    }

    source
        .words()
        .iter()
        .find(|word| !history.contains(word))
        .cloned()
        .ok_or(GameError::WordPoolExhausted {
            pool: source.words().len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn seeded_lists_are_reproducible() {
        let words = words_from_slice(&["crane", "slate", "audio", "flute", "ghost"]);
        let mut a = WordList::seeded(words.clone(), 42);
        let mut b = WordList::seeded(words, 42);

        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn empty_list_samples_nothing() {
        let mut list = WordList::seeded(Vec::new(), 1);
        assert!(list.is_empty());
        assert_eq!(list.sample(), None);
        assert_eq!(
            draw_unused(&mut list, &WordHistory::new()),
            Err(GameError::WordPoolExhausted { pool: 0 })
        );
    }

    #[test]
    fn draw_skips_history() {
        let words = words_from_slice(&["crane", "slate"]);
        let mut list = WordList::seeded(words, 7);
        let mut history = WordHistory::new();
        history.record(Word::new("crane").unwrap());

        for _ in 0..20 {
            assert_eq!(draw_unused(&mut list, &history).unwrap().text(), "SLATE");
        }
    }

    #[test]
    fn draw_reports_exhaustion() {
        let words = words_from_slice(&["crane", "slate"]);
        let mut list = WordList::seeded(words.clone(), 7);
        let mut history = WordHistory::new();
        for word in words {
            history.record(word);
        }

        assert_eq!(
            draw_unused(&mut list, &history),
            Err(GameError::WordPoolExhausted { pool: 2 })
        );
    }
}
