//! Word list loading utilities

use super::ANSWERS;
use crate::core::Word;
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Where the game's dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordlistChoice {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-separated file of five-letter words
    File(std::path::PathBuf),
}

impl WordlistChoice {
    /// Parse a `--wordlist` value: `all` for the embedded list, else a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::Embedded
        } else {
            Self::File(value.into())
        }
    }

    /// Load the chosen list
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid word.
    pub fn load(&self) -> Result<Vec<Word>> {
        match self {
            Self::Embedded => Ok(words_from_slice(ANSWERS)),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Load words from a file
///
/// Blank lines and lines starting with `#` are skipped; so is any entry that
/// is not a five-letter ASCII word. Duplicates are dropped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let mut skipped = 0_usize;
    let mut seen = FxHashSet::default();
    let mut words: Vec<Word> = Vec::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Word::new(line) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
            Err(err) => {
                debug!(line, error = %err, "skipping word list entry");
                skipped += 1;
            }
        }
    }

    if words.is_empty() {
        bail!("Word list {} contains no five-letter words", path.display());
    }
    info!(path = %path.display(), words = words.len(), skipped, "word list loaded");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
