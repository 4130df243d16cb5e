//! Runtime configuration shared by every run mode

use crate::game::{GameSession, KeyPolicy, WordHistory, WordList};
use crate::logging::LogConfig;
use crate::wordlists::loader::WordlistChoice;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// ~60 frames per second
pub const DEFAULT_TICK_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wordlist: WordlistChoice,
    /// Fixed RNG seed for reproducible word draws
    pub seed: Option<u64>,
    pub key_policy: KeyPolicy,
    /// Reuse played words once the pool runs dry
    pub recycle_words: bool,
    pub tick_ms: u64,
    pub log_file: Option<PathBuf>,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: WordlistChoice::Embedded,
            seed: None,
            key_policy: KeyPolicy::default(),
            recycle_words: true,
            tick_ms: DEFAULT_TICK_MS,
            log_file: None,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Frame interval for the terminal UI, never zero
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::from_verbosity(self.verbosity)
            .with_target(self.verbosity >= 3)
            .with_log_file(self.log_file.clone())
    }

    /// Load the word list and build a fresh session from it
    ///
    /// # Errors
    ///
    /// Returns an error if a word list file cannot be loaded.
    pub fn build_session(&self) -> Result<GameSession<WordList>> {
        let words = self.wordlist.load()?;
        Ok(GameSession::new(
            WordList::with_seed(words, self.seed),
            WordHistory::new(),
            self.key_policy,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.recycle_words);
        assert_eq!(config.key_policy, KeyPolicy::LastSeen);
        assert_eq!(config.tick(), Duration::from_millis(16));
    }

    #[test]
    fn zero_tick_is_clamped() {
        let config = Config {
            tick_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick(), Duration::from_millis(1));
    }

    #[test]
    fn seeded_sessions_draw_the_same_word() {
        let config = Config {
            seed: Some(7),
            ..Config::default()
        };
        let mut a = config.build_session().unwrap();
        let mut b = config.build_session().unwrap();
        assert_eq!(
            a.start_new_round().unwrap().text(),
            b.start_new_round().unwrap().text()
        );
    }
}
