//! Word lists for the game
//!
//! The default dictionary is compiled into the binary; `loader` reads
//! replacement lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_are_unique() {
        let unique: FxHashSet<&str> = ANSWERS.iter().copied().collect();
        assert_eq!(unique.len(), ANSWERS_COUNT);
    }

    #[test]
    fn dictionary_is_large_enough_to_play() {
        assert!(ANSWERS_COUNT >= 500, "only {ANSWERS_COUNT} answer words");
    }
}
