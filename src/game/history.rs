//! Previously issued target words

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Words already used as targets in this process
///
/// Owned by the session that draws from it and cleared explicitly, so two
/// sessions never share exclusion state by accident.
#[derive(Debug, Clone, Default)]
pub struct WordHistory {
    seen: FxHashSet<Word>,
    order: Vec<Word>,
}

impl WordHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.seen.contains(word)
    }

    /// Remember `word`; returns false if it was already recorded
    pub fn record(&mut self, word: Word) -> bool {
        if self.seen.insert(word.clone()) {
            self.order.push(word);
            true
        } else {
            false
        }
    }

    /// Most recently issued word
    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.order.last()
    }

    /// Issued words, oldest first
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_word_once() {
        let mut history = WordHistory::new();
        let crane = Word::new("crane").unwrap();

        assert!(history.record(crane.clone()));
        assert!(!history.record(crane.clone()));
        assert!(history.contains(&crane));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn keeps_issue_order_and_clears() {
        let mut history = WordHistory::new();
        for w in ["slate", "crane", "audio"] {
            history.record(Word::new(w).unwrap());
        }
        let texts: Vec<&str> = history.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["SLATE", "CRANE", "AUDIO"]);
        assert_eq!(history.last().map(Word::text), Some("AUDIO"));

        history.clear();
        assert!(history.is_empty());
        assert!(!history.contains(&Word::new("slate").unwrap()));
    }
}
