//! Per-letter key colouring
//!
//! Tracks what the player has learned about each letter so the on-screen
//! keypad can be coloured.

use crate::core::{ALPHABET_LEN, Letter, LetterFlag};
use std::fmt;
use std::str::FromStr;

/// How a new observation combines with what a key already shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// The most recent flag wins, even if it is weaker than an earlier one
    #[default]
    LastSeen,
    /// A key only ever upgrades (Absent -> Present -> Correct)
    BestEver,
}

impl KeyPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LastSeen => "last-seen",
            Self::BestEver => "best-ever",
        }
    }
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-seen" | "last" => Ok(Self::LastSeen),
            "best-ever" | "best" => Ok(Self::BestEver),
            other => Err(format!(
                "unknown key policy '{other}' (expected last-seen or best-ever)"
            )),
        }
    }
}

/// Status table for the 26 letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStatusTracker {
    policy: KeyPolicy,
    table: [Option<LetterFlag>; ALPHABET_LEN],
}

impl KeyStatusTracker {
    #[must_use]
    pub const fn new(policy: KeyPolicy) -> Self {
        Self {
            policy,
            table: [None; ALPHABET_LEN],
        }
    }

    #[must_use]
    pub const fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Fold one evaluated guess into the table, left to right
    pub fn record_guess(&mut self, letters: &[Letter], flags: &[LetterFlag]) {
        for (&letter, &flag) in letters.iter().zip(flags) {
            let slot = &mut self.table[letter.index()];
            *slot = match (self.policy, *slot) {
                (KeyPolicy::BestEver, Some(previous)) => Some(previous.max(flag)),
                _ => Some(flag),
            };
        }
    }

    /// What is known about `letter`, or `None` if it was never guessed
    #[must_use]
    pub const fn status_of(&self, letter: Letter) -> Option<LetterFlag> {
        self.table[letter.index()]
    }

    /// Letters with a known status, alphabetically
    pub fn seen(&self) -> impl Iterator<Item = (Letter, LetterFlag)> + '_ {
        Letter::all().filter_map(|letter| self.status_of(letter).map(|flag| (letter, flag)))
    }

    pub fn reset(&mut self) {
        self.table = [None; ALPHABET_LEN];
    }
}

impl Default for KeyStatusTracker {
    fn default() -> Self {
        Self::new(KeyPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn record(tracker: &mut KeyStatusTracker, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::evaluate(&guess, &Word::new(target).unwrap());
        tracker.record_guess(guess.letters(), feedback.flags());
    }

    #[test]
    fn unseen_until_guessed() {
        let mut tracker = KeyStatusTracker::default();
        assert_eq!(tracker.status_of(letter('A')), None);

        record(&mut tracker, "trace", "crane");
        assert_eq!(tracker.status_of(letter('T')), Some(LetterFlag::Absent));
        assert_eq!(tracker.status_of(letter('R')), Some(LetterFlag::Correct));
        assert_eq!(tracker.status_of(letter('C')), Some(LetterFlag::Present));
        assert_eq!(tracker.status_of(letter('Z')), None);
        assert_eq!(tracker.seen().count(), 5);
    }

    #[test]
    fn last_seen_policy_can_regress_a_correct_key() {
        let mut tracker = KeyStatusTracker::new(KeyPolicy::LastSeen);
        record(&mut tracker, "crane", "cabin");
        assert_eq!(tracker.status_of(letter('C')), Some(LetterFlag::Correct));

        // C reused at a wrong position: the key now shows Present
        record(&mut tracker, "oscar", "cabin");
        assert_eq!(tracker.status_of(letter('C')), Some(LetterFlag::Present));
    }

    #[test]
    fn last_seen_policy_applies_within_one_guess() {
        // First L is Correct, the surplus L is Absent and is written last
        let mut tracker = KeyStatusTracker::new(KeyPolicy::LastSeen);
        record(&mut tracker, "lolly", "light");
        assert_eq!(tracker.status_of(letter('L')), Some(LetterFlag::Absent));
    }

    #[test]
    fn best_ever_policy_never_downgrades() {
        let mut tracker = KeyStatusTracker::new(KeyPolicy::BestEver);
        record(&mut tracker, "crane", "cabin");
        record(&mut tracker, "oscar", "cabin");
        assert_eq!(tracker.status_of(letter('C')), Some(LetterFlag::Correct));

        record(&mut tracker, "lolly", "light");
        assert_eq!(tracker.status_of(letter('L')), Some(LetterFlag::Correct));
    }

    #[test]
    fn reset_forgets_everything() {
        let mut tracker = KeyStatusTracker::new(KeyPolicy::BestEver);
        record(&mut tracker, "crane", "cabin");
        tracker.reset();
        assert_eq!(tracker.seen().count(), 0);
        assert_eq!(tracker.policy(), KeyPolicy::BestEver);
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!("last-seen".parse(), Ok(KeyPolicy::LastSeen));
        assert_eq!("best-ever".parse(), Ok(KeyPolicy::BestEver));
        assert!("sometimes".parse::<KeyPolicy>().is_err());
        assert_eq!(KeyPolicy::BestEver.to_string(), "best-ever");
    }
}
