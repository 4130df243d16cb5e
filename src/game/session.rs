//! Game session: one target word, up to six guesses
//!
//! The session owns the round in progress, the word history used to avoid
//! repeats, and the key-status table. All mutation goes through a handful of
//! operations that silently ignore input the current state cannot accept.

use super::source::draw_unused;
use super::{KeyPolicy, KeyStatusTracker, WordHistory, WordSource};
use crate::core::{Feedback, Letter, LetterFlag, MAX_ROWS, WORD_LENGTH, Word};
use crate::error::GameError;
use tracing::{debug, info};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A submitted guess with its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    word: Word,
    feedback: Feedback,
}

impl GuessRow {
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        self.word.letters()
    }

    #[must_use]
    pub const fn flags(&self) -> &[LetterFlag; WORD_LENGTH] {
        self.feedback.flags()
    }
}

/// What a call to [`GameSession::submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing happened: no round, incomplete row, or round already over
    Ignored,
    /// Row recorded, round continues
    Continue,
    /// Row recorded and it solved the word
    Won,
    /// Sixth row recorded without solving the word
    Lost,
}

#[derive(Debug, Clone)]
struct Round {
    target: Word,
    rows: Vec<GuessRow>,
    current: Vec<Letter>,
    status: Status,
}

impl Round {
    fn new(target: Word) -> Self {
        Self {
            target,
            rows: Vec::with_capacity(MAX_ROWS),
            current: Vec::with_capacity(WORD_LENGTH),
            status: Status::InProgress,
        }
    }
}

/// Read-only view of a round for renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub target_length: usize,
    pub in_progress: &'a [Letter],
    pub rows: &'a [GuessRow],
    pub status: Status,
    pub keys: &'a KeyStatusTracker,
    /// The target, only once the round is over
    pub revealed_target: Option<&'a Word>,
}

/// The player's game against a word source
pub struct GameSession<S> {
    source: S,
    history: WordHistory,
    keys: KeyStatusTracker,
    round: Option<Round>,
}

impl<S: WordSource> GameSession<S> {
    /// Create a session with no round started yet
    #[must_use]
    pub fn new(source: S, history: WordHistory, policy: KeyPolicy) -> Self {
        Self {
            source,
            history,
            keys: KeyStatusTracker::new(policy),
            round: None,
        }
    }

    /// Draw an unused target word and start a fresh round
    ///
    /// # Errors
    /// Returns `GameError::WordPoolExhausted` when every word in the source
    /// has already been issued. The current round is left untouched.
    pub fn start_new_round(&mut self) -> Result<&Word, GameError> {
        let target = draw_unused(&mut self.source, &self.history)?;
        self.history.record(target.clone());
        self.keys.reset();
        info!(round = self.history.len(), "new round started");
        debug!(target = %target, "target drawn");

        let round = self.round.insert(Round::new(target));
        Ok(&round.target)
    }

    /// Append a letter to the in-progress guess
    ///
    /// Ignored when there is no round, the round is over, or the row is full.
    pub fn add_letter(&mut self, letter: Letter) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.status != Status::InProgress || round.current.len() >= WORD_LENGTH {
            debug!(%letter, "letter ignored");
            return;
        }
        round.current.push(letter);
    }

    /// Remove the last letter of the in-progress guess, if any
    pub fn remove_letter(&mut self) {
        if let Some(round) = self.round.as_mut()
            && round.status == Status::InProgress
        {
            round.current.pop();
        }
    }

    /// Evaluate the in-progress guess
    ///
    /// Only acts on a complete row while the round is in progress. The new row
    /// is recorded and fed to the key tracker before the status is updated.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(round) = self.round.as_mut() else {
            return SubmitOutcome::Ignored;
        };
        if round.status != Status::InProgress {
            return SubmitOutcome::Ignored;
        }
        let Ok(letters) = <[Letter; WORD_LENGTH]>::try_from(round.current.as_slice()) else {
            debug!(typed = round.current.len(), "incomplete row not submitted");
            return SubmitOutcome::Ignored;
        };

        let word = Word::from_letters(letters);
        let feedback = Feedback::evaluate(&word, &round.target);
        debug!(guess = %word, feedback = %feedback, "guess evaluated");

        self.keys.record_guess(word.letters(), feedback.flags());
        round.rows.push(GuessRow { word, feedback });
        round.current.clear();

        if feedback.is_solved() {
            round.status = Status::Won;
            info!(guesses = round.rows.len(), "round won");
            SubmitOutcome::Won
        } else if round.rows.len() == MAX_ROWS {
            round.status = Status::Lost;
            info!(target = %round.target, "round lost");
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Continue
        }
    }

    /// Drop the current round and clear the key table
    ///
    /// The word history is kept; call [`Self::start_new_round`] to play again.
    pub fn reset(&mut self) {
        self.round = None;
        self.keys.reset();
    }

    /// Read-only view of the current round, if one has started
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.round.as_ref().map(|round| Snapshot {
            target_length: WORD_LENGTH,
            in_progress: &round.current,
            rows: &round.rows,
            status: round.status,
            keys: &self.keys,
            revealed_target: round.status.is_finished().then_some(&round.target),
        })
    }

    #[must_use]
    pub fn has_round(&self) -> bool {
        self.round.is_some()
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.round.as_ref().map(|round| round.status)
    }

    #[must_use]
    pub fn in_progress(&self) -> &[Letter] {
        self.round.as_ref().map_or(&[], |round| &round.current)
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        self.round.as_ref().map_or(&[], |round| &round.rows)
    }

    /// The target word, for callers that are allowed to peek (tests, reveal)
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.round.as_ref().map(|round| &round.target)
    }

    #[must_use]
    pub const fn keys(&self) -> &KeyStatusTracker {
        &self.keys
    }

    #[must_use]
    pub const fn history(&self) -> &WordHistory {
        &self.history
    }

    /// Forget issued words so the pool can be reused
    ///
    /// The latest target stays recorded when the source has other words, so
    /// the next draw never repeats the round just played.
    pub fn recycle_history(&mut self) {
        let keep = self
            .history
            .last()
            .filter(|_| self.source.words().len() > 1)
            .cloned();
        self.history.clear();
        if let Some(word) = keep {
            self.history.record(word);
        }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
