//! Game state: sessions, word sources and per-letter tracking
//!
//! Builds on `core` and knows nothing about input or screens.

mod history;
mod keys;
mod session;
pub mod source;
mod stats;

pub use history::WordHistory;
pub use keys::{KeyPolicy, KeyStatusTracker};
pub use session::{GameSession, GuessRow, Snapshot, Status, SubmitOutcome};
pub use source::{WordList, WordSource};
pub use stats::Statistics;
