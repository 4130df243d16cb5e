//! Discrete game commands
//!
//! Handlers translate events into commands; commands are the only code that
//! mutates the session on behalf of player input.

use super::World;
use super::layout::KeypadKey;
use crate::core::Letter;
use crate::game::WordSource;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddLetter(Letter),
    RemoveLetter,
    Submit,
    /// Drop the round and clear the board and keypad colours
    ResetSession,
    Terminate,
}

impl Command {
    /// Apply the command to `world`
    ///
    /// Commands never fail: input the session cannot accept is dropped.
    pub fn execute<S: WordSource>(self, world: &mut World<S>) {
        debug!(command = ?self, "executing");
        match self {
            Self::AddLetter(letter) => world.session_mut().add_letter(letter),
            Self::RemoveLetter => world.session_mut().remove_letter(),
            Self::Submit => {
                let outcome = world.session_mut().submit();
                world.record_outcome(outcome);
            }
            Self::ResetSession => {
                world.session_mut().reset();
                world.clear_hover();
                world.clear_messages();
            }
            Self::Terminate => world.stop(),
        }
    }
}

impl From<KeypadKey> for Command {
    fn from(key: KeypadKey) -> Self {
        match key {
            KeypadKey::Letter(letter) => Self::AddLetter(letter),
            KeypadKey::Enter => Self::Submit,
            KeypadKey::Delete => Self::RemoveLetter,
        }
    }
}
