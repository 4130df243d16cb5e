//! Event handlers registered on the bus by the active screen

use super::{Command, Screen, World};
use crate::events::{Handler, HandlerError, Payload};
use crate::game::{Status, WordSource};

/// A bus subscriber; screens register these per event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameHandler {
    /// Highlight the button under the pointer
    ButtonHover,
    /// Request the screen named by the clicked button
    ButtonClick,
    /// Enter activates the screen's primary button
    Advance,
    Shutdown,
    TypeLetter,
    /// Submit the row; once the round is over, Enter asks for a new board
    SubmitGuess,
    EraseLetter,
    KeypadHover,
    KeypadClick,
}

/// Context handed to handlers during one publish
///
/// Transition requests are queued and applied by the controller after every
/// subscriber has run, so a handler never changes the subscription set of
/// the publish it is part of.
pub struct Dispatch<'a, S> {
    pub world: &'a mut World<S>,
    pub screen: Screen,
    pub requests: &'a mut Vec<Screen>,
}

impl GameHandler {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ButtonHover => "button-hover",
            Self::ButtonClick => "button-click",
            Self::Advance => "advance",
            Self::Shutdown => "shutdown",
            Self::TypeLetter => "type-letter",
            Self::SubmitGuess => "submit-guess",
            Self::EraseLetter => "erase-letter",
            Self::KeypadHover => "keypad-hover",
            Self::KeypadClick => "keypad-click",
        }
    }
}

impl<S: WordSource> Handler<Dispatch<'_, S>> for GameHandler {
    fn handle(&self, ctx: &mut Dispatch<'_, S>, payload: Payload) -> Result<(), HandlerError> {
        match (*self, payload) {
            (Self::ButtonHover, Payload::Pointer(pos)) => ctx.world.hover_button(ctx.screen, pos),
            (Self::ButtonClick, Payload::Pointer(pos)) => {
                if let Some(target) = ctx.world.layout().button_at(ctx.screen, pos) {
                    ctx.requests.push(target);
                }
            }
            (Self::Advance, Payload::None) => {
                if let Some(target) = ctx.screen.primary() {
                    ctx.requests.push(target);
                }
            }
            (Self::Shutdown, Payload::None) => Command::Terminate.execute(ctx.world),
            (Self::TypeLetter, Payload::Letter(letter)) => {
                Command::AddLetter(letter).execute(ctx.world);
            }
            (Self::SubmitGuess, Payload::None) => {
                if ctx.world.session().status().is_some_and(Status::is_finished) {
                    ctx.requests.push(Screen::New);
                } else {
                    Command::Submit.execute(ctx.world);
                }
            }
            (Self::EraseLetter, Payload::None) => Command::RemoveLetter.execute(ctx.world),
            (Self::KeypadHover, Payload::Pointer(pos)) => ctx.world.hover_key(pos),
            (Self::KeypadClick, Payload::Pointer(pos)) => {
                if let Some(key) = ctx.world.layout().key_at(pos) {
                    Command::from(key).execute(ctx.world);
                }
            }
            (handler, payload) => {
                return Err(HandlerError::UnexpectedPayload {
                    handler: handler.name(),
                    payload,
                });
            }
        }
        Ok(())
    }
}
