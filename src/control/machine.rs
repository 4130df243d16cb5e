//! Screen state machine
//!
//! Owns the active screen. A transition is checked against the static table,
//! runs the target's entry action, and only then swaps bus subscriptions so a
//! failed entry leaves the previous screen fully in place.

use super::{Command, GameHandler, MessageStyle, Screen, World};
use crate::error::GameError;
use crate::events::EventBus;
use crate::game::WordSource;
use tracing::{debug, info};

/// Result of a transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Entered,
    Rejected,
}

#[derive(Debug, Default)]
pub struct ScreenMachine {
    current: Option<Screen>,
}

impl ScreenMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active screen, `None` before the first transition
    #[must_use]
    pub const fn current(&self) -> Option<Screen> {
        self.current
    }

    /// Move to `target` if the table allows it
    ///
    /// The very first transition may target any screen. Disallowed requests
    /// are logged and leave everything untouched.
    ///
    /// # Errors
    /// Propagates a failed entry action (e.g. no unused word left when
    /// entering `Start`); the current screen stays active in that case.
    pub fn transition_to<S: WordSource>(
        &mut self,
        target: Screen,
        bus: &mut EventBus<GameHandler>,
        world: &mut World<S>,
    ) -> Result<Transition, GameError> {
        if let Some(current) = self.current
            && !current.allows(target)
        {
            debug!(from = %current, to = %target, "transition rejected");
            return Ok(Transition::Rejected);
        }

        enter(target, world)?;

        let outgoing = self.current.map(Screen::subscriptions).unwrap_or_default();
        let incoming = target.subscriptions();
        for (category, handler) in &outgoing {
            if !incoming.contains(&(*category, *handler)) {
                bus.unsubscribe(*category, handler);
            }
        }
        for (category, handler) in incoming {
            bus.subscribe(category, handler);
        }

        info!(from = ?self.current, to = %target, "screen changed");
        self.current = Some(target);
        Ok(Transition::Entered)
    }
}

/// Entry action for `screen`
fn enter<S: WordSource>(screen: Screen, world: &mut World<S>) -> Result<(), GameError> {
    match screen {
        Screen::Initial => {
            world.add_message("Click Play or press Enter", MessageStyle::Info);
        }
        Screen::Play => {
            world.rebuild_layout();
            world.add_message("Press Start or Enter to draw a word", MessageStyle::Info);
        }
        Screen::Start => {
            world.session_mut().start_new_round()?;
            world.clear_hover();
            world.add_message("New word drawn. Six guesses, good luck!", MessageStyle::Info);
        }
        Screen::New => {
            Command::ResetSession.execute(world);
            world.add_message("Board cleared. Press Start or Enter for a new word", MessageStyle::Info);
        }
        Screen::Quit => Command::Terminate.execute(world),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventCategory;
    use crate::game::{GameSession, KeyPolicy, WordHistory, WordList};
    use crate::wordlists::loader::words_from_slice;

    fn setup(words: &[&str]) -> (ScreenMachine, EventBus<GameHandler>, World<WordList>) {
        let world = World::new(GameSession::new(
            WordList::seeded(words_from_slice(words), 2),
            WordHistory::new(),
            KeyPolicy::default(),
        ));
        (ScreenMachine::new(), EventBus::new(), world)
    }

    #[test]
    fn first_transition_is_unrestricted() {
        let (mut machine, mut bus, mut world) = setup(&["crane"]);
        assert_eq!(machine.current(), None);
        let result = machine.transition_to(Screen::Initial, &mut bus, &mut world);
        assert_eq!(result, Ok(Transition::Entered));
        assert_eq!(machine.current(), Some(Screen::Initial));
        assert!(bus.is_subscribed(EventCategory::SubmitKey, &GameHandler::Advance));
    }

    #[test]
    fn disallowed_transition_is_rejected() {
        let (mut machine, mut bus, mut world) = setup(&["crane"]);
        machine.transition_to(Screen::Initial, &mut bus, &mut world).unwrap();
        machine.transition_to(Screen::Play, &mut bus, &mut world).unwrap();

        let result = machine.transition_to(Screen::New, &mut bus, &mut world);
        assert_eq!(result, Ok(Transition::Rejected));
        assert_eq!(machine.current(), Some(Screen::Play));
    }

    #[test]
    fn start_draws_and_swaps_subscriptions() {
        let (mut machine, mut bus, mut world) = setup(&["crane"]);
        for screen in [Screen::Initial, Screen::Play, Screen::Start] {
            machine.transition_to(screen, &mut bus, &mut world).unwrap();
        }

        assert!(world.session().has_round());
        assert!(bus.is_subscribed(EventCategory::LetterKey, &GameHandler::TypeLetter));
        assert!(bus.is_subscribed(EventCategory::SubmitKey, &GameHandler::SubmitGuess));
        assert!(!bus.is_subscribed(EventCategory::SubmitKey, &GameHandler::Advance));
        assert_eq!(bus.subscribers(EventCategory::QuitKey), &[GameHandler::Shutdown]);
    }

    #[test]
    fn failed_entry_keeps_current_screen() {
        let (mut machine, mut bus, mut world) = setup(&["crane"]);
        for screen in [Screen::Initial, Screen::Play, Screen::Start, Screen::New] {
            machine.transition_to(screen, &mut bus, &mut world).unwrap();
        }

        let result = machine.transition_to(Screen::Start, &mut bus, &mut world);
        assert_eq!(result, Err(GameError::WordPoolExhausted { pool: 1 }));
        assert_eq!(machine.current(), Some(Screen::New));
        assert!(!bus.is_subscribed(EventCategory::LetterKey, &GameHandler::TypeLetter));
    }

    #[test]
    fn quit_terminates_and_clears_subscriptions() {
        let (mut machine, mut bus, mut world) = setup(&["crane"]);
        for screen in [Screen::Initial, Screen::Play, Screen::Quit] {
            machine.transition_to(screen, &mut bus, &mut world).unwrap();
        }
        assert!(!world.is_running());
        assert!(bus.is_empty());
    }
}
