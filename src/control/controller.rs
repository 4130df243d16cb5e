//! Wires the bus, the screen machine and the world together

use super::{Dispatch, GameHandler, MessageStyle, Screen, ScreenMachine, Transition, World};
use crate::error::GameError;
use crate::events::{EventBus, InputEvent, PublishReport};
use crate::game::{GameSession, Snapshot, WordSource};
use ratatui::layout::Rect;
use tracing::{debug, warn};

/// Single owner of all game and UI state
///
/// Input arrives as [`InputEvent`]s; each is published to the handlers the
/// active screen registered, then any screen changes those handlers asked
/// for are applied in order.
pub struct Controller<S> {
    bus: EventBus<GameHandler>,
    machine: ScreenMachine,
    world: World<S>,
    recycle_words: bool,
}

impl<S: WordSource> Controller<S> {
    /// Create a controller; call [`Self::boot`] before dispatching
    ///
    /// With `recycle_words` set, an exhausted word pool is cleared and drawn
    /// from again instead of failing.
    #[must_use]
    pub fn new(session: GameSession<S>, recycle_words: bool) -> Self {
        Self {
            bus: EventBus::new(),
            machine: ScreenMachine::new(),
            world: World::new(session),
            recycle_words,
        }
    }

    /// Enter the title screen
    ///
    /// # Errors
    /// Never fails in practice; the title screen's entry action is infallible.
    pub fn boot(&mut self) -> Result<(), GameError> {
        self.request(Screen::Initial).map(|_| ())
    }

    /// Publish one event and apply the transitions it requested
    ///
    /// Events arriving before [`Self::boot`] or after shutdown are dropped.
    ///
    /// # Errors
    /// Returns an error if a requested transition's entry action fails.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<PublishReport, GameError> {
        let Some(screen) = self.machine.current() else {
            debug!(?event, "event before boot dropped");
            return Ok(PublishReport::default());
        };
        if !self.world.is_running() {
            return Ok(PublishReport::default());
        }

        let mut requests = Vec::new();
        let mut ctx = Dispatch {
            world: &mut self.world,
            screen,
            requests: &mut requests,
        };
        let report = self
            .bus
            .publish(event.category(), event.payload(), &mut ctx);

        // Termination must not depend on which screen is active
        if event == InputEvent::ProcessQuit {
            self.world.stop();
        }

        for target in requests {
            if !self.world.is_running() {
                break;
            }
            self.request(target)?;
        }
        Ok(report)
    }

    /// Dispatch a batch of events collected during one tick
    ///
    /// # Errors
    /// Stops at the first event whose transition fails.
    pub fn tick<I>(&mut self, events: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if !self.world.is_running() {
                break;
            }
            self.dispatch(event)?;
        }
        Ok(())
    }

    /// Ask the state machine to move to `target`
    ///
    /// # Errors
    /// Returns `GameError::WordPoolExhausted` when `Start` cannot draw a word
    /// and recycling is disabled.
    pub fn request(&mut self, target: Screen) -> Result<Transition, GameError> {
        match self
            .machine
            .transition_to(target, &mut self.bus, &mut self.world)
        {
            Err(GameError::WordPoolExhausted { pool }) if self.recycle_words => {
                warn!(pool, "every word has been played, recycling the pool");
                self.world.session_mut().recycle_history();
                self.world
                    .add_message("Every word has been played; starting over", MessageStyle::Info);
                self.machine
                    .transition_to(target, &mut self.bus, &mut self.world)
            }
            other => other,
        }
    }

    /// Request a screen by name; unknown names are rejected
    ///
    /// # Errors
    /// Same as [`Self::request`].
    pub fn request_named(&mut self, name: &str) -> Result<Transition, GameError> {
        match name.parse::<Screen>() {
            Ok(target) => self.request(target),
            Err(reason) => {
                debug!(%reason, "transition rejected");
                Ok(Transition::Rejected)
            }
        }
    }

    pub fn resize(&mut self, area: Rect) {
        self.world.set_viewport(area);
    }

    #[must_use]
    pub const fn screen(&self) -> Option<Screen> {
        self.machine.current()
    }

    #[must_use]
    pub const fn world(&self) -> &World<S> {
        &self.world
    }

    #[must_use]
    pub const fn bus(&self) -> &EventBus<GameHandler> {
        &self.bus
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.world.session().snapshot()
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.world.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::game::{KeyPolicy, Status, WordHistory, WordList};
    use crate::wordlists::loader::words_from_slice;

    fn controller(words: &[&str], recycle: bool) -> Controller<WordList> {
        let session = GameSession::new(
            WordList::seeded(words_from_slice(words), 4),
            WordHistory::new(),
            KeyPolicy::default(),
        );
        let mut controller = Controller::new(session, recycle);
        controller.resize(Rect::new(0, 0, 80, 32));
        controller.boot().unwrap();
        controller
    }

    fn type_word(controller: &mut Controller<WordList>, word: &str) {
        controller.tick(InputEvent::letters(word)).unwrap();
    }

    #[test]
    fn events_before_boot_are_dropped() {
        let session = GameSession::new(
            WordList::seeded(words_from_slice(&["crane"]), 4),
            WordHistory::new(),
            KeyPolicy::default(),
        );
        let mut controller = Controller::new(session, false);
        let report = controller.dispatch(InputEvent::SubmitKey).unwrap();
        assert_eq!(report.delivered, 0);
        assert_eq!(controller.screen(), None);
    }

    #[test]
    fn enter_walks_menu_to_round() {
        let mut c = controller(&["crane"], false);
        c.dispatch(InputEvent::SubmitKey).unwrap();
        assert_eq!(c.screen(), Some(Screen::Play));
        c.dispatch(InputEvent::SubmitKey).unwrap();
        assert_eq!(c.screen(), Some(Screen::Start));
        assert!(c.world().session().has_round());
    }

    #[test]
    fn one_submit_advances_one_screen() {
        let mut c = controller(&["crane"], false);
        c.tick([InputEvent::SubmitKey]).unwrap();
        assert_eq!(c.screen(), Some(Screen::Play));
    }

    #[test]
    fn typing_only_counts_while_started() {
        let mut c = controller(&["crane"], false);
        c.request(Screen::Play).unwrap();
        type_word(&mut c, "abc");
        assert!(c.world().session().in_progress().is_empty());

        c.request(Screen::Start).unwrap();
        type_word(&mut c, "crane");
        c.dispatch(InputEvent::SubmitKey).unwrap();
        assert_eq!(c.snapshot().unwrap().status, Status::Won);
        assert_eq!(c.screen(), Some(Screen::Start));
    }

    #[test]
    fn new_then_start_plays_a_fresh_word() {
        let mut c = controller(&["crane", "slate"], false);
        c.request(Screen::Play).unwrap();
        c.request(Screen::Start).unwrap();
        let first = c.world().session().target().unwrap().clone();

        assert_eq!(c.request(Screen::New), Ok(Transition::Entered));
        assert!(c.snapshot().is_none());
        c.request(Screen::Start).unwrap();
        assert_ne!(c.world().session().target(), Some(&first));
    }

    #[test]
    fn exhausted_pool_recycles_when_enabled() {
        let mut c = controller(&["crane"], true);
        c.request(Screen::Play).unwrap();
        c.request(Screen::Start).unwrap();
        c.request(Screen::New).unwrap();
        assert_eq!(c.request(Screen::Start), Ok(Transition::Entered));
        assert_eq!(c.world().session().history().len(), 1);
    }

    #[test]
    fn exhausted_pool_errors_when_recycling_disabled() {
        let mut c = controller(&["crane"], false);
        c.request(Screen::Play).unwrap();
        c.request(Screen::Start).unwrap();
        c.request(Screen::New).unwrap();
        assert_eq!(
            c.request(Screen::Start),
            Err(GameError::WordPoolExhausted { pool: 1 })
        );
        assert_eq!(c.screen(), Some(Screen::New));
    }

    #[test]
    fn unknown_screen_name_is_rejected() {
        let mut c = controller(&["crane"], false);
        assert_eq!(c.request_named("Settings"), Ok(Transition::Rejected));
        assert_eq!(c.request_named("Play"), Ok(Transition::Entered));
    }

    #[test]
    fn quit_key_stops_from_any_screen() {
        let mut c = controller(&["crane"], false);
        c.dispatch(InputEvent::QuitKey).unwrap();
        assert!(!c.is_running());

        // Later events are ignored
        let report = c.dispatch(InputEvent::SubmitKey).unwrap();
        assert_eq!(report.delivered, 0);
    }

    #[test]
    fn process_quit_always_stops() {
        let mut c = controller(&["crane"], false);
        c.request(Screen::Play).unwrap();
        c.request(Screen::Start).unwrap();
        c.dispatch(InputEvent::ProcessQuit).unwrap();
        assert!(!c.is_running());
    }

    #[test]
    fn keypad_clicks_type_letters() {
        let mut c = controller(&["crane"], false);
        c.request(Screen::Play).unwrap();
        c.request(Screen::Start).unwrap();

        let c_key = Letter::from_char('c').unwrap();
        let rect = c
            .world()
            .layout()
            .keys()
            .iter()
            .find(|(key, _)| *key == crate::control::KeypadKey::Letter(c_key))
            .map(|&(_, rect)| rect)
            .unwrap();
        c.dispatch(InputEvent::PointerUp(ratatui::layout::Position::new(rect.x, rect.y)))
            .unwrap();
        assert_eq!(c.world().session().in_progress(), &[c_key]);
    }
}
