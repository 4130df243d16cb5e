//! Everything handlers and commands may touch

use super::layout::{KeypadKey, ScreenLayout};
use super::Screen;
use crate::game::{GameSession, Statistics, SubmitOutcome, WordSource};
use ratatui::layout::{Position, Rect};
use std::collections::VecDeque;
use tracing::info;

const MAX_MESSAGES: usize = 5;
const AGAIN_HINT: &str = "Press Enter or New for another word";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Mutable game world shared by commands, handlers and screen entry actions
pub struct World<S> {
    session: GameSession<S>,
    stats: Statistics,
    layout: ScreenLayout,
    hovered_button: Option<Screen>,
    hovered_key: Option<KeypadKey>,
    messages: VecDeque<Message>,
    running: bool,
}

impl<S: WordSource> World<S> {
    #[must_use]
    pub fn new(session: GameSession<S>) -> Self {
        Self {
            session,
            stats: Statistics::default(),
            layout: ScreenLayout::default(),
            hovered_button: None,
            hovered_key: None,
            messages: VecDeque::with_capacity(MAX_MESSAGES),
            running: true,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut GameSession<S> {
        &mut self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Recompute geometry for a new terminal size
    pub fn set_viewport(&mut self, area: Rect) {
        if self.layout.area() != area {
            self.layout = ScreenLayout::new(area);
            self.clear_hover();
        }
    }

    /// Rebuild board and keypad geometry for the current viewport
    pub fn rebuild_layout(&mut self) {
        self.layout = ScreenLayout::new(self.layout.area());
        self.clear_hover();
    }

    #[must_use]
    pub const fn hovered_button(&self) -> Option<Screen> {
        self.hovered_button
    }

    #[must_use]
    pub const fn hovered_key(&self) -> Option<KeypadKey> {
        self.hovered_key
    }

    pub fn hover_button(&mut self, screen: Screen, pos: Position) {
        self.hovered_button = self.layout.button_at(screen, pos);
    }

    pub fn hover_key(&mut self, pos: Position) {
        self.hovered_key = self.layout.key_at(pos);
    }

    pub fn clear_hover(&mut self) {
        self.hovered_button = None;
        self.hovered_key = None;
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Newest last, at most five kept
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(Message {
            text: text.into(),
            style,
        });
    }

    /// Fold a submission into statistics and notices
    pub fn record_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Ignored | SubmitOutcome::Continue => {}
            SubmitOutcome::Won => {
                let guesses = self.session.rows().len();
                self.stats.record_win(guesses);
                let celebration = match guesses {
                    1 => "Hole in one!",
                    2 => "Magnificent! Two guesses.",
                    3 => "Splendid! Three guesses.",
                    4 => "Great job! Four guesses.",
                    5 => "Nice work! Five guesses.",
                    _ => "Phew! Got it in six.",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(AGAIN_HINT, MessageStyle::Info);
            }
            SubmitOutcome::Lost => {
                self.stats.record_loss();
                let target = self
                    .session
                    .target()
                    .map_or_else(String::new, |word| word.text().to_string());
                self.add_message(format!("Out of guesses. The word was {target}"), MessageStyle::Error);
                self.add_message(AGAIN_HINT, MessageStyle::Info);
            }
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("shutdown requested");
            self.running = false;
        }
    }
}
