//! Categorical input events

use crate::core::Letter;
use ratatui::layout::Position;
use std::fmt;

/// Input the game reacts to, already translated from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    LetterKey(Letter),
    SubmitKey,
    BackspaceKey,
    QuitKey,
    PointerMove(Position),
    PointerUp(Position),
    ProcessQuit,
}

/// Subscription key for the event bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    LetterKey,
    SubmitKey,
    BackspaceKey,
    QuitKey,
    PointerMove,
    PointerUp,
    ProcessQuit,
}

/// Data delivered to handlers alongside the category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    None,
    Letter(Letter),
    Pointer(Position),
}

impl InputEvent {
    #[must_use]
    pub const fn category(self) -> EventCategory {
        match self {
            Self::LetterKey(_) => EventCategory::LetterKey,
            Self::SubmitKey => EventCategory::SubmitKey,
            Self::BackspaceKey => EventCategory::BackspaceKey,
            Self::QuitKey => EventCategory::QuitKey,
            Self::PointerMove(_) => EventCategory::PointerMove,
            Self::PointerUp(_) => EventCategory::PointerUp,
            Self::ProcessQuit => EventCategory::ProcessQuit,
        }
    }

    #[must_use]
    pub const fn payload(self) -> Payload {
        match self {
            Self::LetterKey(letter) => Payload::Letter(letter),
            Self::PointerMove(pos) | Self::PointerUp(pos) => Payload::Pointer(pos),
            Self::SubmitKey | Self::BackspaceKey | Self::QuitKey | Self::ProcessQuit => {
                Payload::None
            }
        }
    }

    /// Letter keys for every alphabetic character of `text`; others are dropped
    pub fn letters(text: &str) -> impl Iterator<Item = Self> + '_ {
        text.chars().filter_map(Letter::from_char).map(Self::LetterKey)
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LetterKey => "letter-key",
            Self::SubmitKey => "submit-key",
            Self::BackspaceKey => "backspace-key",
            Self::QuitKey => "quit-key",
            Self::PointerMove => "pointer-move",
            Self::PointerUp => "pointer-up",
            Self::ProcessQuit => "process-quit",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_split_into_category_and_payload() {
        let a = Letter::from_char('a').unwrap();
        let event = InputEvent::LetterKey(a);
        assert_eq!(event.category(), EventCategory::LetterKey);
        assert_eq!(event.payload(), Payload::Letter(a));

        let pos = Position::new(3, 4);
        assert_eq!(InputEvent::PointerUp(pos).payload(), Payload::Pointer(pos));
        assert_eq!(InputEvent::SubmitKey.payload(), Payload::None);
    }

    #[test]
    fn letters_drop_non_alphabetic_input() {
        let events: Vec<InputEvent> = InputEvent::letters("c4r!").collect();
        assert_eq!(events.len(), 2);
        assert!(
            events
                .iter()
                .all(|e| e.category() == EventCategory::LetterKey)
        );
    }
}
