//! Screens and their static transition table

use super::GameHandler;
use crate::events::EventCategory;
use std::fmt;
use std::str::FromStr;

/// Top-level UI mode
///
/// `Start`, `New` and `Quit` are phases of the play screen: the board stays
/// visible while they are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Title menu
    Initial,
    /// Board shown, no round running yet
    Play,
    /// Round running, gameplay input enabled
    Start,
    /// Board cleared, waiting for the next Start
    New,
    /// Shutting down
    Quit,
}

impl Screen {
    /// Screens reachable from this one
    #[must_use]
    pub const fn successors(self) -> &'static [Self] {
        match self {
            Self::Initial => &[Self::Play],
            Self::Play => &[Self::Start, Self::Quit],
            Self::Start => &[Self::New, Self::Quit],
            Self::New => &[Self::Start, Self::Quit],
            Self::Quit => &[],
        }
    }

    #[must_use]
    pub fn allows(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Play => "Play",
            Self::Start => "Start",
            Self::New => "New",
            Self::Quit => "Quit",
        }
    }

    /// On-screen buttons, each labelled with the screen it requests
    #[must_use]
    pub const fn buttons(self) -> &'static [Self] {
        match self {
            Self::Initial => &[Self::Play],
            Self::Play | Self::Start | Self::New => &[Self::Start, Self::New, Self::Quit],
            Self::Quit => &[],
        }
    }

    /// Screen requested by the Enter key, if Enter navigates here
    #[must_use]
    pub const fn primary(self) -> Option<Self> {
        match self {
            Self::Initial => Some(Self::Play),
            Self::Play | Self::New => Some(Self::Start),
            Self::Start | Self::Quit => None,
        }
    }

    /// Whether the board and keypad are drawn
    #[must_use]
    pub const fn shows_board(self) -> bool {
        matches!(self, Self::Play | Self::Start | Self::New)
    }

    /// Every subscription this screen needs while it is active
    #[must_use]
    pub fn subscriptions(self) -> Vec<(EventCategory, GameHandler)> {
        let mut subs = match self {
            Self::Quit => return Vec::new(),
            Self::Start => Vec::new(),
            Self::Initial | Self::Play | Self::New => {
                vec![(EventCategory::SubmitKey, GameHandler::Advance)]
            }
        };

        subs.extend([
            (EventCategory::PointerMove, GameHandler::ButtonHover),
            (EventCategory::PointerUp, GameHandler::ButtonClick),
            (EventCategory::QuitKey, GameHandler::Shutdown),
            (EventCategory::ProcessQuit, GameHandler::Shutdown),
        ]);

        if self == Self::Start {
            subs.extend([
                (EventCategory::LetterKey, GameHandler::TypeLetter),
                (EventCategory::SubmitKey, GameHandler::SubmitGuess),
                (EventCategory::BackspaceKey, GameHandler::EraseLetter),
                (EventCategory::PointerMove, GameHandler::KeypadHover),
                (EventCategory::PointerUp, GameHandler::KeypadClick),
            ]);
        }

        subs
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Initial" => Ok(Self::Initial),
            "Play" => Ok(Self::Play),
            "Start" => Ok(Self::Start),
            "New" => Ok(Self::New),
            "Quit" => Ok(Self::Quit),
            other => Err(format!("unknown screen '{other}'")),
        }
    }
}
