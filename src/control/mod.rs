//! Screens, commands and the controller that drives them
//!
//! The controller owns an [`EventBus`](crate::events::EventBus) of
//! [`GameHandler`]s, a [`ScreenMachine`] deciding which handlers are live, and
//! the [`World`] they act on.

mod command;
mod controller;
mod handler;
pub mod layout;
mod machine;
mod screen;
mod world;

pub use command::Command;
pub use controller::Controller;
pub use handler::{Dispatch, GameHandler};
pub use layout::{KeypadKey, ScreenLayout};
pub use machine::{ScreenMachine, Transition};
pub use screen::Screen;
pub use world::{Message, MessageStyle, World};
