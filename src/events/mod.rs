//! Input events and the event bus that fans them out to handlers

mod bus;
mod event;

pub use bus::{EventBus, Handler, HandlerError, PublishReport};
pub use event::{EventCategory, InputEvent, Payload};
