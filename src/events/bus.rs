//! Category-based publish/subscribe registry
//!
//! Handlers are plain values (typically a fieldless enum) registered per
//! [`EventCategory`]. Publishing runs every subscriber of the category in
//! registration order against a caller-supplied context. A failing handler is
//! logged and reported; it never stops the remaining subscribers.

use super::{EventCategory, Payload};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::{trace, warn};

/// Something that reacts to published events
pub trait Handler<C: ?Sized> {
    /// React to one event
    ///
    /// # Errors
    /// Returns `HandlerError` when the event cannot be handled; the bus logs
    /// it and moves on to the next subscriber.
    fn handle(&self, ctx: &mut C, payload: Payload) -> Result<(), HandlerError>;
}

/// Why a handler could not process an event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("{handler} cannot handle payload {payload:?}")]
    UnexpectedPayload {
        handler: &'static str,
        payload: Payload,
    },
}

/// Outcome of one publish
#[derive(Debug, Default)]
pub struct PublishReport {
    /// Handlers that ran, including failed ones
    pub delivered: usize,
    pub failures: Vec<HandlerError>,
}

impl PublishReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Subscription registry keyed by event category
#[derive(Debug, Clone)]
pub struct EventBus<H> {
    listeners: FxHashMap<EventCategory, Vec<H>>,
}

impl<H> Default for EventBus<H> {
    fn default() -> Self {
        Self {
            listeners: FxHashMap::default(),
        }
    }
}

impl<H: PartialEq + fmt::Debug> EventBus<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `handler` to the end of `category`'s list
    ///
    /// Subscribing a handler that is already registered for the category is a
    /// no-op and returns false.
    pub fn subscribe(&mut self, category: EventCategory, handler: H) -> bool {
        let handlers = self.listeners.entry(category).or_default();
        if handlers.contains(&handler) {
            return false;
        }
        trace!(%category, ?handler, "subscribed");
        handlers.push(handler);
        true
    }

    /// Remove `handler` from `category`; returns false if it was not there
    pub fn unsubscribe(&mut self, category: EventCategory, handler: &H) -> bool {
        let Some(handlers) = self.listeners.get_mut(&category) else {
            return false;
        };
        let Some(index) = handlers.iter().position(|h| h == handler) else {
            return false;
        };
        handlers.remove(index);
        trace!(%category, ?handler, "unsubscribed");
        true
    }

    /// Current subscribers of `category`, in registration order
    #[must_use]
    pub fn subscribers(&self, category: EventCategory) -> &[H] {
        self.listeners.get(&category).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_subscribed(&self, category: EventCategory, handler: &H) -> bool {
        self.subscribers(category).contains(handler)
    }

    /// Total number of (category, handler) registrations
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every subscriber of `category` with `payload`
    pub fn publish<C: ?Sized>(
        &self,
        category: EventCategory,
        payload: Payload,
        ctx: &mut C,
    ) -> PublishReport
    where
        H: Handler<C>,
    {
        let mut report = PublishReport::default();

        for handler in self.subscribers(category) {
            report.delivered += 1;
            if let Err(err) = handler.handle(ctx, payload) {
                warn!(%category, ?handler, error = %err, "event handler failed");
                report.failures.push(err);
            }
        }

        report
    }
}
