//! Event store: canonical collection plus notification fan-out.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for embedding callers.
//! - Notify subscribers of every user-visible outcome.
//!
//! # Invariants
//! - Insertion order is preserved; update never changes an event's
//!   position, remove never reorders survivors.
//! - Subscribers run synchronously after the collection mutation, so a
//!   callback always observes the post-operation state.

use crate::model::event::{normalize_title, Event, EventId, EventValidationError};
use crate::query::filter::{filter_events, EventFilter};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for event mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(EventValidationError),
    NotFound(EventId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "event not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<EventValidationError> for StoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Outcome delivered to subscribers after each store operation.
///
/// This is the seam a presentation layer hangs user feedback off; the
/// store itself knows nothing about rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreNotification {
    /// A new event was appended to the collection.
    Created(Event),
    /// An existing event's title/date were replaced in place.
    Updated(Event),
    /// The event with this ID was removed.
    Deleted(EventId),
    /// A create/update input failed validation; nothing was mutated.
    Rejected(EventValidationError),
}

type Subscriber = Box<dyn Fn(&StoreNotification)>;

/// Owns the ordered event collection and its subscriber list.
#[derive(Default)]
pub struct EventStore {
    events: Vec<Event>,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("events", &self.events)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl EventStore {
    /// Creates an empty store with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for every subsequent [`StoreNotification`].
    ///
    /// # Contract
    /// - Callbacks run synchronously on the caller's thread, in
    ///   registration order.
    /// - Callbacks must not re-enter the store; they receive outcomes,
    ///   not a handle.
    pub fn subscribe(&mut self, subscriber: impl Fn(&StoreNotification) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Read accessor for the canonical collection, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up one event by stable ID.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Creates an event and appends it to the collection.
    ///
    /// # Contract
    /// - Trims the title; fails with a validation error on blank input.
    /// - On failure nothing is mutated and subscribers see `Rejected`.
    /// - Returns the stored event, including its generated ID.
    pub fn create(&mut self, title: &str, date: NaiveDate) -> StoreResult<Event> {
        let event = match Event::new(title, date) {
            Ok(event) => event,
            Err(err) => {
                warn!("event=event_create module=store status=rejected reason={err}");
                self.notify(&StoreNotification::Rejected(err.clone()));
                return Err(err.into());
            }
        };

        self.events.push(event.clone());
        info!(
            "event=event_create module=store status=ok id={} total={}",
            event.id,
            self.events.len()
        );
        self.notify(&StoreNotification::Created(event.clone()));
        Ok(event)
    }

    /// Replaces title and date on the event with the given ID.
    ///
    /// # Contract
    /// - Applies the same non-empty-title rule as [`EventStore::create`].
    /// - Fails with `NotFound` when no event has this ID; no partial
    ///   mutation occurs on any failure.
    /// - The event keeps its ID and ordinal position.
    pub fn update(&mut self, id: EventId, title: &str, date: NaiveDate) -> StoreResult<Event> {
        let title = match normalize_title(title) {
            Ok(title) => title,
            Err(err) => {
                warn!("event=event_update module=store status=rejected id={id} reason={err}");
                self.notify(&StoreNotification::Rejected(err.clone()));
                return Err(err.into());
            }
        };

        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            warn!("event=event_update module=store status=not_found id={id}");
            return Err(StoreError::NotFound(id));
        };

        event.title = title;
        event.date = date;
        let updated = event.clone();

        info!("event=event_update module=store status=ok id={id}");
        self.notify(&StoreNotification::Updated(updated.clone()));
        Ok(updated)
    }

    /// Removes the event with the given ID, if present.
    ///
    /// Removing an absent ID is an idempotent no-op, matching
    /// filter-out-by-id semantics. Returns whether anything was removed;
    /// subscribers are notified only on actual removal.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);

        if self.events.len() == before {
            debug!("event=event_remove module=store status=noop id={id}");
            return false;
        }

        info!(
            "event=event_remove module=store status=ok id={id} total={}",
            self.events.len()
        );
        self.notify(&StoreNotification::Deleted(id));
        true
    }

    /// Computes the filtered projection of the collection.
    ///
    /// Pure and restartable; never mutates the collection or the filter.
    pub fn filtered(&self, filter: &EventFilter) -> Vec<&Event> {
        filter_events(&self.events, filter)
    }

    fn notify(&self, notification: &StoreNotification) {
        for subscriber in &self.subscribers {
            subscriber(notification);
        }
    }
}
