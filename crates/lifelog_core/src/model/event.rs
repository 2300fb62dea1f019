//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical record for a user-authored life event.
//! - Enforce title/identity validation on every construction path.
//!
//! # Invariants
//! - `id` is stable for the event's lifetime and never reused.
//! - `title` is stored trimmed and is never blank.
//! - `date` carries no time-of-day or timezone component.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every event in a collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EventId = Uuid;

/// Date input format accepted from form-style callers.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Validation failure raised by event construction and store write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
    /// Caller-provided identifier is the nil UUID.
    NilUuid,
    /// Raw date input does not parse as an ISO-8601 calendar date.
    InvalidDate { input: String },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title cannot be empty or whitespace-only"),
            Self::NilUuid => write!(f, "event id cannot be the nil uuid"),
            Self::InvalidDate { input } => {
                write!(f, "invalid event date `{input}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for EventValidationError {}

/// Canonical record pairing a title with a calendar date.
///
/// The date is a plain `NaiveDate`, so same-day comparison is field
/// equality and no timezone conversion can shift the calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    /// Stable global ID used for lookup, ordering checks and auditing.
    pub id: EventId,
    /// Trimmed display text; never blank.
    pub title: String,
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Raw wire shape; promoted to [`Event`] through validation.
#[derive(Deserialize)]
struct EventRecord {
    id: EventId,
    title: String,
    date: NaiveDate,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventValidationError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.title, record.date)
    }
}

impl Event {
    /// Creates a new event with a generated stable ID.
    ///
    /// # Contract
    /// - Trims the title before storage.
    /// - Fails with `EmptyTitle` when the trimmed title is blank.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, EventValidationError> {
        Self::with_id(Uuid::new_v4(), title, date)
    }

    /// Creates an event with a caller-provided stable ID.
    ///
    /// Used by deserialization and test fixtures where identity already
    /// exists externally.
    ///
    /// # Contract
    /// - Rejects the nil UUID.
    /// - Applies the same title normalization as [`Event::new`].
    pub fn with_id(
        id: EventId,
        title: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, EventValidationError> {
        if id.is_nil() {
            return Err(EventValidationError::NilUuid);
        }
        let title = normalize_title(&title.into())?;
        Ok(Self { id, title, date })
    }

    /// Checks stored state against model invariants.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.is_nil() {
            return Err(EventValidationError::NilUuid);
        }
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Trims a raw title and rejects blank results.
///
/// Shared by construction and the store's update path so both writes
/// enforce one rule.
pub fn normalize_title(raw: &str) -> Result<String, EventValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EventValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Parses `YYYY-MM-DD` form input into a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, EventValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT).map_err(|_| {
        EventValidationError::InvalidDate {
            input: input.to_string(),
        }
    })
}
