//! Entry form state machine.
//!
//! # Responsibility
//! - Hold the title/date input fields shared by create and update.
//! - Decide, on submit, whether the input creates or commits an edit.
//!
//! # Invariants
//! - At most one event is being edited at a time.
//! - A successful submit always resets the form to creation defaults
//!   (empty title, today's date, `Idle`).
//! - A failed submit leaves both the form and the store untouched.

use crate::model::event::{parse_date, Event, EventId, EventValidationError};
use crate::store::event_store::{EventStore, StoreResult};
use chrono::{Local, NaiveDate};

/// Which event, if any, the form currently mirrors for in-place edit.
///
/// There is no explicit cancel: the only exits from `Editing` are
/// committing the update or starting another edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Submit will create a new event.
    Idle,
    /// Submit will commit an update to this event.
    Editing(EventId),
}

/// The single input form driving event creation and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    /// Raw title input; trimming happens in the store's write path.
    pub title: String,
    /// Currently selected calendar date.
    pub date: NaiveDate,
    state: EditState,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryForm {
    /// Creates a form at creation defaults: empty title, today's date.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            date: today(),
            state: EditState::Idle,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    /// Replaces the title field with raw user input.
    pub fn set_title(&mut self, raw: impl Into<String>) {
        self.title = raw.into();
    }

    /// Replaces the date field with an already-parsed date.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Parses `YYYY-MM-DD` input into the date field.
    ///
    /// On parse failure the previous date is kept.
    pub fn set_date_input(&mut self, input: &str) -> Result<(), EventValidationError> {
        self.date = parse_date(input)?;
        Ok(())
    }

    /// Copies an event's fields into the form and enters `Editing`.
    ///
    /// Starting a new edit replaces any edit already in progress.
    pub fn begin_edit(&mut self, event: &Event) {
        self.title = event.title.clone();
        self.date = event.date;
        self.state = EditState::Editing(event.id);
    }

    /// Submits the form against the store.
    ///
    /// # Contract
    /// - `Idle` creates; `Editing(id)` updates that event.
    /// - On success the form resets to creation defaults.
    /// - On failure the form keeps its fields and edit state so the user
    ///   can correct the input and retry.
    pub fn submit(&mut self, store: &mut EventStore) -> StoreResult<Event> {
        let result = match self.state {
            EditState::Idle => store.create(&self.title, self.date),
            EditState::Editing(id) => store.update(id, &self.title, self.date),
        };

        if result.is_ok() {
            self.reset();
        }
        result
    }

    /// Returns the form to creation defaults and drops any edit state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// The caller's local calendar day, used to pre-populate and reset the
/// creation form.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
