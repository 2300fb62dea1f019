//! Search/date filter projection.
//!
//! # Responsibility
//! - Match events against free-text and calendar-day criteria.
//! - Derive ordered, non-destructive views of a collection.
//!
//! # Invariants
//! - Empty criteria match everything (identity projection).
//! - Matching never mutates the source collection or the filter.

use crate::model::event::Event;
use chrono::NaiveDate;

/// Current search/date criteria, independent of the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Case-insensitive substring matched against event titles.
    pub search_text: String,
    /// When set, restricts results to this calendar day.
    pub date: Option<NaiveDate>,
}

impl EventFilter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether one event passes both criteria.
    ///
    /// The date check is plain `NaiveDate` equality: both sides are
    /// date-only values, so no timezone handling can shift the day.
    pub fn matches(&self, event: &Event) -> bool {
        let matches_search = self.search_text.is_empty()
            || event
                .title
                .to_lowercase()
                .contains(&self.search_text.to_lowercase());

        let matches_date = match self.date {
            Some(date) => event.date == date,
            None => true,
        };

        matches_search && matches_date
    }

    /// Resets both criteria back to match-everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether this filter is the identity projection.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.date.is_none()
    }
}

/// Projects the events passing `filter`, in collection order.
///
/// Pure function over its inputs; may be recomputed any number of times
/// with no side effects.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    events.iter().filter(|event| filter.matches(event)).collect()
}
