//! Core domain logic for lifelog, a client-embeddable life-event tracker.
//! This crate is the single source of truth for business invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;

pub use form::entry_form::{today, EditState, EntryForm};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{normalize_title, parse_date, Event, EventId, EventValidationError};
pub use query::filter::{filter_events, EventFilter};
pub use store::event_store::{EventStore, StoreError, StoreNotification, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
