//! Domain model for dated life events.
//!
//! # Responsibility
//! - Define the canonical event record and its validation rules.
//! - Keep parsing of user-facing date input next to the model it feeds.
//!
//! # Invariants
//! - Every event is identified by a stable, non-nil `EventId`.
//! - A stored title is trimmed and never blank.

pub mod event;
