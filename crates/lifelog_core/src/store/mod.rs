//! In-memory event collection ownership.
//!
//! # Responsibility
//! - Own the canonical, insertion-ordered event list.
//! - Expose the sole mutation surface (create/update/remove).
//!
//! # Invariants
//! - Write paths validate before mutating; a failed operation leaves the
//!   collection untouched.
//! - Event IDs are unique within the collection at all times.

pub mod event_store;
