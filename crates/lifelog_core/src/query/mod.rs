//! Derived views over the event collection.
//!
//! # Responsibility
//! - Compute filter projections without touching canonical state.
//!
//! # Invariants
//! - Projections preserve collection order and are restartable.

pub mod filter;
