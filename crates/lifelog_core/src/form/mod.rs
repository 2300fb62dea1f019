//! Entry form and editing workflow state.
//!
//! # Responsibility
//! - Model the single input form that drives create and update.
//! - Make the idle/editing workflow an explicit state machine.

pub mod entry_form;
