//! View-state models for the board screens.
//!
//! # Responsibility
//! - Track the selected user and the creation panel flag.
//! - Drive the task creation form state machine.
//! - Derive visible task lists on demand from the store.
//!
//! # Invariants
//! - View models never cache store reads; every read goes to the store.
//! - Child-to-parent signalling goes through `CreationEventSink`, not polling.

pub mod creation;
pub mod selection;
pub mod task_list;
