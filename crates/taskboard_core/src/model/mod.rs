//! Domain model for the task board.
//!
//! # Responsibility
//! - Define the user and task records shared by store, views and FFI.
//! - Keep derived values (avatar image path) as pure functions of the record.
//!
//! # Invariants
//! - Users are immutable after seed loading.
//! - Every task is identified by a freshly generated `TaskId`, never by its
//!   owner's id.

pub mod task;
pub mod user;
