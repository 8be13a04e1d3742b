//! In-memory stores for board data.
//!
//! # Responsibility
//! - Define the task store contract and its in-memory implementation.
//! - Hold the seed user set for lookups by id.
//!
//! # Invariants
//! - Stores are owned values passed by reference; there is no ambient global
//!   state in core.
//! - Task order is insertion order.

pub mod task_store;
pub mod user_directory;
