//! Core domain logic for Taskboard.
//! This crate is the single source of truth for board state and invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;
pub mod view;

pub use config::BoardConfig;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::task::{NewTask, Task, TaskId, TaskValidationError};
pub use model::user::{User, UserId, DEFAULT_AVATAR_BASE};
pub use seed::{builtin_seed, SeedData, SeedError};
pub use service::board_service::{BoardError, BoardService, UserCard};
pub use store::task_store::{InMemoryTaskStore, TaskStore};
pub use store::user_directory::UserDirectory;
pub use view::creation::{
    CreationError, CreationEvent, CreationEventSink, CreationState, TaskCreationFlow, TaskDraft,
};
pub use view::selection::UserSelection;
pub use view::task_list::TaskListView;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
