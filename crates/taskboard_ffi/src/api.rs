//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the board actions (select, open, submit, cancel) to Dart via FRB.
//! - Keep one board per process behind a lock, since host calls arrive as
//!   free functions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every board call runs to completion under the board lock.

use log::warn;
use std::sync::{Mutex, MutexGuard};
use taskboard_core::{
    builtin_seed, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, BoardConfig, BoardService, SeedData, Task,
};

static BOARD: Mutex<Option<BoardService>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// User list entry for the profile sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCardItem {
    pub user_id: String,
    pub name: String,
    pub image_path: String,
    pub selected: bool,
}

/// Task row shown in the selected user's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: String,
    pub owner_id: String,
    pub title: String,
    pub summary: String,
    pub due_date: String,
}

/// Generic action response envelope for board actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the action succeeded.
    pub ok: bool,
    /// Created task ID, for submit actions.
    pub task_id: Option<String>,
    /// Human-readable message; inline form error on rejected submits.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            task_id: None,
            message: message.into(),
        }
    }

    fn created(task: &Task) -> Self {
        Self {
            ok: true,
            task_id: Some(task.id.to_string()),
            message: "Task created.".to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Replaces the board with one built from a JSON seed document.
///
/// An empty `seed_json` loads the built-in demo users.
///
/// # FFI contract
/// - Resets selection, panel state and all in-memory tasks.
#[flutter_rust_bridge::frb(sync)]
pub fn board_load_seed(seed_json: String) -> BoardActionResponse {
    let seed = if seed_json.trim().is_empty() {
        builtin_seed()
    } else {
        match SeedData::parse(&seed_json) {
            Ok(seed) => seed,
            Err(err) => {
                return BoardActionResponse::failure(format!("board_load_seed failed: {err}"))
            }
        }
    };

    let user_count = seed.users.len();
    let board = BoardService::from_seed(seed, &BoardConfig::from_env());
    *lock_board() = Some(board);
    BoardActionResponse::success(format!("Loaded {user_count} user(s)."))
}

/// Lists user cards; empty when no board is loaded.
#[flutter_rust_bridge::frb(sync)]
pub fn board_user_cards() -> Vec<UserCardItem> {
    with_board(|board| {
        board
            .user_cards()
            .into_iter()
            .map(|card| UserCardItem {
                user_id: card.user.id,
                name: card.user.name,
                image_path: card.image_path,
                selected: card.selected,
            })
            .collect()
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_select_user(user_id: String) -> BoardActionResponse {
    match with_board(|board| board.select_user(user_id.trim())) {
        Ok(()) => BoardActionResponse::success("User selected."),
        Err(err) => BoardActionResponse::failure(err),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_clear_selection() -> BoardActionResponse {
    match with_board(|board| board.clear_selection()) {
        Ok(()) => BoardActionResponse::success("Selection cleared."),
        Err(err) => BoardActionResponse::failure(err),
    }
}

/// Tasks of the selected user in creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_visible_tasks() -> Vec<TaskItem> {
    with_board(|board| {
        board
            .selected_tasks()
            .into_iter()
            .map(to_task_item)
            .collect()
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_open_new_task() -> BoardActionResponse {
    match with_board(|board| board.open_new_task()) {
        Ok(Ok(())) => BoardActionResponse::success("Creation panel opened."),
        Ok(Err(err)) => BoardActionResponse::failure(format!("board_open_new_task failed: {err}")),
        Err(err) => BoardActionResponse::failure(err),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_cancel_new_task() -> BoardActionResponse {
    match with_board(|board| board.cancel_new_task()) {
        Ok(()) => BoardActionResponse::success("Creation panel closed."),
        Err(err) => BoardActionResponse::failure(err),
    }
}

/// Submits the creation form for the selected user.
///
/// # FFI contract
/// - On rejection the panel stays open and `message` carries the inline error.
#[flutter_rust_bridge::frb(sync)]
pub fn board_submit_new_task(
    title: String,
    summary: String,
    due_date: String,
) -> BoardActionResponse {
    match with_board(|board| board.submit_new_task(title, summary, due_date)) {
        Ok(Ok(task)) => BoardActionResponse::created(&task),
        Ok(Err(err)) => BoardActionResponse::failure(err.to_string()),
        Err(err) => BoardActionResponse::failure(err),
    }
}

fn lock_board() -> MutexGuard<'static, Option<BoardService>> {
    // A poisoned lock still holds a consistent board: every mutation completes
    // before control returns to the host.
    BOARD.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_board<T>(f: impl FnOnce(&mut BoardService) -> T) -> Result<T, String> {
    let mut guard = lock_board();
    match guard.as_mut() {
        Some(board) => Ok(f(board)),
        None => {
            warn!("event=board_call_rejected module=ffi status=error reason=not_loaded");
            Err("board not loaded; call board_load_seed first".to_string())
        }
    }
}

fn to_task_item(task: Task) -> TaskItem {
    TaskItem {
        task_id: task.id.to_string(),
        owner_id: task.owner_id,
        title: task.title,
        summary: task.summary,
        due_date: task.due_date,
    }
}
