//! Board composition root.
//!
//! # Responsibility
//! - Own the user directory, task store and view models of one board.
//! - Route host actions (select, open, submit, cancel) to the right model.
//! - Project user cards and the selected user's task list for rendering.
//!
//! # Invariants
//! - The creation panel flag and the creation flow state agree after every
//!   public call.
//! - Visible tasks are read from the store on every call.

use crate::config::BoardConfig;
use crate::model::task::Task;
use crate::model::user::User;
use crate::seed::SeedData;
use crate::store::task_store::{InMemoryTaskStore, TaskStore};
use crate::store::user_directory::UserDirectory;
use crate::view::creation::{CreationError, TaskCreationFlow};
use crate::view::selection::UserSelection;
use crate::view::task_list::TaskListView;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Board-level action failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The action needs a selected user and none is selected.
    NoUserSelected,
    Creation(CreationError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoUserSelected => write!(f, "no user selected"),
            Self::Creation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Creation(err) => Some(err),
            Self::NoUserSelected => None,
        }
    }
}

impl From<CreationError> for BoardError {
    fn from(value: CreationError) -> Self {
        Self::Creation(value)
    }
}

/// Render projection of one user in the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub user: User,
    pub image_path: String,
    pub selected: bool,
}

/// One task board: users, their tasks and the screen state around them.
pub struct BoardService<S: TaskStore = InMemoryTaskStore> {
    users: UserDirectory,
    store: S,
    selection: UserSelection,
    task_list: TaskListView,
    creation: TaskCreationFlow,
    avatar_base_path: String,
}

impl BoardService<InMemoryTaskStore> {
    /// Builds an in-memory board from checked seed data.
    pub fn from_seed(seed: SeedData, config: &BoardConfig) -> Self {
        let (users, store) = seed.into_parts();
        Self::new(users, store, config)
    }
}

impl<S: TaskStore> BoardService<S> {
    pub fn new(users: UserDirectory, store: S, config: &BoardConfig) -> Self {
        if users.is_empty() {
            warn!("event=board_ready module=service status=warn reason=no_users");
        }
        info!(
            "event=board_ready module=service users={} tasks={}",
            users.len(),
            store.len()
        );
        Self {
            users,
            store,
            selection: UserSelection::new(),
            task_list: TaskListView::new(),
            creation: TaskCreationFlow::new(),
            avatar_base_path: config.avatar_base_path.clone(),
        }
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn creation(&self) -> &TaskCreationFlow {
        &self.creation
    }

    pub fn is_creation_panel_open(&self) -> bool {
        self.task_list.is_creation_panel_open()
    }

    /// Selects a user. Any open creation panel is cancelled first, since the
    /// draft belongs to the previous owner.
    pub fn select_user(&mut self, user_id: &str) {
        if self.selection.is_selected(user_id) {
            return;
        }
        self.creation.cancel(&mut self.task_list);
        self.selection.select(user_id);
    }

    /// Drops the selection and cancels any open creation panel.
    pub fn clear_selection(&mut self) {
        self.creation.cancel(&mut self.task_list);
        self.selection.clear();
    }

    pub fn selected_user_id(&self) -> Option<&str> {
        self.selection.current().map(String::as_str)
    }

    /// Selected user, when the selected id is known to the directory.
    pub fn selected_user(&self) -> Option<&User> {
        self.selection
            .current()
            .and_then(|user_id| self.users.get(user_id))
    }

    /// User list projection with image paths and the selected flag.
    pub fn user_cards(&self) -> Vec<UserCard> {
        self.users
            .users()
            .iter()
            .map(|user| UserCard {
                user: user.clone(),
                image_path: user.image_path(&self.avatar_base_path),
                selected: self.selection.is_selected(&user.id),
            })
            .collect()
    }

    /// Tasks of `owner_id` as currently stored.
    pub fn visible_tasks(&self, owner_id: &str) -> Vec<Task> {
        self.task_list.visible_tasks(&self.store, owner_id)
    }

    /// Tasks of the selected user; empty when nothing is selected.
    pub fn selected_tasks(&self) -> Vec<Task> {
        match self.selection.current() {
            Some(user_id) => self.visible_tasks(user_id),
            None => Vec::new(),
        }
    }

    /// Opens the creation panel for the selected user.
    pub fn open_new_task(&mut self) -> Result<(), BoardError> {
        let owner_id = self
            .selection
            .current()
            .ok_or(BoardError::NoUserSelected)?;
        self.creation.open(owner_id.clone());
        self.task_list.set_creation_panel_open(true);
        Ok(())
    }

    pub fn cancel_new_task(&mut self) {
        self.creation.cancel(&mut self.task_list);
    }

    /// Fills the open form and submits it.
    ///
    /// Fields are ignored when the panel is closed, in which case the result
    /// is `CreationError::NotOpen`.
    pub fn submit_new_task(
        &mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Result<Task, BoardError> {
        self.creation.set_title(title);
        self.creation.set_summary(summary);
        self.creation.set_due_date(due_date);
        let task = self
            .creation
            .submit(&mut self.store, &self.users, &mut self.task_list)?;
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardError, BoardService};
    use crate::config::BoardConfig;
    use crate::seed::builtin_seed;
    use crate::store::task_store::{InMemoryTaskStore, TaskStore};
    use crate::store::user_directory::UserDirectory;
    use crate::view::creation::CreationError;

    fn board() -> BoardService {
        BoardService::from_seed(builtin_seed(), &BoardConfig::default())
    }

    #[test]
    fn open_requires_selection() {
        let mut board = board();
        assert_eq!(board.open_new_task(), Err(BoardError::NoUserSelected));
        assert!(!board.is_creation_panel_open());
    }

    #[test]
    fn submit_without_open_panel_is_rejected() {
        let mut board = board();
        board.select_user("u1");
        let err = board.submit_new_task("A", "S", "2024-01-01").unwrap_err();
        assert_eq!(err, BoardError::Creation(CreationError::NotOpen));
        assert!(board.store().is_empty());
    }

    #[test]
    fn switching_user_cancels_open_panel() {
        let mut board = board();
        board.select_user("u1");
        board.open_new_task().unwrap();

        board.select_user("u2");
        assert!(!board.is_creation_panel_open());
        assert!(!board.creation().is_open());
    }

    #[test]
    fn clear_selection_closes_panel_and_hides_tasks() {
        let mut board = board();
        board.select_user("u1");
        board.open_new_task().unwrap();
        board.submit_new_task("A", "", "").unwrap();
        board.open_new_task().unwrap();

        board.clear_selection();
        assert_eq!(board.selected_user_id(), None);
        assert!(!board.is_creation_panel_open());
        assert!(board.selected_tasks().is_empty());
        assert!(board.user_cards().iter().all(|card| !card.selected));
        assert_eq!(board.open_new_task(), Err(BoardError::NoUserSelected));
    }

    #[test]
    fn board_without_users_has_nothing_to_show() {
        let board = BoardService::new(
            UserDirectory::default(),
            InMemoryTaskStore::new(),
            &BoardConfig::default(),
        );
        assert!(board.users().is_empty());
        assert!(board.user_cards().is_empty());
        assert!(board.selected_tasks().is_empty());
    }
}
