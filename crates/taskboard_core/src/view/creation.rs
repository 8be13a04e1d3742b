//! Task creation flow.
//!
//! # Responsibility
//! - Hold the transient form fields of the "new task" panel.
//! - Turn a submitted form into a stored task and notify the parent view.
//!
//! # Invariants
//! - Only `Closed` and `Open` are reachable; `Closed` is initial.
//! - `Open -> Closed` happens on cancel or on a successful submit only.
//! - A rejected submit leaves the store untouched and the flow `Open`.
//! - On success `TaskCreated` is emitted before `CloseRequested`.

use crate::model::task::{NewTask, Task};
use crate::model::user::UserId;
use crate::store::task_store::TaskStore;
use crate::store::user_directory::UserDirectory;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Notification sent from the creation flow to its host view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationEvent {
    /// Panel should close (cancel or successful submit).
    CloseRequested,
    /// A task was stored; carries the full record.
    TaskCreated(Task),
}

/// Receiver of creation flow events.
pub trait CreationEventSink {
    fn emit(&mut self, event: CreationEvent);
}

/// Records events in order; handy for hosts that drain events later.
impl CreationEventSink for Vec<CreationEvent> {
    fn emit(&mut self, event: CreationEvent) {
        self.push(event);
    }
}

/// Submit rejection reasons. All are recoverable; the form stays open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationError {
    /// A required field is blank after trimming.
    EmptyRequiredField(&'static str),
    /// The flow's owner is not a known user.
    InvalidOwner(UserId),
    /// Submit was called while the panel is closed.
    NotOpen,
}

impl Display for CreationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRequiredField(field) => write!(f, "{field} is required"),
            Self::InvalidOwner(user_id) => write!(f, "unknown task owner: `{user_id}`"),
            Self::NotOpen => write!(f, "task creation panel is not open"),
        }
    }
}

impl Error for CreationError {}

/// Form fields of an open creation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub owner_id: UserId,
    pub title: String,
    pub summary: String,
    pub due_date: String,
}

impl TaskDraft {
    fn new(owner_id: UserId) -> Self {
        Self {
            owner_id,
            title: String::new(),
            summary: String::new(),
            due_date: String::new(),
        }
    }

    fn check(&self, users: &UserDirectory) -> Result<(), CreationError> {
        if self.title.trim().is_empty() {
            return Err(CreationError::EmptyRequiredField("title"));
        }
        if !users.contains(&self.owner_id) {
            return Err(CreationError::InvalidOwner(self.owner_id.clone()));
        }
        Ok(())
    }

    fn into_candidate(self) -> NewTask {
        NewTask {
            owner_id: self.owner_id,
            title: self.title,
            summary: self.summary,
            due_date: self.due_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CreationState {
    #[default]
    Closed,
    Open(TaskDraft),
}

/// State machine behind the "new task" modal.
#[derive(Debug, Clone, Default)]
pub struct TaskCreationFlow {
    state: CreationState,
    last_error: Option<CreationError>,
}

impl TaskCreationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CreationState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, CreationState::Open(_))
    }

    /// Current draft while open.
    pub fn draft(&self) -> Option<&TaskDraft> {
        match &self.state {
            CreationState::Open(draft) => Some(draft),
            CreationState::Closed => None,
        }
    }

    /// Message of the last rejected submit, for inline display.
    pub fn last_error(&self) -> Option<&CreationError> {
        self.last_error.as_ref()
    }

    /// Opens an empty form for `owner_id`.
    ///
    /// Returns `false` without touching the current draft when already open.
    pub fn open(&mut self, owner_id: impl Into<UserId>) -> bool {
        if self.is_open() {
            return false;
        }
        let owner_id = owner_id.into();
        debug!("event=creation_opened module=view owner_id={owner_id}");
        self.state = CreationState::Open(TaskDraft::new(owner_id));
        self.last_error = None;
        true
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.title = title.into();
        }
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.summary = summary.into();
        }
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.due_date = due_date.into();
        }
    }

    /// Discards the draft and asks the host to close the panel.
    ///
    /// No-op while closed.
    pub fn cancel<K>(&mut self, sink: &mut K)
    where
        K: CreationEventSink + ?Sized,
    {
        if !self.is_open() {
            return;
        }
        self.close();
        debug!("event=creation_cancelled module=view");
        sink.emit(CreationEvent::CloseRequested);
    }

    /// Validates the draft, stores it and closes the flow.
    ///
    /// # Errors
    /// - `NotOpen` when called while closed.
    /// - `EmptyRequiredField("title")` when the title is blank.
    /// - `InvalidOwner` when the owner is missing from `users`.
    pub fn submit<S, K>(
        &mut self,
        store: &mut S,
        users: &UserDirectory,
        sink: &mut K,
    ) -> Result<Task, CreationError>
    where
        S: TaskStore + ?Sized,
        K: CreationEventSink + ?Sized,
    {
        let checked = match &self.state {
            CreationState::Open(draft) => draft.check(users),
            CreationState::Closed => Err(CreationError::NotOpen),
        };
        if let Err(err) = checked {
            warn!("event=creation_rejected module=view status=error reason={err}");
            if err != CreationError::NotOpen {
                self.last_error = Some(err.clone());
            }
            return Err(err);
        }

        let draft = match std::mem::take(&mut self.state) {
            CreationState::Open(draft) => draft,
            CreationState::Closed => return Err(CreationError::NotOpen),
        };
        self.last_error = None;

        let task = store.add_task(draft.into_candidate());
        info!(
            "event=creation_submitted module=view status=ok task_id={} owner_id={}",
            task.id, task.owner_id
        );
        sink.emit(CreationEvent::TaskCreated(task.clone()));
        sink.emit(CreationEvent::CloseRequested);
        Ok(task)
    }

    fn close(&mut self) {
        self.state = CreationState::Closed;
        self.last_error = None;
    }

    fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        match &mut self.state {
            CreationState::Open(draft) => Some(draft),
            CreationState::Closed => None,
        }
    }
}
