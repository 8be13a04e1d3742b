//! Task model.
//!
//! # Responsibility
//! - Define the stored task record and the creation candidate shape.
//! - Reject structurally invalid records at deserialization time.
//!
//! # Invariants
//! - `id` is never the nil UUID.
//! - `owner_id` references a user by id; existence is checked by callers
//!   that hold the user directory, not by the record itself.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a task.
pub type TaskId = Uuid;

/// Stored task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub owner_id: UserId,
    pub title: String,
    pub summary: String,
    /// ISO date (`YYYY-MM-DD`) as entered; kept as free text.
    pub due_date: String,
}

/// Candidate fields for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    pub owner_id: UserId,
    pub title: String,
    pub summary: String,
    pub due_date: String,
}

/// Structural validation failure for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Builds a task from a candidate with a freshly generated id.
    pub fn from_candidate(candidate: NewTask) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: candidate.owner_id,
            title: candidate.title,
            summary: candidate.summary,
            due_date: candidate.due_date,
        }
    }

    /// Returns whether this task belongs to `owner_id`.
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    owner_id: UserId,
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    due_date: String,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            id: record.id,
            owner_id: record.owner_id,
            title: record.title,
            summary: record.summary,
            due_date: record.due_date,
        };
        task.validate()?;
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::{NewTask, Task};

    #[test]
    fn from_candidate_generates_id_distinct_from_owner() {
        let task = Task::from_candidate(NewTask {
            owner_id: "u1".to_string(),
            title: "A".to_string(),
            ..NewTask::default()
        });

        assert!(!task.id.is_nil());
        assert_ne!(task.id.to_string(), task.owner_id);
        assert!(task.is_owned_by("u1"));
        assert!(!task.is_owned_by("u2"));
    }
}
