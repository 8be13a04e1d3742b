//! Startup seed data.
//!
//! # Responsibility
//! - Parse the JSON seed document supplied by the host.
//! - Provide a small built-in user set for demos and smoke checks.
//!
//! # Invariants
//! - User ids are unique within one seed document.
//! - Task ids are unique within one seed document.
//! - Every seed task references a user of the same document.

use crate::model::task::{Task, TaskId};
use crate::model::user::{User, UserId};
use crate::store::task_store::InMemoryTaskStore;
use crate::store::user_directory::UserDirectory;
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Seed loading failure.
#[derive(Debug)]
pub enum SeedError {
    Parse(serde_json::Error),
    DuplicateUser(UserId),
    DuplicateTask(TaskId),
    UnknownOwner { task_id: TaskId, owner_id: UserId },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid seed document: {err}"),
            Self::DuplicateUser(user_id) => write!(f, "duplicate seed user id: `{user_id}`"),
            Self::DuplicateTask(task_id) => write!(f, "duplicate seed task id: {task_id}"),
            Self::UnknownOwner { task_id, owner_id } => write!(
                f,
                "seed task {task_id} references unknown owner `{owner_id}`"
            ),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Users and optional pre-existing tasks loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    pub users: Vec<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl SeedData {
    /// Parses and checks a seed document.
    ///
    /// Expected shape: `{ "users": [...], "tasks": [...] }`, `tasks` optional.
    pub fn parse(json: &str) -> Result<Self, SeedError> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.check()?;
        Ok(seed)
    }

    /// Splits seed data into the stores the board owns.
    pub fn into_parts(self) -> (UserDirectory, InMemoryTaskStore) {
        (
            UserDirectory::new(self.users),
            InMemoryTaskStore::with_tasks(self.tasks),
        )
    }

    fn check(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for user in &self.users {
            if !seen.insert(user.id.as_str()) {
                return Err(SeedError::DuplicateUser(user.id.clone()));
            }
        }
        let mut task_ids = HashSet::new();
        for task in &self.tasks {
            if !task_ids.insert(task.id) {
                return Err(SeedError::DuplicateTask(task.id));
            }
            if !seen.contains(task.owner_id.as_str()) {
                return Err(SeedError::UnknownOwner {
                    task_id: task.id,
                    owner_id: task.owner_id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Built-in demo users with no tasks.
pub fn builtin_seed() -> SeedData {
    SeedData {
        users: vec![
            User::new("u1", "Jasmine Washington", "user-1.jpg"),
            User::new("u2", "Emily Thompson", "user-2.jpg"),
            User::new("u3", "Marcus Johnson", "user-3.jpg"),
            User::new("u4", "David Miller", "user-4.jpg"),
            User::new("u5", "Priya Patel", "user-5.jpg"),
            User::new("u6", "Arjun Singh", "user-6.jpg"),
        ],
        tasks: Vec::new(),
    }
}
