//! Task store contract and in-memory implementation.
//!
//! # Responsibility
//! - Append new tasks with generated ids.
//! - Answer filter-by-owner queries in insertion order.
//!
//! # Invariants
//! - `add_task` always succeeds; callers validate before adding.
//! - `tasks_for_owner` never errors; no match yields an empty vec.

use crate::model::task::{NewTask, Task};
use log::debug;

/// Storage interface for board tasks.
pub trait TaskStore {
    /// Stores a candidate under a fresh id and returns the stored record.
    fn add_task(&mut self, candidate: NewTask) -> Task;
    /// Returns tasks owned by `owner_id` in insertion order.
    fn tasks_for_owner(&self, owner_id: &str) -> Vec<Task>;
    /// Returns every stored task in insertion order.
    fn all_tasks(&self) -> Vec<Task>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with seed tasks, keeping their ids.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl TaskStore for InMemoryTaskStore {
    fn add_task(&mut self, candidate: NewTask) -> Task {
        let task = Task::from_candidate(candidate);
        self.tasks.push(task.clone());
        debug!(
            "event=task_created module=store status=ok task_id={} owner_id={} total={}",
            task.id,
            task.owner_id,
            self.tasks.len()
        );
        task
    }

    fn tasks_for_owner(&self, owner_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.is_owned_by(owner_id))
            .cloned()
            .collect()
    }

    fn all_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
