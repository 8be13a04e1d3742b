//! Task list view model.

use crate::model::task::Task;
use crate::store::task_store::TaskStore;
use crate::view::creation::{CreationEvent, CreationEventSink};

/// Parent view of the creation flow.
///
/// Holds only the panel flag; the visible list is derived from the store on
/// every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListView {
    creation_panel_open: bool,
}

impl TaskListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tasks of `owner_id` as currently stored.
    pub fn visible_tasks<S: TaskStore + ?Sized>(&self, store: &S, owner_id: &str) -> Vec<Task> {
        store.tasks_for_owner(owner_id)
    }

    pub fn set_creation_panel_open(&mut self, open: bool) {
        self.creation_panel_open = open;
    }

    pub fn is_creation_panel_open(&self) -> bool {
        self.creation_panel_open
    }
}

impl CreationEventSink for TaskListView {
    fn emit(&mut self, event: CreationEvent) {
        if let CreationEvent::CloseRequested = event {
            self.set_creation_panel_open(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskListView;
    use crate::model::task::NewTask;
    use crate::store::task_store::{InMemoryTaskStore, TaskStore};
    use crate::view::creation::{CreationEvent, CreationEventSink};

    #[test]
    fn visible_tasks_reflects_later_store_writes() {
        let mut store = InMemoryTaskStore::new();
        let view = TaskListView::new();
        assert!(view.visible_tasks(&store, "u1").is_empty());

        let task = store.add_task(NewTask {
            owner_id: "u1".to_string(),
            title: "A".to_string(),
            ..NewTask::default()
        });
        assert_eq!(view.visible_tasks(&store, "u1"), vec![task]);
    }

    #[test]
    fn close_request_closes_panel() {
        let mut view = TaskListView::new();
        view.set_creation_panel_open(true);
        assert!(view.is_creation_panel_open());

        view.emit(CreationEvent::CloseRequested);
        assert!(!view.is_creation_panel_open());
    }
}
