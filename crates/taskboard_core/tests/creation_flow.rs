use taskboard_core::{
    CreationError, CreationEvent, CreationState, InMemoryTaskStore, TaskCreationFlow,
    TaskListView, TaskStore, User, UserDirectory,
};

fn users() -> UserDirectory {
    UserDirectory::new(vec![
        User::new("u1", "Ada", "user-1.jpg"),
        User::new("u2", "Brook", "user-2.jpg"),
    ])
}

#[test]
fn open_then_submit_closes_flow() {
    let mut store = InMemoryTaskStore::new();
    let mut events: Vec<CreationEvent> = Vec::new();
    let mut flow = TaskCreationFlow::new();
    assert_eq!(flow.state(), &CreationState::Closed);

    assert!(flow.open("u1"));
    assert!(matches!(flow.state(), CreationState::Open(_)));

    flow.set_title("A");
    flow.set_summary("S");
    flow.set_due_date("2024-01-01");
    let task = flow.submit(&mut store, &users(), &mut events).unwrap();

    assert_eq!(flow.state(), &CreationState::Closed);
    assert_eq!(task.owner_id, "u1");
    assert_eq!(task.title, "A");
    assert_eq!(task.summary, "S");
    assert_eq!(task.due_date, "2024-01-01");
    assert_eq!(store.tasks_for_owner("u1"), vec![task]);
}

#[test]
fn open_then_cancel_closes_flow_without_store_write() {
    let store = InMemoryTaskStore::new();
    let mut events: Vec<CreationEvent> = Vec::new();
    let mut flow = TaskCreationFlow::new();

    flow.open("u1");
    flow.set_title("discarded");
    flow.cancel(&mut events);

    assert_eq!(flow.state(), &CreationState::Closed);
    assert_eq!(events, vec![CreationEvent::CloseRequested]);
    assert!(store.is_empty());
}

#[test]
fn unknown_owner_is_rejected_with_inline_error() {
    let mut store = InMemoryTaskStore::new();
    let mut events: Vec<CreationEvent> = Vec::new();
    let mut flow = TaskCreationFlow::new();

    flow.open("u9");
    flow.set_title("A");
    let err = flow.submit(&mut store, &users(), &mut events).unwrap_err();

    assert_eq!(err, CreationError::InvalidOwner("u9".to_string()));
    assert_eq!(err.to_string(), "unknown task owner: `u9`");
    assert_eq!(flow.last_error(), Some(&err));
    assert!(flow.is_open());
    assert!(store.is_empty());
    assert!(events.is_empty());
}

#[test]
fn corrected_submit_after_rejection_succeeds() {
    let mut store = InMemoryTaskStore::new();
    let mut events: Vec<CreationEvent> = Vec::new();
    let mut flow = TaskCreationFlow::new();

    flow.open("u1");
    assert!(flow.submit(&mut store, &users(), &mut events).is_err());
    assert_eq!(
        flow.last_error(),
        Some(&CreationError::EmptyRequiredField("title"))
    );

    flow.set_title("A");
    flow.submit(&mut store, &users(), &mut events).unwrap();
    assert!(flow.last_error().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn submit_while_closed_is_rejected() {
    let mut store = InMemoryTaskStore::new();
    let mut events: Vec<CreationEvent> = Vec::new();
    let mut flow = TaskCreationFlow::new();

    let err = flow.submit(&mut store, &users(), &mut events).unwrap_err();
    assert_eq!(err, CreationError::NotOpen);
    assert!(flow.last_error().is_none());
    assert!(store.is_empty());
}

#[test]
fn list_view_parent_closes_panel_on_submit_and_cancel() {
    let mut store = InMemoryTaskStore::new();
    let mut view = TaskListView::new();
    let mut flow = TaskCreationFlow::new();

    view.set_creation_panel_open(true);
    flow.open("u2");
    flow.set_title("B");
    let task = flow.submit(&mut store, &users(), &mut view).unwrap();
    assert!(!view.is_creation_panel_open());
    assert_eq!(view.visible_tasks(&store, "u2"), vec![task]);

    view.set_creation_panel_open(true);
    flow.open("u2");
    flow.cancel(&mut view);
    assert!(!view.is_creation_panel_open());
    assert_eq!(store.len(), 1);
}
