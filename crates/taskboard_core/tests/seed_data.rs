use taskboard_core::{builtin_seed, BoardConfig, BoardService, SeedData, SeedError, Task};

#[test]
fn parses_users_and_tasks() {
    let json = r#"{
        "users": [
            { "id": "u1", "name": "Ada", "avatar": "user-1.jpg" },
            { "id": "u2", "name": "Brook", "avatar": "user-2.jpg" }
        ],
        "tasks": [
            {
                "id": "11111111-2222-4333-8444-555555555555",
                "owner_id": "u2",
                "title": "Review",
                "summary": "Read the draft",
                "due_date": "2025-12-31"
            }
        ]
    }"#;

    let seed = SeedData::parse(json).unwrap();
    assert_eq!(seed.users.len(), 2);
    assert_eq!(seed.tasks[0].owner_id, "u2");

    let board = BoardService::from_seed(seed, &BoardConfig::default());
    let tasks = board.visible_tasks("u2");
    assert_eq!(tasks.len(), 1);
    assert_eq!(
        tasks[0].id.to_string(),
        "11111111-2222-4333-8444-555555555555"
    );
}

#[test]
fn tasks_section_is_optional() {
    let seed = SeedData::parse(r#"{ "users": [] }"#).unwrap();
    assert!(seed.users.is_empty());
    assert!(seed.tasks.is_empty());
}

#[test]
fn rejects_duplicate_user_ids() {
    let json = r#"{ "users": [
        { "id": "u1", "name": "Ada", "avatar": "a.jpg" },
        { "id": "u1", "name": "Ada again", "avatar": "b.jpg" }
    ] }"#;

    let err = SeedData::parse(json).unwrap_err();
    assert!(matches!(err, SeedError::DuplicateUser(ref id) if id == "u1"));
}

#[test]
fn rejects_duplicate_task_ids() {
    let json = r#"{
        "users": [{ "id": "u1", "name": "Ada", "avatar": "a.jpg" }],
        "tasks": [
            { "id": "11111111-2222-4333-8444-555555555555", "owner_id": "u1", "title": "one" },
            { "id": "11111111-2222-4333-8444-555555555555", "owner_id": "u1", "title": "two" }
        ]
    }"#;

    let err = SeedData::parse(json).unwrap_err();
    assert!(
        matches!(err, SeedError::DuplicateTask(id) if id.to_string() == "11111111-2222-4333-8444-555555555555"),
        "{err}"
    );
}

#[test]
fn rejects_tasks_with_unknown_owner() {
    let json = r#"{
        "users": [{ "id": "u1", "name": "Ada", "avatar": "a.jpg" }],
        "tasks": [{
            "id": "11111111-2222-4333-8444-555555555555",
            "owner_id": "u7",
            "title": "orphan"
        }]
    }"#;

    let err = SeedData::parse(json).unwrap_err();
    assert!(err.to_string().contains("unknown owner `u7`"), "{err}");
}

#[test]
fn rejects_malformed_json_and_nil_task_ids() {
    assert!(matches!(
        SeedData::parse("{ not json").unwrap_err(),
        SeedError::Parse(_)
    ));

    let nil_task = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "owner_id": "u1",
        "title": "nil"
    });
    let err = serde_json::from_value::<Task>(nil_task).unwrap_err();
    assert!(err.to_string().contains("nil uuid"), "{err}");
}

#[test]
fn task_serializes_with_snake_case_fields() {
    let mut board = BoardService::from_seed(builtin_seed(), &BoardConfig::default());
    board.select_user("u3");
    board.open_new_task().unwrap();
    let task = board.submit_new_task("Ship", "Release", "2026-01-15").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task.id.to_string());
    assert_eq!(json["owner_id"], "u3");
    assert_eq!(json["due_date"], "2026-01-15");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
