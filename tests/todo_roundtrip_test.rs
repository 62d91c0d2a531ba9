use rust_roadmap::projects::todo::{Completion, Priority, TodoStore};
use rust_roadmap::{LocalStorage, RoadmapError};
use tempfile::TempDir;

#[tokio::test]
async fn test_tasks_survive_a_save_and_load_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let store = TodoStore::new(LocalStorage::new(temp_dir.path()));

    // A missing file means an empty list, not an error
    let mut tasks = store.load("todos.json").await.unwrap();
    assert!(tasks.is_empty());

    tasks.add("Buy groceries", Priority::High).unwrap();
    tasks
        .add("Read the ownership chapter", Priority::Medium)
        .unwrap();
    store.save("todos.json", &tasks).await.unwrap();

    let mut reloaded = store.load("todos.json").await.unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.complete(1).unwrap(), Completion::Marked);
    store.save("todos.json", &reloaded).await.unwrap();

    let final_state = store.load("todos.json").await.unwrap();
    let done = final_state.get(1).unwrap();
    assert!(done.completed);
    assert!(done.completed_at.is_some());
    assert_eq!(done.priority, Priority::High);
    assert!(!final_state.get(2).unwrap().completed);

    let stats = final_state.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 1);
}

#[tokio::test]
async fn test_task_file_is_a_bare_json_array() {
    let temp_dir = TempDir::new().unwrap();
    let store = TodoStore::new(LocalStorage::new(temp_dir.path()));

    let mut tasks = store.load("todos.json").await.unwrap();
    tasks.add("Practice pattern matching", Priority::Low).unwrap();
    store.save("todos.json", &tasks).await.unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("todos.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let entries = parsed.as_array().expect("file should hold a JSON array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], 1);
    assert_eq!(entries[0]["description"], "Practice pattern matching");
    assert_eq!(entries[0]["priority"], "low");
    assert_eq!(entries[0]["completed"], false);
}

#[tokio::test]
async fn test_corrupt_task_file_is_an_error_not_a_reset() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("todos.json"), "{ not json").unwrap();

    let store = TodoStore::new(LocalStorage::new(temp_dir.path()));
    let result = store.load("todos.json").await;

    assert!(matches!(result, Err(RoadmapError::Json(_))));
}

#[tokio::test]
async fn test_ids_stay_unique_across_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let store = TodoStore::new(LocalStorage::new(temp_dir.path()));

    let mut tasks = store.load("todos.json").await.unwrap();
    tasks.add("First", Priority::Medium).unwrap();
    tasks.add("Second", Priority::Medium).unwrap();
    tasks.remove(1).unwrap();
    store.save("todos.json", &tasks).await.unwrap();

    // A later session must not hand out an id that collides with "Second"
    let mut next_session = store.load("todos.json").await.unwrap();
    let id = next_session.add("Third", Priority::Medium).unwrap();
    assert_eq!(id, 3);
    assert!(next_session.get(2).is_some());
}
