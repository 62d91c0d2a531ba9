//! Day 29 project: a to-do list with JSON persistence.
//!
//! The task file is a plain JSON array so it stays readable and
//! hand-editable. A missing file means an empty list; a file that
//! exists but fails to parse is reported instead of being wiped on
//! the next save.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ports::Storage;
use crate::utils::error::{Result, RoadmapError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Uppercase form used in the list view.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(RoadmapError::InvalidConfigValue {
                field: "priority".to_string(),
                value: other.to_string(),
                reason: "expected high, medium or low".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Outcome of marking a task as done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Marked,
    AlreadyDone,
}

/// An ordered list of tasks. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    // Ids of removed tasks are never reused for as long as a higher
    // id remains in the list.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    /// Adds a task and returns its id. The description is trimmed and
    /// must not be empty.
    pub fn add(&mut self, description: &str, priority: Priority) -> Result<u64> {
        let description = description.trim();
        if description.is_empty() {
            return Err(RoadmapError::EmptyDescription);
        }

        let id = self.next_id();
        self.tasks.push(Task {
            id,
            description: description.to_string(),
            completed: false,
            priority,
            created_at: Utc::now(),
            completed_at: None,
        });
        Ok(id)
    }

    /// Marks a task as completed. Completing a task twice is reported,
    /// not an error.
    pub fn complete(&mut self, id: u64) -> Result<Completion> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(RoadmapError::TaskNotFound(id))?;

        if task.completed {
            return Ok(Completion::AlreadyDone);
        }
        task.completed = true;
        task.completed_at = Some(Utc::now());
        Ok(Completion::Marked)
    }

    /// Removes a task and returns it.
    pub fn remove(&mut self, id: u64) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(RoadmapError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskStats {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// Renders the list view: ✓ for completed tasks, ○ for pending ones.
    pub fn render(&self, show_completed: bool) -> String {
        if self.tasks.is_empty() {
            return "No tasks found!\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!("{}\n", "=".repeat(60)));
        out.push_str("YOUR TO-DO LIST\n");
        out.push_str(&format!("{}\n", "=".repeat(60)));

        for task in &self.tasks {
            if !show_completed && task.completed {
                continue;
            }

            let status = if task.completed { "✓" } else { "○" };
            out.push_str(&format!("{} [{}] {}\n", status, task.id, task.description));
            out.push_str(&format!(
                "    Priority: {} | Created: {}\n",
                task.priority.label(),
                task.created_at.format("%Y-%m-%d")
            ));
            if let Some(completed_at) = task.completed_at.filter(|_| task.completed) {
                out.push_str(&format!(
                    "    Completed: {}\n",
                    completed_at.format("%Y-%m-%d")
                ));
            }
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    /// Percentage of completed tasks; `None` for an empty list.
    pub fn completion_rate(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.completed as f64 / self.total as f64 * 100.0)
    }
}

impl fmt::Display for TaskStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== TASK STATISTICS ===")?;
        writeln!(f, "Total tasks: {}", self.total)?;
        writeln!(f, "Completed: {}", self.completed)?;
        writeln!(f, "Pending: {}", self.pending)?;
        if let Some(rate) = self.completion_rate() {
            writeln!(f, "Completion rate: {:.1}%", rate)?;
        }
        Ok(())
    }
}

/// Loads and saves a [`TaskList`] through a storage backend.
pub struct TodoStore<S> {
    storage: S,
}

impl<S: Storage> TodoStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads the task file. A missing file yields an empty list; a
    /// present but malformed file is an error.
    pub async fn load(&self, path: &str) -> Result<TaskList> {
        match self.storage.read_file(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(RoadmapError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(TaskList::default())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn save(&self, path: &str, tasks: &TaskList) -> Result<()> {
        let json = serde_json::to_vec_pretty(tasks)?;
        self.storage.write_file(path, &json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn add_assigns_sequential_ids() {
        let mut list = TaskList::new();
        let first = list.add("Buy milk", Priority::High).unwrap();
        let second = list.add("Call mom", Priority::Low).unwrap();
        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn add_rejects_blank_descriptions() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.add("   ", Priority::Medium),
            Err(RoadmapError::EmptyDescription)
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut list = TaskList::new();
        list.add("one", Priority::Medium).unwrap();
        list.add("two", Priority::Medium).unwrap();
        list.remove(1).unwrap();
        let id = list.add("three", Priority::Medium).unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn complete_is_idempotent_but_reported() {
        let mut list = TaskList::new();
        list.add("ship it", Priority::High).unwrap();
        assert_eq!(list.complete(1).unwrap(), Completion::Marked);
        assert_eq!(list.complete(1).unwrap(), Completion::AlreadyDone);
        assert!(list.get(1).unwrap().completed_at.is_some());
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.complete(7),
            Err(RoadmapError::TaskNotFound(7))
        ));
        assert!(matches!(list.remove(7), Err(RoadmapError::TaskNotFound(7))));
    }

    #[test]
    fn stats_track_completion_rate() {
        let mut list = TaskList::new();
        assert_eq!(list.stats().completion_rate(), None);

        list.add("a", Priority::Medium).unwrap();
        list.add("b", Priority::Medium).unwrap();
        list.add("c", Priority::Medium).unwrap();
        list.complete(1).unwrap();

        let stats = list.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        let rate = stats.completion_rate().unwrap();
        assert!((rate - 33.333).abs() < 0.01);
        assert!(stats.to_string().contains("Completion rate: 33.3%"));
    }

    #[test]
    fn render_marks_status_and_hides_completed_on_request() {
        let mut list = TaskList::new();
        list.add("pending task", Priority::High).unwrap();
        list.add("done task", Priority::Low).unwrap();
        list.complete(2).unwrap();

        let all = list.render(true);
        assert!(all.contains("○ [1] pending task"));
        assert!(all.contains("✓ [2] done task"));
        assert!(all.contains("Priority: HIGH"));

        let pending = list.render(false);
        assert!(pending.contains("pending task"));
        assert!(!pending.contains("done task"));
    }

    #[test]
    fn render_empty_list() {
        assert_eq!(TaskList::new().render(true), "No tasks found!\n");
    }

    #[tokio::test]
    async fn store_saves_and_reloads_tasks() {
        let dir = TempDir::new().unwrap();
        let store = TodoStore::new(LocalStorage::new(dir.path()));

        let mut list = TaskList::new();
        list.add("persist me", Priority::High).unwrap();
        store.save("todos.json", &list).await.unwrap();

        let reloaded = store.load("todos.json").await.unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.tasks()[0].description, "persist me");
        assert_eq!(reloaded.tasks()[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn store_treats_missing_file_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = TodoStore::new(LocalStorage::new(dir.path()));
        let list = store.load("todos.json").await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn store_reports_corrupt_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("todos.json"), b"{ not json").unwrap();
        let store = TodoStore::new(LocalStorage::new(dir.path()));
        assert!(matches!(
            store.load("todos.json").await,
            Err(RoadmapError::Json(_))
        ));
    }

    #[test]
    fn tasks_serialize_as_a_bare_array() {
        let mut list = TaskList::new();
        list.add("check the wire format", Priority::Medium).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"priority\":\"medium\""));
    }
}
