// Data models for the to-do list

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier assigned to a task when it is created.
///
/// Rows on screen are addressed by position, but positions go stale as soon
/// as the list mutates. Mutations that must hit "the task the user meant"
/// address it by `TaskId` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        TaskId(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Compared case-sensitively for sort, case-insensitively for search
    pub title: String,
    /// Free text. Sorting compares this lexically; no calendar parsing.
    pub due_date: String,
    /// Free-text description, included in search matching
    pub sub_tasks: String,
    pub is_favourite: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Task {
    /// Create an unstarred task with a fresh id and current timestamps
    pub fn new(
        title: impl Into<String>,
        due_date: impl Into<String>,
        sub_tasks: impl Into<String>,
    ) -> Self {
        let now = now_ms();
        Task {
            id: TaskId::new(),
            title: title.into(),
            due_date: due_date.into(),
            sub_tasks: sub_tasks.into(),
            is_favourite: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms() {
        let ts = now_ms();
        assert!(ts > 0);
        // Should be reasonable timestamp (after year 2020)
        assert!(ts > 1_600_000_000_000);
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk", "2024-01-05", "2% from the corner shop");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.due_date, "2024-01-05");
        assert_eq!(task.sub_tasks, "2% from the corner shop");
        assert!(!task.is_favourite);
        assert!(task.created_at > 0);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("a", "", "");
        let b = Task::new("b", "", "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new("Call bank", "2024-01-01", "ask about the fee");
        let json = serde_json::to_string(&task).unwrap();
        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, task.id);
        assert_eq!(deserialized.title, task.title);
        assert_eq!(deserialized.due_date, task.due_date);
        assert_eq!(deserialized.is_favourite, task.is_favourite);
    }
}
