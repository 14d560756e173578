use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::KanbanError;

/// Opaque identifier for a task (e.g., "1", "2", "42")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new TaskId from a counter
    pub fn new(counter: u64) -> Self {
        Self(counter.to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status column a task occupies, ordered left to right on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnId {
    Todo,
    InProgress,
    Complete,
}

impl ColumnId {
    /// All columns in board order
    pub const ALL: [ColumnId; 3] = [Self::Todo, Self::InProgress, Self::Complete];

    /// Wire form used for drop target ids and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Complete => "COMPLETE",
        }
    }

    /// Position of the column on the board, starting at 0
    pub fn index(&self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Complete => 2,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "To Do"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

impl FromStr for ColumnId {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");

        match normalized.as_str() {
            "TODO" | "TO_DO" => Ok(Self::Todo),
            "IN_PROGRESS" | "INPROGRESS" => Ok(Self::InProgress),
            "COMPLETE" => Ok(Self::Complete),
            _ => Err(KanbanError::InvalidColumn(s.to_string())),
        }
    }
}

/// Returns true when a title has no visible characters
pub fn is_blank_title(title: &str) -> bool {
    title.trim().is_empty()
}

/// A task on the kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub column: ColumnId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the TODO column
    pub fn new(id: TaskId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            column: ColumnId::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Places the task in a column at construction time
    pub fn in_column(mut self, column: ColumnId) -> Self {
        self.column = column;
        self
    }

    /// Sets the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Moves the task to another column. Returns false if it was already there.
    pub fn set_column(&mut self, column: ColumnId) -> bool {
        if self.column == column {
            return false;
        }
        self.column = column;
        self.updated_at = Utc::now();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_creation() {
        assert_eq!(TaskId::new(1).as_str(), "1");
        assert_eq!(TaskId::new(1000).as_str(), "1000");
        assert_eq!(TaskId::from("abc"), TaskId::from("abc".to_string()));
    }

    #[test]
    fn test_column_parsing() {
        assert_eq!(ColumnId::from_str("TODO").unwrap(), ColumnId::Todo);
        assert_eq!(ColumnId::from_str("in_progress").unwrap(), ColumnId::InProgress);
        assert_eq!(ColumnId::from_str("In Progress").unwrap(), ColumnId::InProgress);
        assert_eq!(ColumnId::from_str("complete").unwrap(), ColumnId::Complete);

        assert!(ColumnId::from_str("DONE").is_err());
        assert!(ColumnId::from_str("").is_err());
        assert!(ColumnId::from_str("7").is_err());
    }

    #[test]
    fn test_column_wire_form_round_trips_through_from_str() {
        for column in ColumnId::ALL {
            assert_eq!(ColumnId::from_str(column.as_str()).unwrap(), column);
        }
    }

    #[test]
    fn test_column_order() {
        assert!(ColumnId::Todo < ColumnId::InProgress);
        assert!(ColumnId::InProgress < ColumnId::Complete);
        assert_eq!(ColumnId::Complete.index(), 2);
    }

    #[test]
    fn test_column_serialization() {
        let json = serde_json::to_string(&ColumnId::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }

    #[test]
    fn test_blank_titles() {
        assert!(is_blank_title(""));
        assert!(is_blank_title("   "));
        assert!(is_blank_title("\t\n"));
        assert!(!is_blank_title(" a "));
    }

    #[test]
    fn test_new_task_starts_in_todo() {
        let task = Task::new(TaskId::new(1), "Test".to_string());
        assert_eq!(task.column, ColumnId::Todo);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_set_column_same_column_is_noop() {
        let mut task = Task::new(TaskId::new(1), "Test".to_string());
        let updated_at = task.updated_at;

        assert!(!task.set_column(ColumnId::Todo));
        assert_eq!(task.updated_at, updated_at);

        assert!(task.set_column(ColumnId::Complete));
        assert_eq!(task.column, ColumnId::Complete);
    }

    #[test]
    fn test_set_title_updates_updated_at() {
        let mut task = Task::new(TaskId::new(1), "Test".to_string());
        let initial_updated_at = task.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        task.set_title("New Title".to_string());

        assert_eq!(task.title, "New Title");
        assert!(task.updated_at > initial_updated_at);
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new(TaskId::new(7), "Test".to_string()).in_column(ColumnId::Complete);
        let json = serde_json::to_string(&task).unwrap();

        assert!(json.contains("\"id\":\"7\""));
        assert!(json.contains("\"column\":\"COMPLETE\""));

        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }
}
