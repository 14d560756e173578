use crate::{
    domain::task::{ColumnId, Task, TaskId},
    error::{KanbanError, Result},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presentation attributes handed to the renderer for a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStyle {
    pub color: String,
    pub gradient_from: String,
    pub gradient_to: String,
    pub task_bg: String,
    pub icon_color: String,
}

impl ColumnStyle {
    fn palette(hue: &str) -> Self {
        Self {
            color: format!("bg-{hue}-200"),
            gradient_from: format!("from-{hue}-50"),
            gradient_to: format!("to-{hue}-100"),
            task_bg: "bg-white".to_string(),
            icon_color: format!("text-{hue}-500"),
        }
    }
}

/// Configuration for a kanban board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub style: ColumnStyle,
}

impl Column {
    pub fn new(id: ColumnId, style: ColumnStyle) -> Self {
        Self {
            id,
            title: id.to_string(),
            style,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Kanban Board".to_string(),
            columns: vec![
                Column::new(ColumnId::Todo, ColumnStyle::palette("purple")),
                Column::new(ColumnId::InProgress, ColumnStyle::palette("blue")),
                Column::new(ColumnId::Complete, ColumnStyle::palette("emerald")),
            ],
        }
    }
}

impl BoardConfig {
    /// Checks that the board has exactly the three status columns, in order
    pub fn validate(&self) -> Result<()> {
        let ids: Vec<ColumnId> = self.columns.iter().map(|col| col.id).collect();
        if ids != ColumnId::ALL {
            return Err(KanbanError::InvalidConfig(format!(
                "expected columns {:?}, found {:?}",
                ColumnId::ALL,
                ids
            )));
        }

        if let Some(col) = self.columns.iter().find(|col| col.title.trim().is_empty()) {
            return Err(KanbanError::InvalidConfig(format!(
                "column {} has a blank title",
                col.id.as_str()
            )));
        }

        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }
}

/// The tasks a fresh board starts with
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(TaskId::from("1"), "Design UI".to_string()),
        Task::new(TaskId::from("2"), "Implement API".to_string()).in_column(ColumnId::InProgress),
        Task::new(TaskId::from("3"), "Write tests".to_string()).in_column(ColumnId::Complete),
    ]
}

/// Board configuration and task list captured at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub config: BoardConfig,
    pub tasks: Vec<Task>,
    pub saved_at: DateTime<Utc>,
}

impl BoardSnapshot {
    pub fn new(config: BoardConfig, tasks: Vec<Task>) -> Self {
        Self {
            config,
            tasks,
            saved_at: Utc::now(),
        }
    }
}
