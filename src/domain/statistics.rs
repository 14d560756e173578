//! Aggregate counts projected from the task list.

use crate::domain::task::{ColumnId, Task};
use serde::{Deserialize, Serialize};

/// Per-column counts and the weighted completion rate of a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub todo: usize,
    pub in_progress: usize,
    pub complete: usize,
    pub total: usize,
    /// `(complete + in_progress) / total * 100`, or 0 on an empty board
    pub completion_rate: f64,
}

impl Statistics {
    /// Number of tasks in a column
    pub fn count(&self, column: ColumnId) -> usize {
        match column {
            ColumnId::Todo => self.todo,
            ColumnId::InProgress => self.in_progress,
            ColumnId::Complete => self.complete,
        }
    }

    /// Percentage of all tasks sitting in a column
    pub fn share(&self, column: ColumnId) -> f64 {
        percentage(self.count(column), self.total)
    }

    /// Completion rate rounded to one decimal place
    pub fn completion_rate_rounded(&self) -> f64 {
        (self.completion_rate * 10.0).round() / 10.0
    }
}

/// Projects statistics from the current task list
///
/// # Examples
/// ```
/// use kanban_core::domain::{board::sample_tasks, statistics::project};
///
/// let stats = project(&sample_tasks());
/// assert_eq!(stats.total, 3);
/// assert_eq!(stats.completion_rate_rounded(), 66.7);
/// ```
pub fn project(tasks: &[Task]) -> Statistics {
    let mut stats = Statistics {
        total: tasks.len(),
        ..Statistics::default()
    };

    for task in tasks {
        match task.column {
            ColumnId::Todo => stats.todo += 1,
            ColumnId::InProgress => stats.in_progress += 1,
            ColumnId::Complete => stats.complete += 1,
        }
    }

    stats.completion_rate = percentage(stats.complete + stats.in_progress, stats.total);
    stats
}

/// Formats a percentage the way the stats panel labels it, e.g. "66.7%"
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64) / (total as f64) * 100.0
    }
}
