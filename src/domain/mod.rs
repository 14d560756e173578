pub mod board;
pub mod statistics;
pub mod task;

pub use board::{sample_tasks, BoardConfig, BoardSnapshot, Column, ColumnStyle};
pub use statistics::{format_percent, project, Statistics};
pub use task::{ColumnId, Task, TaskId};
