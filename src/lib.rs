//! # Kanban Core
//!
//! Task state and drag reconciliation for a three-column kanban board.
//!
//! The crate keeps the task list, derives statistics from it, and turns
//! drag gesture phases into moves between columns. Rendering, pointer
//! handling, and persistence policy are left to the caller.

pub mod domain;
pub mod drag;
pub mod error;
pub mod kanban;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{BoardConfig, BoardSnapshot, Column, ColumnStyle},
    statistics::Statistics,
    task::{ColumnId, Task, TaskId},
};
pub use drag::{DragController, DragEvent, DragHandler, DragResponse, DragState, DropOutcome};
pub use error::{KanbanError, Result};
pub use kanban::{ColumnView, Kanban};
pub use storage::Storage;
pub use store::TaskStore;
