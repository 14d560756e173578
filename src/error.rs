use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Duplicate task ID: {0}")]
    DuplicateTaskId(String),

    #[error("Task title must not be blank")]
    BlankTitle,

    #[error("Invalid board configuration: {0}")]
    InvalidConfig(String),

    #[error("Board not initialized")]
    BoardNotInitialized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
