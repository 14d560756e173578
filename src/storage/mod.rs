use crate::{domain::BoardSnapshot, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;

/// Storage trait for persisting board snapshots
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Saves a snapshot, replacing any previous one
    async fn save_snapshot(&self, snapshot: &BoardSnapshot) -> Result<()>;

    /// Loads the last saved snapshot
    async fn load_snapshot(&self) -> Result<BoardSnapshot>;

    /// Deletes the saved snapshot
    async fn delete_snapshot(&self) -> Result<()>;

    /// Checks if a snapshot has been saved
    async fn is_initialized(&self) -> bool;
}
