use crate::{
    domain::BoardSnapshot,
    error::{KanbanError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const KANBAN_DIR: &'static str = ".kanban";
    const BOARD_FILE: &'static str = "board.json";
    const BOARD_TMP_FILE: &'static str = "board.json.tmp";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::KANBAN_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    fn board_tmp_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_TMP_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await
    }

    async fn save_snapshot(&self, snapshot: &BoardSnapshot) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(snapshot)?;

        // Readers only ever see a complete file.
        fs::write(self.board_tmp_file(), json).await?;
        fs::rename(self.board_tmp_file(), self.board_file()).await?;

        log::debug!(
            "Saved {} tasks to {}",
            snapshot.tasks.len(),
            self.board_file().display()
        );
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<BoardSnapshot> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Err(KanbanError::BoardNotInitialized);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let snapshot: BoardSnapshot = serde_json::from_str(&contents)?;

        Ok(snapshot)
    }

    async fn delete_snapshot(&self) -> Result<()> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Err(KanbanError::BoardNotInitialized);
        }

        fs::remove_file(board_file).await?;
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.board_file().exists()
    }
}
