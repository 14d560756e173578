use crate::{
    domain::{
        board::{BoardConfig, BoardSnapshot, Column},
        statistics::Statistics,
        task::{ColumnId, Task, TaskId},
    },
    drag::{DragController, DragHandler, DropOutcome},
    error::Result,
    store::TaskStore,
};

/// One column ready for rendering
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub tasks: Vec<&'a Task>,
    /// True while a drag hovers this column
    pub is_hovered: bool,
}

impl ColumnView<'_> {
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// A kanban board: configuration, tasks, and the drag in progress
#[derive(Debug, Clone)]
pub struct Kanban {
    config: BoardConfig,
    store: TaskStore,
    drag: DragController,
}

impl Default for Kanban {
    /// The sample board with the default columns
    fn default() -> Self {
        Self::new(TaskStore::with_sample_tasks())
    }
}

impl Kanban {
    /// Creates a board over `store` with the default columns
    pub fn new(store: TaskStore) -> Self {
        Self {
            config: BoardConfig::default(),
            store,
            drag: DragController::new(),
        }
    }

    /// Creates a board with a custom column configuration
    pub fn with_config(config: BoardConfig, store: TaskStore) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            drag: DragController::new(),
        })
    }

    /// Restores a board from a saved snapshot
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self> {
        let store = TaskStore::from_tasks(snapshot.tasks)?;
        Self::with_config(snapshot.config, store)
    }

    /// Captures the configuration and current task list
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.config.clone(), self.store.tasks().to_vec())
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn statistics(&self) -> Statistics {
        self.store.statistics()
    }

    pub fn hovered_column(&self) -> Option<ColumnId> {
        self.drag.hovered_column()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Columns left to right, each with its tasks
    pub fn columns(&self) -> Vec<ColumnView<'_>> {
        let hovered = self.hovered_column();
        self.config
            .columns
            .iter()
            .map(|column| ColumnView {
                column,
                tasks: self.store.tasks_in(column.id).collect(),
                is_hovered: hovered == Some(column.id),
            })
            .collect()
    }

    /// Adds a task to the TODO column. Blank titles are ignored.
    pub fn add_task(&mut self, title: impl Into<String>) -> Option<TaskId> {
        self.store.add(title)
    }

    pub fn edit_task(&mut self, id: &TaskId, title: impl Into<String>) -> bool {
        self.store.edit(id, title)
    }

    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        self.store.delete(id)
    }

    /// Drops any drag in flight, e.g. when the board loses focus
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.cancel()
    }
}

impl DragHandler for Kanban {
    fn on_drag_start(&mut self, active: &TaskId) {
        self.drag.on_drag_start(active);
    }

    fn on_drag_over(&mut self, active: &TaskId, over_id: Option<&str>) -> bool {
        self.drag.on_drag_over(active, over_id)
    }

    fn on_drag_end(&mut self, active: &TaskId, over_id: Option<&str>) -> DropOutcome {
        self.drag.on_drag_end(&mut self.store, active, over_id)
    }
}
