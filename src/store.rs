use crate::{
    domain::{
        board::sample_tasks,
        statistics::{project, Statistics},
        task::{is_blank_title, ColumnId, Task, TaskId},
    },
    error::{KanbanError, Result},
};
use std::{collections::HashSet, sync::Arc};

/// Owns the task list of a single board.
///
/// Readers get [`Arc`] snapshots that are never modified once published;
/// a mutation copies the list if a snapshot is still held elsewhere.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Arc<Vec<Task>>,
    next_task_number: u64,
    revision: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::from_parts(Vec::new())
    }

    /// Creates a store holding the sample board
    pub fn with_sample_tasks() -> Self {
        Self::from_parts(sample_tasks())
    }

    /// Restores a store from a previously taken list of tasks
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(&task.id) {
                return Err(KanbanError::DuplicateTaskId(task.id.to_string()));
            }
            if is_blank_title(&task.title) {
                return Err(KanbanError::BlankTitle);
            }
        }

        Ok(Self::from_parts(tasks))
    }

    fn from_parts(tasks: Vec<Task>) -> Self {
        // Numeric ids continue from the highest one seen; others are opaque.
        let highest = tasks
            .iter()
            .filter_map(|t| t.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            tasks: Arc::new(tasks),
            next_task_number: highest.checked_add(1).unwrap_or(1),
            revision: 0,
        }
    }

    /// Current tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Shared handle to the current list; unaffected by later mutations
    pub fn snapshot(&self) -> Arc<Vec<Task>> {
        Arc::clone(&self.tasks)
    }

    /// Number of effective mutations since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Tasks in a column, in insertion order
    pub fn tasks_in(&self, column: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column == column)
    }

    /// Statistics projected from the current list
    pub fn statistics(&self) -> Statistics {
        project(&self.tasks)
    }

    /// Adds a task to the TODO column.
    ///
    /// The title must not be blank; a blank title is a caller error and is
    /// ignored, returning `None`.
    pub fn add(&mut self, title: impl Into<String>) -> Option<TaskId> {
        let title = title.into();
        if is_blank_title(&title) {
            return None;
        }

        let id = self.next_task_id();
        log::debug!("Adding task {} ({:?})", id, title);

        self.publish(|tasks| tasks.push(Task::new(id.clone(), title)));
        Some(id)
    }

    /// Replaces the title of a task. Unknown ids and blank titles are ignored.
    pub fn edit(&mut self, id: &TaskId, title: impl Into<String>) -> bool {
        let title = title.into();
        let Some(pos) = self.position(id) else {
            return false;
        };
        if is_blank_title(&title) {
            return false;
        }

        log::debug!("Editing task {}", id);
        self.publish(|tasks| tasks[pos].set_title(title));
        true
    }

    /// Removes a task. Unknown ids are ignored.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };

        log::debug!("Deleting task {}", id);
        self.publish(|tasks| {
            tasks.remove(pos);
        });
        true
    }

    /// Moves a task to another column, keeping its position in the list.
    ///
    /// Returns false when the id is unknown or the task is already in
    /// `column`; neither case touches the list.
    pub fn move_task(&mut self, id: &TaskId, column: ColumnId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        if self.tasks[pos].column == column {
            return false;
        }

        log::debug!(
            "Moving task {} from {} to {}",
            id,
            self.tasks[pos].column.as_str(),
            column.as_str()
        );
        self.publish(|tasks| {
            tasks[pos].set_column(column);
        });
        true
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Generates the next task ID not held by a live task.
    ///
    /// The counter restarts at 1 once it runs past `u64::MAX`.
    fn next_task_id(&mut self) -> TaskId {
        loop {
            let id = TaskId::new(self.next_task_number);
            self.next_task_number = self.next_task_number.checked_add(1).unwrap_or(1);
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn publish(&mut self, mutate: impl FnOnce(&mut Vec<Task>)) {
        mutate(Arc::make_mut(&mut self.tasks));
        self.revision += 1;
    }
}
