//! Reconciles drag gesture phases with the task store.

use crate::{
    domain::task::{ColumnId, TaskId},
    store::TaskStore,
};
use serde::{Deserialize, Serialize};

/// A drag gesture notification, one variant per phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum DragEvent {
    Start {
        active_id: TaskId,
    },
    Over {
        active_id: TaskId,
        over_id: Option<String>,
    },
    End {
        active_id: TaskId,
        over_id: Option<String>,
    },
}

impl DragEvent {
    /// Id of the task being dragged
    pub fn active_id(&self) -> &TaskId {
        match self {
            Self::Start { active_id }
            | Self::Over { active_id, .. }
            | Self::End { active_id, .. } => active_id,
        }
    }
}

/// Resolves a raw drop target id to a column.
///
/// Only the exact column ids (`TODO`, `IN_PROGRESS`, `COMPLETE`) count as
/// columns; any other id, such as a task card's, is no target.
pub fn resolve_target(over_id: Option<&str>) -> Option<ColumnId> {
    let over_id = over_id?;
    ColumnId::ALL.into_iter().find(|c| c.as_str() == over_id)
}

/// Where the controller is within a drag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active: TaskId,
        hovered: Option<ColumnId>,
    },
}

/// Result of a drag end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task was moved into this column
    Moved(ColumnId),
    /// Valid target, but the task was already there or no longer exists
    Unchanged,
    /// Dropped outside every column
    Cancelled,
}

/// What a dispatched event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragResponse {
    Started,
    Hovered { changed: bool },
    Dropped(DropOutcome),
}

/// Receiver of drag gesture phases
pub trait DragHandler {
    fn on_drag_start(&mut self, active: &TaskId);

    /// Returns true when the hovered column changed
    fn on_drag_over(&mut self, active: &TaskId, over_id: Option<&str>) -> bool;

    fn on_drag_end(&mut self, active: &TaskId, over_id: Option<&str>) -> DropOutcome;

    /// Routes an event to the handler for its phase
    fn dispatch(&mut self, event: DragEvent) -> DragResponse {
        match event {
            DragEvent::Start { active_id } => {
                self.on_drag_start(&active_id);
                DragResponse::Started
            }
            DragEvent::Over { active_id, over_id } => DragResponse::Hovered {
                changed: self.on_drag_over(&active_id, over_id.as_deref()),
            },
            DragEvent::End { active_id, over_id } => {
                DragResponse::Dropped(self.on_drag_end(&active_id, over_id.as_deref()))
            }
        }
    }
}

/// Tracks the drag in progress and the column under it
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Task currently being dragged
    pub fn active(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging { active, .. } => Some(active),
            DragState::Idle => None,
        }
    }

    /// Column to highlight as the candidate drop target
    pub fn hovered_column(&self) -> Option<ColumnId> {
        match &self.state {
            DragState::Dragging { hovered, .. } => *hovered,
            DragState::Idle => None,
        }
    }

    /// Begins tracking a drag. A drag still in flight is discarded first.
    pub fn on_drag_start(&mut self, active: &TaskId) {
        if let DragState::Dragging { active: stale, .. } = &self.state {
            log::trace!("Discarding unfinished drag of task {}", stale);
        }
        log::trace!("Drag started for task {}", active);

        self.state = DragState::Dragging {
            active: active.clone(),
            hovered: None,
        };
    }

    /// Records the target under the dragged task.
    ///
    /// An absent or unknown target clears the hovered column. A report for a
    /// drag the controller is not tracking (its start was missed, or it
    /// differs from the tracked one) replaces the tracked drag.
    pub fn on_drag_over(&mut self, active: &TaskId, over_id: Option<&str>) -> bool {
        let target = resolve_target(over_id);
        let previous = self.hovered_column();

        if self.active() != Some(active) {
            log::trace!("Tracking drag of task {} from an over event", active);
            self.state = DragState::Dragging {
                active: active.clone(),
                hovered: target,
            };
            return previous != target;
        }

        if previous == target {
            return false;
        }

        log::trace!(
            "Drag of task {} now over {}",
            active,
            target.map_or("nothing", |c| c.as_str())
        );
        if let DragState::Dragging { hovered, .. } = &mut self.state {
            *hovered = target;
        }
        true
    }

    /// Ends the drag and applies the drop.
    ///
    /// The controller is back to idle before the store is touched. Without a
    /// valid target nothing is moved; with one, the move is issued even when
    /// the task already sits in that column.
    pub fn on_drag_end(
        &mut self,
        store: &mut TaskStore,
        active: &TaskId,
        over_id: Option<&str>,
    ) -> DropOutcome {
        self.state = DragState::Idle;

        let Some(column) = resolve_target(over_id) else {
            log::debug!("Drop of task {} cancelled: no target", active);
            return DropOutcome::Cancelled;
        };

        if store.move_task(active, column) {
            DropOutcome::Moved(column)
        } else {
            DropOutcome::Unchanged
        }
    }

    /// Abandons any drag without a drop. Returns true if one was in flight.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            log::trace!("Drag cancelled");
        }
        self.state = DragState::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Task;

    fn id(s: &str) -> TaskId {
        TaskId::from(s)
    }

    #[test]
    fn test_start_enters_unhovered_drag() {
        let mut drag = DragController::new();
        assert_eq!(drag.state(), &DragState::Idle);

        drag.on_drag_start(&id("1"));

        assert!(drag.is_dragging());
        assert_eq!(drag.active(), Some(&id("1")));
        assert_eq!(drag.hovered_column(), None);
    }

    #[test]
    fn test_over_tracks_hovered_column() {
        let mut drag = DragController::new();
        drag.on_drag_start(&id("1"));

        assert!(drag.on_drag_over(&id("1"), Some("IN_PROGRESS")));
        assert_eq!(drag.hovered_column(), Some(ColumnId::InProgress));

        assert!(drag.on_drag_over(&id("1"), Some("COMPLETE")));
        assert_eq!(drag.hovered_column(), Some(ColumnId::Complete));
    }

    #[test]
    fn test_over_same_column_is_idempotent() {
        let mut drag = DragController::new();
        drag.on_drag_start(&id("1"));

        assert!(drag.on_drag_over(&id("1"), Some("TODO")));
        assert!(!drag.on_drag_over(&id("1"), Some("TODO")));
        assert!(!drag.on_drag_over(&id("1"), Some("TODO")));
        assert_eq!(drag.hovered_column(), Some(ColumnId::Todo));
    }

    #[test]
    fn test_ambiguous_hover_clears_column() {
        let mut drag = DragController::new();
        drag.on_drag_start(&id("1"));
        drag.on_drag_over(&id("1"), Some("IN_PROGRESS"));

        assert!(drag.on_drag_over(&id("1"), None));
        assert_eq!(drag.hovered_column(), None);
        assert!(drag.is_dragging());

        assert!(!drag.on_drag_over(&id("1"), None));
    }

    #[test]
    fn test_unknown_target_clears_column() {
        let mut drag = DragController::new();
        drag.on_drag_start(&id("1"));
        drag.on_drag_over(&id("1"), Some("COMPLETE"));

        // Hovering over another task card reports the card's id.
        assert!(drag.on_drag_over(&id("1"), Some("2")));
        assert_eq!(drag.hovered_column(), None);
    }

    #[test]
    fn test_over_without_start_adopts_drag() {
        let mut drag = DragController::new();

        assert!(drag.on_drag_over(&id("2"), Some("COMPLETE")));
        assert_eq!(drag.active(), Some(&id("2")));
        assert_eq!(drag.hovered_column(), Some(ColumnId::Complete));
    }

    #[test]
    fn test_over_for_other_task_replaces_drag() {
        let mut drag = DragController::new();
        drag.on_drag_start(&id("1"));
        drag.on_drag_over(&id("1"), Some("TODO"));

        assert!(!drag.on_drag_over(&id("3"), Some("TODO")));
        assert_eq!(drag.active(), Some(&id("3")));
    }

    #[test]
    fn test_restart_discards_stale_drag() {
        let mut drag = DragController::new();
        drag.on_drag_start(&id("1"));
        drag.on_drag_over(&id("1"), Some("COMPLETE"));

        drag.on_drag_start(&id("2"));

        assert_eq!(drag.active(), Some(&id("2")));
        assert_eq!(drag.hovered_column(), None);
    }

    #[test]
    fn test_drop_on_column_moves_task() {
        let mut store = TaskStore::with_sample_tasks();
        let mut drag = DragController::new();

        drag.on_drag_start(&id("1"));
        drag.on_drag_over(&id("1"), Some("COMPLETE"));
        let outcome = drag.on_drag_end(&mut store, &id("1"), Some("COMPLETE"));

        assert_eq!(outcome, DropOutcome::Moved(ColumnId::Complete));
        assert_eq!(store.get(&id("1")).unwrap().column, ColumnId::Complete);
        assert_eq!(drag.state(), &DragState::Idle);
        assert_eq!(drag.hovered_column(), None);
    }

    #[test]
    fn test_drop_outside_cancels() {
        let mut store = TaskStore::with_sample_tasks();
        let mut drag = DragController::new();

        drag.on_drag_start(&id("1"));
        drag.on_drag_over(&id("1"), Some("IN_PROGRESS"));
        drag.on_drag_over(&id("1"), None);
        let outcome = drag.on_drag_end(&mut store, &id("1"), None);

        assert_eq!(outcome, DropOutcome::Cancelled);
        assert_eq!(store.get(&id("1")).unwrap().column, ColumnId::Todo);
        assert_eq!(drag.hovered_column(), None);
        assert!(!drag.is_dragging());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_drop_on_invalid_target_cancels() {
        let mut store = TaskStore::with_sample_tasks();
        let mut drag = DragController::new();

        drag.on_drag_start(&id("2"));
        let outcome = drag.on_drag_end(&mut store, &id("2"), Some("ARCHIVE"));

        assert_eq!(outcome, DropOutcome::Cancelled);
        assert_eq!(store.get(&id("2")).unwrap().column, ColumnId::InProgress);
    }

    #[test]
    fn test_drop_on_own_column_is_unchanged() {
        let mut store = TaskStore::with_sample_tasks();
        let mut drag = DragController::new();
        let before = store.tasks().to_vec();

        drag.on_drag_start(&id("2"));
        let outcome = drag.on_drag_end(&mut store, &id("2"), Some("IN_PROGRESS"));

        assert_eq!(outcome, DropOutcome::Unchanged);
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_drop_of_deleted_task_is_unchanged() {
        let mut store = TaskStore::with_sample_tasks();
        let mut drag = DragController::new();

        drag.on_drag_start(&id("3"));
        store.delete(&id("3"));
        let outcome = drag.on_drag_end(&mut store, &id("3"), Some("TODO"));

        assert_eq!(outcome, DropOutcome::Unchanged);
        assert_eq!(store.len(), 2);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_end_without_start_still_applies() {
        let mut store = TaskStore::with_sample_tasks();
        let mut drag = DragController::new();

        let outcome = drag.on_drag_end(&mut store, &id("1"), Some("IN_PROGRESS"));

        assert_eq!(outcome, DropOutcome::Moved(ColumnId::InProgress));
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_cancel_from_any_state() {
        let mut drag = DragController::new();
        assert!(!drag.cancel());

        drag.on_drag_start(&id("1"));
        assert!(drag.cancel());
        assert_eq!(drag.state(), &DragState::Idle);

        drag.on_drag_start(&id("1"));
        drag.on_drag_over(&id("1"), Some("TODO"));
        assert!(drag.cancel());
        assert_eq!(drag.hovered_column(), None);
    }

    #[test]
    fn test_event_deserialization() {
        let event: DragEvent =
            serde_json::from_str(r#"{"phase":"over","activeId":"7","overId":"COMPLETE"}"#).unwrap();
        assert_eq!(
            event,
            DragEvent::Over {
                active_id: id("7"),
                over_id: Some("COMPLETE".to_string()),
            }
        );

        let event: DragEvent = serde_json::from_str(r#"{"phase":"end","activeId":"7"}"#).unwrap();
        assert_eq!(
            event,
            DragEvent::End {
                active_id: id("7"),
                over_id: None,
            }
        );
        assert_eq!(event.active_id(), &id("7"));
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target(Some("TODO")), Some(ColumnId::Todo));
        assert_eq!(resolve_target(Some("IN_PROGRESS")), Some(ColumnId::InProgress));
        assert_eq!(resolve_target(Some("COMPLETE")), Some(ColumnId::Complete));
        assert_eq!(resolve_target(Some("nowhere")), None);
        assert_eq!(resolve_target(None), None);
    }

    #[test]
    fn test_resolve_target_requires_exact_column_id() {
        assert_eq!(resolve_target(Some("todo")), None);
        assert_eq!(resolve_target(Some(" complete ")), None);
        assert_eq!(resolve_target(Some("In Progress")), None);
        assert_eq!(resolve_target(Some("To-Do")), None);
        assert_eq!(resolve_target(Some("TO_DO")), None);
    }

    #[test]
    fn test_card_with_column_like_id_is_not_a_target() {
        let tasks = vec![
            Task::new(id("a"), "Dragged".to_string()).in_column(ColumnId::InProgress),
            Task::new(id("todo"), "Card".to_string()),
        ];
        let mut store = TaskStore::from_tasks(tasks).unwrap();
        let mut drag = DragController::new();

        drag.on_drag_start(&id("a"));
        assert!(!drag.on_drag_over(&id("a"), Some("todo")));
        assert_eq!(drag.hovered_column(), None);

        let outcome = drag.on_drag_end(&mut store, &id("a"), Some("todo"));

        assert_eq!(outcome, DropOutcome::Cancelled);
        assert_eq!(store.get(&id("a")).unwrap().column, ColumnId::InProgress);
    }
}
