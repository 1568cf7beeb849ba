//! Observer port through which the host learns about committed changes.

use crate::board::domain::{ColumnId, TaskId};
use serde::Serialize;

/// Change notification emitted after the session commits a new board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A task was moved to the end of another column.
    TaskMoved {
        /// Moved task.
        task_id: TaskId,
        /// Column the task left.
        source_column_id: ColumnId,
        /// Column the task joined.
        target_column_id: ColumnId,
    },
    /// A column's tasks were reordered in place.
    ColumnReordered {
        /// Reordered column.
        column_id: ColumnId,
        /// New task order.
        order: Vec<TaskId>,
    },
    /// A new task was appended to a column.
    TaskAdded {
        /// Receiving column.
        column_id: ColumnId,
        /// New task.
        task_id: TaskId,
    },
    /// The user asked to create a task in a column. The host builds the task
    /// and hands it back through `add_task`.
    AddTaskRequested {
        /// Column the task should be created in.
        column_id: ColumnId,
    },
}

impl BoardEvent {
    /// Returns the canonical event name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TaskMoved { .. } => "task_moved",
            Self::ColumnReordered { .. } => "column_reordered",
            Self::TaskAdded { .. } => "task_added",
            Self::AddTaskRequested { .. } => "add_task_requested",
        }
    }
}

/// Receiver of board change notifications.
///
/// Notifications arrive only for committed changes, in commit order.
/// Rejected operations produce no notification.
#[cfg_attr(test, mockall::automock)]
pub trait BoardObserver: Send + Sync {
    /// Handles one committed change.
    fn notify(&self, event: &BoardEvent);
}
