//! Error types for board validation and board operations.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardValueError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The column identifier is empty after trimming.
    #[error("column identifier must not be empty")]
    EmptyColumnId,

    /// The identifier contains whitespace.
    #[error("invalid identifier '{0}', whitespace is not allowed")]
    InvalidIdentifier(String),

    /// A task or column title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The column colour is not a `#rgb` or `#rrggbb` hex value.
    #[error("invalid column color '{0}', expected #rgb or #rrggbb")]
    InvalidColor(String),

    /// The assignee name is empty after trimming.
    #[error("assignee name must not be empty")]
    EmptyAssigneeName,

    /// A tag label is empty after trimming.
    #[error("tag must not be empty")]
    EmptyTag,
}

/// Errors returned by board operations.
///
/// Every variant is recoverable: the operation is rejected and the board it
/// was applied to is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The task is not present in the claimed column.
    #[error("task {task_id} not found in column {column_id}")]
    TaskNotFound {
        /// Task that was looked up.
        task_id: TaskId,
        /// Column the task was expected in.
        column_id: ColumnId,
    },

    /// The column does not exist on the board.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),

    /// A column with the same identifier is already on the board.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumnId(ColumnId),

    /// The new order is not a permutation of the column's tasks.
    #[error("invalid reorder of column {column_id}: order must be a permutation of its tasks")]
    InvalidReorder {
        /// Column whose reorder was rejected.
        column_id: ColumnId,
    },
}

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
