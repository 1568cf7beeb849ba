//! Board aggregate and its structural operations.
//!
//! Every operation is a pure transform: it borrows the current board and
//! returns a new one. On error the receiver is untouched, so the caller still
//! holds the prior board alongside the error.

use super::{BoardError, Column, ColumnId, Task, TaskDraft, TaskId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Ordered set of columns, each holding an ordered sequence of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Creates a board from columns in display order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateColumnId`] when two columns share an
    /// identifier, or [`BoardError::DuplicateTaskId`] when a task identifier
    /// appears more than once anywhere on the board.
    pub fn new(columns: Vec<Column>) -> Result<Self, BoardError> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for column in &columns {
            if !column_ids.insert(column.id()) {
                return Err(BoardError::DuplicateColumnId(column.id().clone()));
            }
            for task_id in column.task_ids() {
                if !task_ids.insert(task_id) {
                    return Err(BoardError::DuplicateTaskId(task_id.clone()));
                }
            }
        }
        Ok(Self { columns })
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column identifiers in display order.
    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.iter().map(Column::id)
    }

    /// Returns a column by identifier.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns the display index of a column.
    #[must_use]
    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == column_id)
    }

    /// Returns a task by identifier, wherever it lives.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(Column::tasks)
            .find(|task| task.id() == task_id)
    }

    /// Returns `(column index, task index)` for a task.
    #[must_use]
    pub fn locate_task(&self, task_id: &TaskId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column_index, column)| {
                column
                    .position_of(task_id)
                    .map(|task_index| (column_index, task_index))
            })
    }

    /// Returns every task identifier in board order (column by column).
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.columns.iter().flat_map(Column::task_ids)
    }

    /// Returns the number of tasks on the whole board.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Returns the number of tasks in a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] for an unknown column.
    pub fn task_count(&self, column_id: &ColumnId) -> Result<usize, BoardError> {
        self.column(column_id)
            .map(Column::len)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.clone()))
    }

    /// Moves a task to the end of another column and restamps its status.
    ///
    /// Moving within the same column returns an identical board; use
    /// [`Board::reorder_column`] to change order in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] when either column is unknown,
    /// or [`BoardError::TaskNotFound`] when the task is not in the source
    /// column.
    pub fn move_task(
        &self,
        task_id: &TaskId,
        source_column_id: &ColumnId,
        target_column_id: &ColumnId,
    ) -> Result<Self, BoardError> {
        let source_index = self.require_column_index(source_column_id)?;
        let target_index = self.require_column_index(target_column_id)?;
        let task_missing = || BoardError::TaskNotFound {
            task_id: task_id.clone(),
            column_id: source_column_id.clone(),
        };

        let in_source = self
            .columns
            .get(source_index)
            .and_then(|column| column.position_of(task_id))
            .is_some();
        if !in_source {
            return Err(task_missing());
        }
        if source_index == target_index {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let task = next
            .columns
            .get_mut(source_index)
            .and_then(|column| column.take_task(task_id))
            .ok_or_else(task_missing)?;
        next.columns
            .get_mut(target_index)
            .ok_or_else(|| BoardError::ColumnNotFound(target_column_id.clone()))?
            .push_task(task);
        Ok(next)
    }

    /// Replaces a column's task order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] for an unknown column, or
    /// [`BoardError::InvalidReorder`] unless `new_order` names every task of
    /// the column exactly once and nothing else.
    pub fn reorder_column(
        &self,
        column_id: &ColumnId,
        new_order: &[TaskId],
    ) -> Result<Self, BoardError> {
        let column_index = self.require_column_index(column_id)?;
        let invalid = || BoardError::InvalidReorder {
            column_id: column_id.clone(),
        };

        let mut next = self.clone();
        let column = next
            .columns
            .get_mut(column_index)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.clone()))?;
        if new_order.len() != column.len() {
            return Err(invalid());
        }

        let mut by_id: HashMap<TaskId, Task> = column
            .tasks()
            .iter()
            .map(|task| (task.id().clone(), task.clone()))
            .collect();
        let reordered = new_order
            .iter()
            .map(|task_id| by_id.remove(task_id))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        column.replace_tasks(reordered);
        Ok(next)
    }

    /// Appends a new task to a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColumnNotFound`] for an unknown column, or
    /// [`BoardError::DuplicateTaskId`] when the identifier is already used
    /// anywhere on the board.
    pub fn add_task(&self, column_id: &ColumnId, draft: TaskDraft) -> Result<Self, BoardError> {
        let column_index = self.require_column_index(column_id)?;
        if self.task(draft.id()).is_some() {
            return Err(BoardError::DuplicateTaskId(draft.id().clone()));
        }

        let mut next = self.clone();
        next.columns
            .get_mut(column_index)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.clone()))?
            .push_task(draft.place_in(column_id.clone()));
        Ok(next)
    }

    fn require_column_index(&self, column_id: &ColumnId) -> Result<usize, BoardError> {
        self.column_index(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.clone()))
    }
}
