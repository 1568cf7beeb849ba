//! Board column: a titled, coloured, ordered bucket of tasks.

use super::{ColumnColor, ColumnId, Task, TaskDraft, TaskId, Title};
use serde::Serialize;

/// A column of the board. Its identifier doubles as the status of every task
/// it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    id: ColumnId,
    title: Title,
    color: ColumnColor,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub const fn new(id: ColumnId, title: Title, color: ColumnColor) -> Self {
        Self {
            id,
            title,
            color,
            tasks: Vec::new(),
        }
    }

    /// Appends drafts to the column in the given order, stamping each with
    /// this column's status.
    ///
    /// Identifier uniqueness is checked when the column joins a board.
    #[must_use]
    pub fn with_tasks(mut self, drafts: impl IntoIterator<Item = TaskDraft>) -> Self {
        for draft in drafts {
            let task = draft.place_in(self.id.clone());
            self.tasks.push(task);
        }
        self
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the display colour.
    #[must_use]
    pub const fn color(&self) -> &ColumnColor {
        &self.color
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task identifiers in display order.
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.tasks.iter().map(Task::id)
    }

    /// Returns the index of a task within the column.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    /// Removes a task, returning it if present.
    pub(crate) fn take_task(&mut self, task_id: &TaskId) -> Option<Task> {
        let index = self.position_of(task_id)?;
        Some(self.tasks.remove(index))
    }

    /// Appends a task at the end of the column and stamps its status.
    pub(crate) fn push_task(&mut self, mut task: Task) {
        task.restamp(self.id.clone());
        self.tasks.push(task);
    }

    /// Replaces the task sequence.
    pub(crate) fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}
