//! Drag interaction controller.
//!
//! Turns one pointer gesture (start, moves, release or cancel) into at most
//! one structural board change. The controller never mutates a board: drops
//! return the transformed board for the owner to commit.

use super::{BoardLayout, DragError, DragPhase, PointerPosition};
use crate::board::domain::{Board, BoardError, ColumnId, TaskId};
use tracing::trace;

/// Task being dragged and the slot currently under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    task_id: TaskId,
    source_column_id: ColumnId,
    original_index: usize,
    candidate: Option<DropTarget>,
}

impl DragSession {
    /// Returns the dragged task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the column the drag started in.
    #[must_use]
    pub const fn source_column_id(&self) -> &ColumnId {
        &self.source_column_id
    }

    /// Returns the task's index in the source column when the drag started.
    #[must_use]
    pub const fn original_index(&self) -> usize {
        self.original_index
    }

    /// Returns the last computed candidate target.
    #[must_use]
    pub const fn candidate(&self) -> Option<&DropTarget> {
        self.candidate.as_ref()
    }
}

/// Column and row slot under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    column_index: usize,
    column_id: ColumnId,
    row: usize,
}

impl DropTarget {
    /// Returns the candidate column's display index.
    #[must_use]
    pub const fn column_index(&self) -> usize {
        self.column_index
    }

    /// Returns the candidate column.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Returns the row slot within the candidate column.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }
}

/// Result of applying a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task was moved to the end of another column.
    Moved {
        /// Board after the move.
        board: Board,
        /// Moved task.
        task_id: TaskId,
        /// Column the task left.
        source_column_id: ColumnId,
        /// Column the task joined.
        target_column_id: ColumnId,
    },
    /// The task was dropped elsewhere in its own column.
    Reordered {
        /// Board after the reorder.
        board: Board,
        /// Reordered column.
        column_id: ColumnId,
        /// New task order of the column.
        order: Vec<TaskId>,
    },
    /// The task was dropped where it already was.
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Drag interaction state machine.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    layout: BoardLayout,
    state: DragState,
}

impl DragController {
    /// Creates an idle controller for the given layout.
    #[must_use]
    pub const fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            state: DragState::Idle,
        }
    }

    /// Returns the layout used for hit testing.
    #[must_use]
    pub const fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Returns the current resting phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        match &self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging(_) => DragPhase::Dragging,
        }
    }

    /// Returns the active drag, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Starts dragging a task.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::InvalidTransition`] while another drag is active,
    /// or [`DragError::TaskNotOnBoard`] when the task cannot be found. The
    /// controller is unchanged on error.
    pub fn begin_drag(
        &mut self,
        board: &Board,
        task_id: &TaskId,
    ) -> Result<&DragSession, DragError> {
        self.ensure_transition(DragPhase::Dragging)?;
        let (column_index, original_index) = board
            .locate_task(task_id)
            .ok_or_else(|| DragError::TaskNotOnBoard(task_id.clone()))?;
        let source_column_id = board
            .columns()
            .get(column_index)
            .map(|column| column.id().clone())
            .ok_or_else(|| DragError::TaskNotOnBoard(task_id.clone()))?;

        trace!(
            task_id = %task_id,
            source = %source_column_id,
            original_index,
            "drag started"
        );
        self.state = DragState::Dragging(DragSession {
            task_id: task_id.clone(),
            source_column_id,
            original_index,
            candidate: None,
        });
        self.session().ok_or(DragError::NotDragging)
    }

    /// Recomputes the candidate target from the pointer position.
    ///
    /// Returns `None` when the board has no columns.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] when no drag is active.
    pub fn drag_to(
        &mut self,
        board: &Board,
        pointer: PointerPosition,
    ) -> Result<Option<&DropTarget>, DragError> {
        let target = target_at(&self.layout, board, pointer);
        match &mut self.state {
            DragState::Dragging(session) => {
                session.candidate = target;
                Ok(session.candidate.as_ref())
            }
            DragState::Idle => Err(DragError::NotDragging),
        }
    }

    /// Releases the dragged task at `pointer` and computes the resulting
    /// board.
    ///
    /// A drop on another column moves the task to the end of that column; a
    /// drop on the source column reorders it to the row under the pointer.
    /// The controller is idle when this returns, whether or not the drop was
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::InvalidTransition`] when no drag is active,
    /// [`DragError::NoDropTarget`] when the board has no columns, or
    /// [`DragError::Board`] when the board rejects the operation.
    pub fn drop_at(
        &mut self,
        board: &Board,
        pointer: PointerPosition,
    ) -> Result<DropOutcome, DragError> {
        self.ensure_transition(DragPhase::Dropped)?;
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return Err(DragError::InvalidTransition {
                from: DragPhase::Idle,
                to: DragPhase::Dropped,
            });
        };
        trace!(task_id = %session.task_id, "drag dropped");

        let outcome = target_at(&self.layout, board, pointer)
            .ok_or(DragError::NoDropTarget)
            .and_then(|target| {
                apply_drop(board, &session, &target).map_err(DragError::from)
            });
        trace!(phase = DragPhase::Idle.as_str(), "drag finished");
        outcome
    }

    /// Aborts the active drag without touching the board.
    ///
    /// Returns the cancelled session, or `None` when the controller was
    /// already idle.
    pub fn cancel(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                trace!(
                    task_id = %session.task_id,
                    phase = DragPhase::Cancelled.as_str(),
                    "drag cancelled"
                );
                Some(session)
            }
            DragState::Idle => None,
        }
    }

    fn ensure_transition(&self, to: DragPhase) -> Result<(), DragError> {
        let from = self.phase();
        if from.can_transition_to(to) {
            Ok(())
        } else {
            Err(DragError::InvalidTransition { from, to })
        }
    }
}

fn target_at(
    layout: &BoardLayout,
    board: &Board,
    pointer: PointerPosition,
) -> Option<DropTarget> {
    let column_index = layout.column_at(pointer.x, board.columns().len())?;
    let column = board.columns().get(column_index)?;
    Some(DropTarget {
        column_index,
        column_id: column.id().clone(),
        row: layout.row_at(pointer.y, column.len()),
    })
}

fn apply_drop(
    board: &Board,
    session: &DragSession,
    target: &DropTarget,
) -> Result<DropOutcome, BoardError> {
    if target.column_id != session.source_column_id {
        let next = board.move_task(
            &session.task_id,
            &session.source_column_id,
            &target.column_id,
        )?;
        return Ok(DropOutcome::Moved {
            board: next,
            task_id: session.task_id.clone(),
            source_column_id: session.source_column_id.clone(),
            target_column_id: target.column_id.clone(),
        });
    }

    let column = board
        .column(&session.source_column_id)
        .ok_or_else(|| BoardError::ColumnNotFound(session.source_column_id.clone()))?;
    let current_index = column
        .position_of(&session.task_id)
        .ok_or_else(|| BoardError::TaskNotFound {
            task_id: session.task_id.clone(),
            column_id: session.source_column_id.clone(),
        })?;

    let mut order: Vec<TaskId> = column.task_ids().cloned().collect();
    let dragged = order.remove(current_index);
    let destination = target.row.min(order.len());
    if destination == current_index {
        return Ok(DropOutcome::Unchanged);
    }
    order.insert(destination, dragged);

    let next = board.reorder_column(&session.source_column_id, &order)?;
    Ok(DropOutcome::Reordered {
        board: next,
        column_id: session.source_column_id.clone(),
        order,
    })
}
