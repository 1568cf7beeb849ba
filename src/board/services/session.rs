//! Board session: the single owner of the current board.
//!
//! Each operation runs a pure board transform, commits the result, and only
//! then notifies the observer. Rejected operations leave the board as it was
//! and notify nobody.

use crate::board::{
    config::{BoardConfig, BoardConfigError},
    domain::{Board, BoardError, ColumnId, TaskDraft, TaskId},
    drag::{
        BoardLayout, DragController, DragError, DragPhase, DragSession, DropOutcome, DropTarget,
        PointerPosition,
    },
    ports::{BoardEvent, BoardObserver},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for board sessions.
#[derive(Debug, Error)]
pub enum BoardSessionError {
    /// The board rejected the operation.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The drag controller rejected the gesture event.
    #[error(transparent)]
    Drag(#[from] DragError),
    /// The board definition could not be loaded.
    #[error(transparent)]
    Config(#[from] BoardConfigError),
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;

/// Owns the current board and the drag controller, and notifies an observer
/// of every committed change.
pub struct BoardSession<O>
where
    O: BoardObserver,
{
    board: Board,
    drag: DragController,
    observer: Arc<O>,
}

impl<O> BoardSession<O>
where
    O: BoardObserver,
{
    /// Creates a session around an existing board.
    #[must_use]
    pub const fn new(board: Board, layout: BoardLayout, observer: Arc<O>) -> Self {
        Self {
            board,
            drag: DragController::new(layout),
            observer,
        }
    }

    /// Creates a session from a board definition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Config`] when the definition does not
    /// describe a valid board.
    pub fn from_config(config: BoardConfig, observer: Arc<O>) -> BoardSessionResult<Self> {
        let layout = config.layout;
        let board = config.build_board()?;
        debug!(
            columns = board.columns().len(),
            tasks = board.total_tasks(),
            "board session created"
        );
        Ok(Self::new(board, layout, observer))
    }

    /// Creates a session from a JSON board definition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Config`] when the document cannot be
    /// parsed or does not describe a valid board.
    pub fn from_json(json: &str, observer: Arc<O>) -> BoardSessionResult<Self> {
        Self::from_config(BoardConfig::from_json(json)?, observer)
    }

    /// Returns the committed board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the drag controller's current phase.
    #[must_use]
    pub const fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Returns the active drag, if any.
    #[must_use]
    pub const fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Returns the number of tasks in a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] for an unknown column.
    pub fn task_count(&self, column_id: &ColumnId) -> BoardSessionResult<usize> {
        Ok(self.board.task_count(column_id)?)
    }

    /// Moves a task to the end of another column.
    ///
    /// A move within the same column commits nothing and emits nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the board rejects the move.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        source_column_id: &ColumnId,
        target_column_id: &ColumnId,
    ) -> BoardSessionResult<&Board> {
        let next = self
            .board
            .move_task(task_id, source_column_id, target_column_id)
            .inspect_err(|err| {
                warn!(operation = "move_task", error = %err, "board operation rejected");
            })?;
        if source_column_id != target_column_id {
            self.commit(
                next,
                BoardEvent::TaskMoved {
                    task_id: task_id.clone(),
                    source_column_id: source_column_id.clone(),
                    target_column_id: target_column_id.clone(),
                },
            );
        }
        Ok(&self.board)
    }

    /// Replaces a column's task order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the order is not a
    /// permutation of the column's tasks or the column is unknown.
    pub fn reorder_column(
        &mut self,
        column_id: &ColumnId,
        new_order: &[TaskId],
    ) -> BoardSessionResult<&Board> {
        let next = self
            .board
            .reorder_column(column_id, new_order)
            .inspect_err(|err| {
                warn!(operation = "reorder_column", error = %err, "board operation rejected");
            })?;
        self.commit(
            next,
            BoardEvent::ColumnReordered {
                column_id: column_id.clone(),
                order: new_order.to_vec(),
            },
        );
        Ok(&self.board)
    }

    /// Appends a new task to a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the column is unknown or the
    /// task identifier is already on the board.
    pub fn add_task(
        &mut self,
        column_id: &ColumnId,
        draft: TaskDraft,
    ) -> BoardSessionResult<&Board> {
        let task_id = draft.id().clone();
        let next = self
            .board
            .add_task(column_id, draft)
            .inspect_err(|err| {
                warn!(operation = "add_task", error = %err, "board operation rejected");
            })?;
        self.commit(
            next,
            BoardEvent::TaskAdded {
                column_id: column_id.clone(),
                task_id,
            },
        );
        Ok(&self.board)
    }

    /// Forwards a user request to create a task in a column to the host.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] for an unknown column.
    pub fn request_add_task(&self, column_id: &ColumnId) -> BoardSessionResult<()> {
        if self.board.column(column_id).is_none() {
            warn!(operation = "request_add_task", column_id = %column_id, "unknown column");
            return Err(BoardError::ColumnNotFound(column_id.clone()).into());
        }
        self.observer.notify(&BoardEvent::AddTaskRequested {
            column_id: column_id.clone(),
        });
        Ok(())
    }

    /// Starts dragging a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Drag`] while another drag is active or
    /// when the task is not on the board.
    pub fn begin_drag(&mut self, task_id: &TaskId) -> BoardSessionResult<&DragSession> {
        Ok(self.drag.begin_drag(&self.board, task_id)?)
    }

    /// Updates the candidate drop target from the pointer position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Drag`] when no drag is active.
    pub fn drag_to(
        &mut self,
        pointer: PointerPosition,
    ) -> BoardSessionResult<Option<&DropTarget>> {
        Ok(self.drag.drag_to(&self.board, pointer)?)
    }

    /// Releases the dragged task, commits the resulting board and notifies
    /// the observer.
    ///
    /// Returns the emitted event, or `None` when the drop left the board
    /// unchanged. The controller is idle afterwards in every case.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Drag`] when no drag is active or the
    /// board rejects the drop; the committed board is unchanged.
    pub fn drop_at(
        &mut self,
        pointer: PointerPosition,
    ) -> BoardSessionResult<Option<BoardEvent>> {
        let outcome = self
            .drag
            .drop_at(&self.board, pointer)
            .inspect_err(|err| {
                warn!(operation = "drop", error = %err, "drop rejected");
            })?;
        let (board, event) = match outcome {
            DropOutcome::Moved {
                board,
                task_id,
                source_column_id,
                target_column_id,
            } => (
                board,
                BoardEvent::TaskMoved {
                    task_id,
                    source_column_id,
                    target_column_id,
                },
            ),
            DropOutcome::Reordered {
                board,
                column_id,
                order,
            } => (board, BoardEvent::ColumnReordered { column_id, order }),
            DropOutcome::Unchanged => return Ok(None),
        };
        self.commit(board, event.clone());
        Ok(Some(event))
    }

    /// Aborts the active drag. Returns the cancelled session, if any.
    pub fn cancel_drag(&mut self) -> Option<DragSession> {
        self.drag.cancel()
    }

    fn commit(&mut self, board: Board, event: BoardEvent) {
        self.board = board;
        debug!(event = event.kind(), "board change committed");
        self.observer.notify(&event);
    }
}
