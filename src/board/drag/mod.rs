//! Drag interaction for the task board.
//!
//! [`DragController`] tracks one gesture at a time through the
//! [`DragPhase`] state machine and maps pointer positions to drop targets
//! with the pure functions in [`geometry`].

mod controller;
pub mod geometry;
mod phase;

pub use controller::{DragController, DragSession, DropOutcome, DropTarget};
pub use geometry::{BoardLayout, PointerPosition, column_index_at, row_index_at};
pub use phase::DragPhase;

use crate::board::domain::{BoardError, TaskId};
use thiserror::Error;

/// Errors returned by the drag controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragError {
    /// The gesture event is not valid in the current phase.
    #[error("invalid drag transition from {from} to {to}")]
    InvalidTransition {
        /// Phase the controller was in.
        from: DragPhase,
        /// Phase the event would have entered.
        to: DragPhase,
    },

    /// A pointer move arrived while no drag is active.
    #[error("no drag in progress")]
    NotDragging,

    /// The task to drag is not on the board.
    #[error("task not on board: {0}")]
    TaskNotOnBoard(TaskId),

    /// The board has no columns to drop onto.
    #[error("no column to drop onto")]
    NoDropTarget,

    /// The board rejected the drop.
    #[error(transparent)]
    Board(#[from] BoardError),
}
