//! Drag gesture phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the drag interaction state machine.
///
/// The controller rests in [`DragPhase::Idle`] or [`DragPhase::Dragging`].
/// [`DragPhase::Dropped`] and [`DragPhase::Cancelled`] are passed through on
/// the way back to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    /// No gesture in progress.
    Idle,
    /// A task is being dragged.
    Dragging,
    /// The pointer was released and the drop is being applied.
    Dropped,
    /// The gesture was aborted without touching the board.
    Cancelled,
}

impl DragPhase {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Dropped => "dropped",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether transition to `target` is allowed. Pointer moves keep
    /// the controller in [`DragPhase::Dragging`] and are not transitions.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Idle, Self::Dragging)
                | (Self::Dragging, Self::Dropped | Self::Cancelled)
                | (Self::Dropped | Self::Cancelled, Self::Idle)
        )
    }

    /// Returns whether the controller can remain in this phase between
    /// pointer events.
    #[must_use]
    pub const fn is_resting(self) -> bool {
        matches!(self, Self::Idle | Self::Dragging)
    }
}

impl fmt::Display for DragPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
