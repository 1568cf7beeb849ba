//! Board definition and layout loaded from JSON.
//!
//! ```json
//! {
//!   "columns": [
//!     { "id": "todo", "title": "To Do", "color": "#3b82f6",
//!       "tasks": [{ "id": "T1", "title": "Write docs", "priority": "high" }] },
//!     { "id": "done", "title": "Done" }
//!   ],
//!   "layout": { "column_width": 300 }
//! }
//! ```

use crate::board::domain::{Board, BoardError, Column, ColumnColor, ColumnId, TaskDraft, Title};
use crate::board::drag::BoardLayout;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading a board definition.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The document is not valid JSON or contains invalid values.
    #[error("invalid board definition: {0}")]
    Parse(#[from] serde_json::Error),
    /// The columns do not form a valid board.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// One column of a board definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column identifier, also the status of its tasks.
    pub id: ColumnId,
    /// Display title.
    pub title: Title,
    /// Display colour; a neutral grey when omitted.
    #[serde(default)]
    pub color: ColumnColor,
    /// Initial tasks in display order.
    #[serde(default)]
    pub tasks: Vec<TaskDraft>,
}

impl ColumnConfig {
    fn into_column(self) -> Column {
        Column::new(self.id, self.title, self.color).with_tasks(self.tasks)
    }
}

/// Complete board definition: columns in display order plus layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Columns in display order.
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
    /// Layout used for drop hit testing.
    #[serde(default)]
    pub layout: BoardLayout,
}

impl BoardConfig {
    /// Parses a board definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] for malformed JSON or values that
    /// fail validation (blank identifiers, unknown priorities, bad colours).
    pub fn from_json(json: &str) -> Result<Self, BoardConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the board described by the definition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Board`] when column or task identifiers
    /// repeat.
    pub fn build_board(self) -> Result<Board, BoardConfigError> {
        let columns = self
            .columns
            .into_iter()
            .map(ColumnConfig::into_column)
            .collect();
        Ok(Board::new(columns)?)
    }
}
