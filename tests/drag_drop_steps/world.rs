//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryBoardObserver,
    domain::{Board, Column, ColumnColor, ColumnId, TaskDraft, TaskId, Title},
    drag::{BoardLayout, PointerPosition},
    services::{BoardSession, BoardSessionError},
};

/// Session type used by the BDD world.
pub type TestBoardSession = BoardSession<InMemoryBoardObserver>;

/// Scenario world for drag-and-drop behaviour tests.
pub struct BoardWorld {
    pub observer: InMemoryBoardObserver,
    pub pending_columns: Vec<Column>,
    pub session: Option<TestBoardSession>,
    pub last_error: Option<BoardSessionError>,
}

impl BoardWorld {
    /// Creates a world with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observer: InMemoryBoardObserver::new(),
            pending_columns: Vec::new(),
            session: None,
            last_error: None,
        }
    }

    /// Adds a column to the board under construction.
    pub fn add_column(&mut self, column_id: &str, tasks: &str) -> Result<(), eyre::Report> {
        let drafts = task_ids(tasks)?
            .into_iter()
            .map(|task_id| {
                let title = format!("Task {task_id}");
                TaskDraft::new(task_id, title)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let column = Column::new(
            ColumnId::new(column_id)?,
            Title::new(column_id)?,
            ColumnColor::default(),
        )
        .with_tasks(drafts);
        self.pending_columns.push(column);
        Ok(())
    }

    /// Returns the session, building it from the pending columns on first
    /// use.
    pub fn session_mut(&mut self) -> Result<&mut TestBoardSession, eyre::Report> {
        if self.session.is_none() {
            let board = Board::new(std::mem::take(&mut self.pending_columns))?;
            self.session = Some(BoardSession::new(
                board,
                BoardLayout::default(),
                Arc::new(self.observer.clone()),
            ));
        }
        self.session
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board session was not created"))
    }

    /// Returns the session once a step has created it.
    pub fn session(&self) -> Result<&TestBoardSession, eyre::Report> {
        self.session
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no board session in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a comma-separated list of task identifiers.
pub fn task_ids(list: &str) -> Result<Vec<TaskId>, eyre::Report> {
    list.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| TaskId::new(part).map_err(eyre::Report::from))
        .collect()
}

/// Returns a pointer position inside the given column and row slot of the
/// default layout.
pub fn pointer_over(column: u32, row: u32) -> Result<PointerPosition, eyre::Report> {
    let layout = BoardLayout::default();
    let stride = layout.column_width + layout.column_gap;
    let x = column * stride + 10;
    let y = layout.header_height + row * layout.card_height + 10;
    Ok(PointerPosition::new(i32::try_from(x)?, i32::try_from(y)?))
}
