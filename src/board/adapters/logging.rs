//! Observer that forwards board events to `tracing`.

use tracing::info;

use crate::board::ports::{BoardEvent, BoardObserver};

/// Logs every committed change as a structured `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBoardObserver;

impl BoardObserver for TracingBoardObserver {
    fn notify(&self, event: &BoardEvent) {
        match event {
            BoardEvent::TaskMoved {
                task_id,
                source_column_id,
                target_column_id,
            } => info!(
                event = event.kind(),
                task_id = %task_id,
                source = %source_column_id,
                target = %target_column_id,
                "task moved"
            ),
            BoardEvent::ColumnReordered { column_id, order } => info!(
                event = event.kind(),
                column_id = %column_id,
                tasks = order.len(),
                "column reordered"
            ),
            BoardEvent::TaskAdded { column_id, task_id } => info!(
                event = event.kind(),
                column_id = %column_id,
                task_id = %task_id,
                "task added"
            ),
            BoardEvent::AddTaskRequested { column_id } => info!(
                event = event.kind(),
                column_id = %column_id,
                "add task requested"
            ),
        }
    }
}
