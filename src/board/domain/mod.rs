//! Domain model for the task board.
//!
//! The board owns an ordered set of columns, each an ordered sequence of
//! tasks. All structural changes are pure transforms on [`Board`]; nothing in
//! this module performs I/O or notifies anyone.

mod board;
mod color;
mod column;
mod error;
mod ids;
mod priority;
mod task;
mod text;

pub use board::Board;
pub use color::ColumnColor;
pub use column::Column;
pub use error::{BoardError, BoardValueError, ParsePriorityError};
pub use ids::{ColumnId, TaskId};
pub use priority::Priority;
pub use task::{Assignee, Task, TaskDraft};
pub use text::{Tag, Title};
