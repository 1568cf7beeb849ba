//! Application services for the task board.

mod session;

pub use session::{BoardSession, BoardSessionError, BoardSessionResult};
