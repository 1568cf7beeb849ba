//! Observer adapters for the task board.
//!
//! - [`memory::InMemoryBoardObserver`]: records events for tests and hosts
//!   that poll
//! - [`logging::TracingBoardObserver`]: forwards events to `tracing`

pub mod logging;
pub mod memory;
