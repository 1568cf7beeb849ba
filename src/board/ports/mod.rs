//! Port contracts for the task board.
//!
//! Ports define the infrastructure-agnostic interfaces the board session
//! notifies after committing a change.

pub mod observer;

pub use observer::{BoardEvent, BoardObserver};
