//! Taskboard: the core of an interactive Kanban-style task board.
//!
//! The crate owns the board model, validates every change against it, and
//! turns raw pointer gestures into committed moves and reorders. Rendering
//! and persistence are left to the host, which learns about committed
//! changes through an observer port.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Board, column and task values with pure transforms
//! - **Ports**: The observer interface notified after each committed change
//! - **Adapters**: Recording and logging observers
//!
//! # Modules
//!
//! - [`board`]: Board model, drag interaction and session orchestration

pub mod board;
