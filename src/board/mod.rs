//! Interactive task board.
//!
//! Columns of tasks with drag-and-drop reordering and cross-column moves.
//! The module follows hexagonal architecture:
//!
//! - Domain types and pure board transforms in [`domain`]
//! - The drag interaction state machine and drop geometry in [`drag`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The owning session service in [`services`]
//! - JSON board definitions in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod drag;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
