//! Unit tests for the board module.

mod board_tests;
