//! Pointer-to-slot geometry.
//!
//! Columns are laid out left to right in board order. Coordinates are
//! integer logical pixels relative to the board's top-left corner.

use serde::{Deserialize, Serialize};

/// Pointer position relative to the board origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

impl PointerPosition {
    /// Creates a pointer position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed logical dimensions the host renders the board with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    /// Width of every column.
    pub column_width: u32,
    /// Horizontal gap after each column.
    pub column_gap: u32,
    /// Height of the column header above the first card.
    pub header_height: u32,
    /// Height of one task card, including spacing.
    pub card_height: u32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            column_width: 280,
            column_gap: 16,
            header_height: 48,
            card_height: 96,
        }
    }
}

impl BoardLayout {
    /// Returns the hit-test width of each of `column_count` columns. The gap
    /// after a column counts towards that column.
    #[must_use]
    pub fn column_widths(&self, column_count: usize) -> Vec<u32> {
        vec![self.column_width.saturating_add(self.column_gap); column_count]
    }

    /// Returns the column index under a horizontal offset, clamped to the
    /// board.
    #[must_use]
    pub fn column_at(&self, offset_x: i32, column_count: usize) -> Option<usize> {
        column_index_at(offset_x, &self.column_widths(column_count))
    }

    /// Returns the row slot under a vertical offset inside a column holding
    /// `task_count` tasks.
    #[must_use]
    pub fn row_at(&self, offset_y: i32, task_count: usize) -> usize {
        row_index_at(offset_y, self.header_height, self.card_height, task_count)
    }
}

/// Maps a horizontal offset to a column index.
///
/// Offsets left of the first column clamp to `0` and offsets past the last
/// column clamp to the last index, so a drop is never lost while at least one
/// column exists. Returns `None` only when `column_widths` is empty.
#[must_use]
pub fn column_index_at(offset_x: i32, column_widths: &[u32]) -> Option<usize> {
    let last = column_widths.len().checked_sub(1)?;
    let offset = i64::from(offset_x);
    let mut right_edge = 0_i64;
    for (index, width) in column_widths.iter().enumerate() {
        right_edge = right_edge.saturating_add(i64::from(*width));
        if offset < right_edge {
            return Some(index);
        }
    }
    Some(last)
}

/// Maps a vertical offset to a row slot in a column.
///
/// The result lies in `0..=task_count`; `task_count` is the slot after the
/// last card. A zero `card_height` places everything in the first slot.
#[must_use]
pub fn row_index_at(
    offset_y: i32,
    header_height: u32,
    card_height: u32,
    task_count: usize,
) -> usize {
    let into_cards = i64::from(offset_y).saturating_sub(i64::from(header_height));
    if into_cards <= 0 {
        return 0;
    }
    into_cards
        .checked_div(i64::from(card_height))
        .and_then(|row| usize::try_from(row).ok())
        .map_or(0, |row| row.min(task_count))
}
