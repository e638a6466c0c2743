//! Read-only copy of a board for callers (UI, CLI, save files).
//!
//! Columns are listed left to right, each bottom card first. Free cells are
//! in slot order and suit stacks in canonical suit order (hearts, diamonds,
//! clubs, spades). The engine never persists anything itself; a caller that
//! wants save/load serializes this type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::layout::Column;
use crate::core::card::Card;
use crate::core::config::FREE_CELL_COUNT;

/// A fixed-order copy of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Vec<Column>,
    pub free_cells: [Option<Card>; FREE_CELL_COUNT],
    pub suit_stacks: [Option<Card>; 4],
}

impl BoardSnapshot {
    /// Height of the tallest column.
    #[must_use]
    pub fn max_column_height(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }
}

fn write_slot(f: &mut fmt::Formatter<'_>, slot: Option<Card>) -> fmt::Result {
    match slot {
        Some(card) => write!(f, "[{card}]"),
        None => write!(f, "[--]"),
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &slot in &self.free_cells {
            write_slot(f, slot)?;
        }
        write!(f, "  ")?;
        for &slot in &self.suit_stacks {
            write_slot(f, slot)?;
        }
        writeln!(f)?;

        for row in 0..self.max_column_height() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|column| column.get(row).map_or_else(|| "  ".to_string(), Card::to_string))
                .collect();
            writeln!(f, " {}", cells.join(" ").trim_end())?;
        }

        Ok(())
    }
}
