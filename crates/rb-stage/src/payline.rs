//! Payline descriptors
//!
//! A payline names a set of 3 grid cells checked for a matching-symbol win.
//! The same descriptor doubles as the geometric input for overlay rendering.

use serde::{Deserialize, Serialize};

use crate::symbols::{GRID_COLS, GRID_ROWS};

/// A line checked for a win: one of the 3 rows, or a diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayLine {
    /// Horizontal row `r` (0 = top, 2 = bottom).
    Row(u8),
    /// Down-right diagonal: `[0][0], [1][1], [2][2]`.
    DiagonalDown,
    /// Down-left diagonal: `[0][2], [1][1], [2][0]`.
    DiagonalUp,
}

impl PayLine {
    /// All paylines in evaluation order: rows top to bottom, then diagonals.
    pub const ALL: [PayLine; 5] = [
        PayLine::Row(0),
        PayLine::Row(1),
        PayLine::Row(2),
        PayLine::DiagonalDown,
        PayLine::DiagonalUp,
    ];

    /// The `(row, col)` cells this line crosses, left to right.
    pub fn cells(self) -> [(usize, usize); GRID_COLS] {
        match self {
            PayLine::Row(r) => {
                let r = r as usize % GRID_ROWS;
                [(r, 0), (r, 1), (r, 2)]
            }
            PayLine::DiagonalDown => [(0, 0), (1, 1), (2, 2)],
            PayLine::DiagonalUp => [(2, 0), (1, 1), (0, 2)],
        }
    }

    /// Human-readable name for outcome messages.
    pub fn label(self) -> &'static str {
        match self {
            PayLine::Row(0) => "top row",
            PayLine::Row(1) => "middle row",
            PayLine::Row(_) => "bottom row",
            PayLine::DiagonalDown => "down-right diagonal",
            PayLine::DiagonalUp => "down-left diagonal",
        }
    }
}

impl std::fmt::Display for PayLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
