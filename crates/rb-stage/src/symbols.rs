//! Symbol set and the 3×3 grid

use serde::{Deserialize, Serialize};

/// Number of visible rows per reel.
pub const GRID_ROWS: usize = 3;
/// Number of reels (columns).
pub const GRID_COLS: usize = 3;

/// A reel symbol.
///
/// The set is fixed; symbols have no internal structure and compare by
/// identity. `Seven` is the jackpot symbol on any winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Cherry,
    Lemon,
    Bar,
    Seven,
}

impl Symbol {
    /// All symbols, in paytable order.
    pub const ALL: [Symbol; 4] = [Symbol::Cherry, Symbol::Lemon, Symbol::Bar, Symbol::Seven];

    /// Display glyph for text rendering.
    pub fn glyph(self) -> char {
        match self {
            Symbol::Cherry => '@',
            Symbol::Lemon => 'o',
            Symbol::Bar => '=',
            Symbol::Seven => '7',
        }
    }

    /// Symbol name as shown in outcome messages.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Cherry => "cherry",
            Symbol::Lemon => "lemon",
            Symbol::Bar => "bar",
            Symbol::Seven => "seven",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The settled 3×3 symbol grid, indexed `[row][column]`, row 0 = top.
///
/// Always fully populated whenever read; the engine only hands one out
/// after every reel has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid([[Symbol; GRID_COLS]; GRID_ROWS]);

impl Grid {
    /// Build from row-major cells.
    pub fn new(rows: [[Symbol; GRID_COLS]; GRID_ROWS]) -> Self {
        Self(rows)
    }

    /// Build from per-reel windows (each window top-to-bottom).
    pub fn from_columns(columns: [[Symbol; GRID_ROWS]; GRID_COLS]) -> Self {
        let mut rows = [[Symbol::Cherry; GRID_COLS]; GRID_ROWS];
        for (col, window) in columns.iter().enumerate() {
            for (row, &symbol) in window.iter().enumerate() {
                rows[row][col] = symbol;
            }
        }
        Self(rows)
    }

    /// Symbol at `[row][col]`.
    pub fn cell(&self, row: usize, col: usize) -> Symbol {
        self.0[row][col]
    }

    /// One full row, left to right.
    pub fn row(&self, row: usize) -> [Symbol; GRID_COLS] {
        self.0[row]
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> &[[Symbol; GRID_COLS]; GRID_ROWS] {
        &self.0
    }
}
