//! Stage — the canonical game phases of a spin

use serde::{Deserialize, Serialize};

use crate::payline::PayLine;
use crate::symbols::{GRID_ROWS, Symbol};

/// Canonical game stage.
///
/// Every moment of the spin lifecycle maps to one of these. Front-ends
/// respond to stages, never to raw engine internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stage {
    /// Spin initiated, bet committed.
    SpinStart,

    /// Reel is in motion (not yet stopped).
    ReelSpinning {
        /// Which reel (0-indexed)
        reel_index: u8,
    },

    /// Reel has stopped; its symbols are authoritative from this moment.
    ReelStop {
        /// Which reel stopped (0-indexed)
        reel_index: u8,
        /// Settled window, top to bottom
        symbols: [Symbol; GRID_ROWS],
    },

    /// All reels stopped, wins being evaluated.
    EvaluateWins,

    /// Win celebration starting.
    WinPresent {
        /// Total win in credits
        amount: u64,
        /// Number of winning lines
        line_count: u8,
    },

    /// Individual winning line being highlighted.
    WinLineShow {
        /// Which line
        line: PayLine,
        /// Credits paid by this line
        amount: u64,
    },

    /// Spin complete, lock released, ready for the next spin.
    SpinEnd,
}

impl Stage {
    /// Stable snake_case name, for logging and routing.
    pub fn type_name(&self) -> &'static str {
        match self {
            Stage::SpinStart => "spin_start",
            Stage::ReelSpinning { .. } => "reel_spinning",
            Stage::ReelStop { .. } => "reel_stop",
            Stage::EvaluateWins => "evaluate_wins",
            Stage::WinPresent { .. } => "win_present",
            Stage::WinLineShow { .. } => "win_line_show",
            Stage::SpinEnd => "spin_end",
        }
    }
}
