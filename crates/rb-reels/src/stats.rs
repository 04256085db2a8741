//! Session statistics

use serde::{Deserialize, Serialize};

use crate::round::Outcome;

/// Per-session counters. Lives only as long as the running session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub total_bet: u64,
    pub total_win: u64,
    pub wins: u64,
    pub losses: u64,
    pub jackpots: u64,
    pub max_win: u64,
}

impl SessionStats {
    /// Return-to-player, percent.
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0 {
            self.total_win as f64 / self.total_bet as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Fraction of spins that won anything, percent.
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            self.wins as f64 / self.total_spins as f64 * 100.0
        } else {
            0.0
        }
    }

    pub(crate) fn record(&mut self, bet: u64, outcome: &Outcome) {
        self.total_spins += 1;
        self.total_bet += bet;
        self.total_win += outcome.total_win;

        if outcome.is_win() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        if outcome.line_wins.iter().any(|w| w.is_jackpot) {
            self.jackpots += 1;
        }
        self.max_win = self.max_win.max(outcome.total_win);
    }
}
