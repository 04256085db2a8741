//! Tick timing profiles
//!
//! Reel travel is measured in animation steps; the front-end maps ticks to
//! wall-clock time via `tick_ms`. Travel targets are per reel:
//! `base_travel + reel_index * reel_stagger`, so reels always settle in
//! strict left-to-right order.

use serde::{Deserialize, Serialize};

use rb_stage::GRID_ROWS;

/// Named timing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickProfile {
    /// Normal gameplay pacing
    Normal,
    /// Fast mode
    Turbo,
    /// No wall-clock delay; shortest legal travel. For tests and autoplay.
    Instant,
}

impl Default for TickProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Tick clock configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickConfig {
    /// Profile type
    pub profile: TickProfile,
    /// Wall-clock duration of one tick (ms); 0 = run ticks back to back
    pub tick_ms: u64,
    /// Steps the first reel travels before stopping
    pub base_travel: u32,
    /// Extra steps per reel index; reel `i` travels `base + i * stagger`
    pub reel_stagger: u32,
}

impl TickConfig {
    /// Normal gameplay timing.
    pub fn normal() -> Self {
        Self {
            profile: TickProfile::Normal,
            tick_ms: 80,
            base_travel: 18,
            reel_stagger: 6,
        }
    }

    /// Turbo mode.
    pub fn turbo() -> Self {
        Self {
            profile: TickProfile::Turbo,
            tick_ms: 40,
            base_travel: 10,
            reel_stagger: 4,
        }
    }

    /// Instant mode: shortest travel that still refreshes the full window.
    pub fn instant() -> Self {
        Self {
            profile: TickProfile::Instant,
            tick_ms: 0,
            base_travel: GRID_ROWS as u32,
            reel_stagger: 1,
        }
    }

    /// Get config for a profile.
    pub fn from_profile(profile: TickProfile) -> Self {
        match profile {
            TickProfile::Normal => Self::normal(),
            TickProfile::Turbo => Self::turbo(),
            TickProfile::Instant => Self::instant(),
        }
    }

    /// Custom timing. `base_travel` is clamped so every visible cell is
    /// recycled before the reel freezes, `reel_stagger` so reels stop in
    /// strict left-to-right order.
    pub fn custom(tick_ms: u64, base_travel: u32, reel_stagger: u32) -> Self {
        Self {
            profile: TickProfile::Normal,
            tick_ms,
            base_travel: base_travel.max(GRID_ROWS as u32),
            reel_stagger: reel_stagger.max(1),
        }
    }

    /// Travel target for one reel.
    pub fn travel_for(&self, reel_index: u8) -> u32 {
        self.base_travel + reel_index as u32 * self.reel_stagger
    }

    /// Ticks until the last of `reel_count` reels settles.
    pub fn spin_ticks(&self, reel_count: u8) -> u32 {
        self.travel_for(reel_count.saturating_sub(1))
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self::normal()
    }
}
