//! Front-end surface contracts
//!
//! The engine and round controller issue declarative requests through these
//! traits; pixel work, terminal IO and audio playback live entirely behind
//! them.

use serde::{Deserialize, Serialize};

use crate::payline::PayLine;
use crate::symbols::{GRID_ROWS, Grid, Symbol};

/// Named audio triggers. Fire-and-forget; a sink that cannot play a cue
/// simply drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    SpinStart,
    SpinStop,
    Win,
    Lose,
}

impl AudioCue {
    pub fn name(self) -> &'static str {
        match self {
            AudioCue::SpinStart => "spin_start",
            AudioCue::SpinStop => "spin_stop",
            AudioCue::Win => "win",
            AudioCue::Lose => "lose",
        }
    }
}

/// Static UI text slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRegion {
    Title,
    Credits,
    Bet,
    Message,
}

/// A rendering surface for the 3×3 grid.
///
/// Commands are declarative; the surface owns layout, styling and timing of
/// the actual drawing.
pub trait RenderSurface {
    /// Redraw the full settled grid.
    fn draw_grid(&mut self, grid: &Grid);

    /// Animate one reel mid-spin: `window` is the cosmetic symbol column
    /// currently in transit (top to bottom), `step` the reel's travel
    /// progress. Cosmetic only; never used for payout.
    fn scroll_reel(&mut self, reel_index: u8, window: &[Symbol; GRID_ROWS], step: u32);

    /// Replace the current overlay set with overlays for exactly `lines`.
    /// An empty slice clears all overlays.
    fn set_overlays(&mut self, lines: &[PayLine]);

    /// Render static UI text.
    fn draw_text(&mut self, region: TextRegion, text: &str);
}

/// An audio trigger sink.
pub trait AudioSink {
    /// Fire a named cue. No return value; failures are the sink's problem.
    fn trigger(&mut self, cue: AudioCue);
}

/// Surface that ignores every command. For tests and headless simulation.
#[derive(Debug, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn draw_grid(&mut self, _grid: &Grid) {}
    fn scroll_reel(&mut self, _reel_index: u8, _window: &[Symbol; GRID_ROWS], _step: u32) {}
    fn set_overlays(&mut self, _lines: &[PayLine]) {}
    fn draw_text(&mut self, _region: TextRegion, _text: &str) {}
}

/// Sink that drops every cue. For tests and headless simulation.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn trigger(&mut self, _cue: AudioCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(AudioCue::SpinStart.name(), "spin_start");
        assert_eq!(AudioCue::Lose.name(), "lose");
    }

    #[test]
    fn test_null_surface_accepts_commands() {
        let mut surface = NullSurface;
        surface.set_overlays(&[PayLine::Row(0)]);
        surface.set_overlays(&[]);
        surface.draw_text(TextRegion::Credits, "100");

        let mut audio = NullAudio;
        audio.trigger(AudioCue::Win);
    }
}
