//! Terminal render surface and logging audio sink

use rb_stage::{
    AudioCue, AudioSink, GRID_COLS, GRID_ROWS, Grid, PayLine, RenderSurface, Symbol, TextRegion,
};

/// Text renderer for the 3×3 grid.
///
/// Draws the settled grid as an ASCII box; winning cells are bracketed once
/// overlays arrive. With `animate` on, each scroll step of the first reel
/// prints a transit frame of all three cosmetic windows.
pub struct TermSurface {
    last_grid: Option<Grid>,
    overlays: Vec<PayLine>,
    animate: bool,
    transit: [[Symbol; GRID_ROWS]; GRID_COLS],
}

impl TermSurface {
    pub fn new(animate: bool) -> Self {
        Self {
            last_grid: None,
            overlays: Vec::new(),
            animate,
            transit: [[Symbol::Cherry; GRID_ROWS]; GRID_COLS],
        }
    }

    fn highlighted(&self, row: usize, col: usize) -> bool {
        self.overlays
            .iter()
            .any(|line| line.cells().contains(&(row, col)))
    }

    fn print_grid(&self) {
        let Some(grid) = &self.last_grid else { return };

        println!("+{}+", "-".repeat(GRID_COLS * 4));
        for row in 0..GRID_ROWS {
            let mut line = String::from("|");
            for col in 0..GRID_COLS {
                let glyph = grid.cell(row, col).glyph();
                if self.highlighted(row, col) {
                    line.push_str(&format!("[{glyph}] "));
                } else {
                    line.push_str(&format!(" {glyph}  "));
                }
            }
            line.push('|');
            println!("{line}");
        }
        println!("+{}+", "-".repeat(GRID_COLS * 4));
    }
}

impl RenderSurface for TermSurface {
    fn draw_grid(&mut self, grid: &Grid) {
        self.last_grid = Some(*grid);
        self.print_grid();
    }

    fn scroll_reel(&mut self, reel_index: u8, window: &[Symbol; GRID_ROWS], _step: u32) {
        self.transit[reel_index as usize] = *window;
        if self.animate && reel_index == 0 {
            let frame: Vec<String> = self
                .transit
                .iter()
                .map(|w| w.iter().map(|s| s.glyph()).collect())
                .collect();
            println!("  ~ {} ~", frame.join(" | "));
        }
    }

    fn set_overlays(&mut self, lines: &[PayLine]) {
        self.overlays = lines.to_vec();
        if !self.overlays.is_empty() {
            self.print_grid();
        }
    }

    fn draw_text(&mut self, region: TextRegion, text: &str) {
        match region {
            TextRegion::Title => println!("=== {text} ==="),
            TextRegion::Credits => println!("credits: {text}"),
            TextRegion::Bet => println!("bet: {text}"),
            TextRegion::Message => println!("{text}"),
        }
    }
}

/// Sink that reports cues through the log. Fire-and-forget by construction.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn trigger(&mut self, cue: AudioCue) {
        log::info!("audio: {}", cue.name());
    }
}
