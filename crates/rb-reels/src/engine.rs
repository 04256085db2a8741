//! Reel engine — spin, tick, settle
//!
//! Drives the 3 reels from a spin request through to a settled, readable
//! grid. The engine is the only writer of reel state; callers read the
//! settled grid via [`ReelEngine::result`]. Completion is published on a
//! one-shot channel created per spin, sent exactly once after the last reel
//! (by stagger order) stops.

use crossbeam_channel::{Receiver, Sender, bounded};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use rb_stage::{
    AudioCue, AudioSink, GRID_COLS, Grid, PayLine, RenderSurface, Stage, StageEvent,
};

use crate::reel::Reel;
use crate::timing::TickConfig;

/// Engine contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Result requested while a reel is still in motion.
    #[error("reels have not settled")]
    NotSettled,
    /// Spin requested while a spin is running. Never queued.
    #[error("spin already in progress")]
    SpinInProgress,
}

/// A successfully started spin.
#[derive(Debug)]
pub struct SpinStarted {
    /// One-shot completion signal; receives exactly one message, after the
    /// last reel has settled.
    pub completion: Receiver<()>,
    /// Stages emitted by the start itself.
    pub events: Vec<StageEvent>,
}

/// The 3-reel engine state machine.
pub struct ReelEngine {
    reels: [Reel; GRID_COLS],
    rng: StdRng,
    config: TickConfig,
    /// Global animation clock, in ticks.
    now: u64,
    /// Reels still in motion this spin; completion fires when it hits 0.
    in_flight: u8,
    done_tx: Option<Sender<()>>,
}

impl ReelEngine {
    /// Create with the given timing, seeded from the OS.
    pub fn new(config: TickConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create with a fixed seed, for reproducible sessions and tests.
    pub fn with_seed(config: TickConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: TickConfig, mut rng: StdRng) -> Self {
        let reels = std::array::from_fn(|i| Reel::new(i as u8, &mut rng));
        Self {
            reels,
            rng,
            config,
            now: 0,
            in_flight: 0,
            done_tx: None,
        }
    }

    /// Reseed the RNG mid-session.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn config(&self) -> &TickConfig {
        &self.config
    }

    /// Current tick of the global animation clock.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// True once every reel has settled.
    pub fn is_settled(&self) -> bool {
        self.in_flight == 0
    }

    /// Start a spin: assign each reel its travel target (staggered so reels
    /// settle strictly left to right) and hand back the one-shot completion
    /// receiver. Fails with [`EngineError::SpinInProgress`] while any reel
    /// is in motion.
    pub fn spin(&mut self, audio: &mut dyn AudioSink) -> Result<SpinStarted, EngineError> {
        if self.in_flight > 0 {
            return Err(EngineError::SpinInProgress);
        }

        let mut events = vec![StageEvent::new(Stage::SpinStart, self.now)];
        for reel in &mut self.reels {
            let target = self.config.travel_for(reel.index());
            reel.start(target);
            log::debug!(
                "reel {} spinning, target {} steps",
                reel.index(),
                target
            );
            events.push(StageEvent::new(
                Stage::ReelSpinning {
                    reel_index: reel.index(),
                },
                self.now,
            ));
        }
        self.in_flight = GRID_COLS as u8;

        let (tx, rx) = bounded(1);
        self.done_tx = Some(tx);
        audio.trigger(AudioCue::SpinStart);

        Ok(SpinStarted {
            completion: rx,
            events,
        })
    }

    /// Advance the global clock one tick: every in-motion reel scrolls one
    /// step and reels that reach their target freeze. When the last reel
    /// settles, the settled grid is drawn, `SpinEnd` is emitted and the
    /// completion signal is sent - exactly once per spin.
    pub fn tick(
        &mut self,
        surface: &mut dyn RenderSurface,
        audio: &mut dyn AudioSink,
    ) -> Vec<StageEvent> {
        self.now += 1;
        let mut events = Vec::new();

        for reel in &mut self.reels {
            if !reel.is_spinning() {
                continue;
            }
            let settled = reel.step(&mut self.rng);
            surface.scroll_reel(reel.index(), reel.window(), reel.steps_done());

            if settled {
                log::debug!("reel {} stopped at tick {}", reel.index(), self.now);
                events.push(StageEvent::new(
                    Stage::ReelStop {
                        reel_index: reel.index(),
                        symbols: *reel.window(),
                    },
                    self.now,
                ));
                self.in_flight -= 1;
            }
        }

        if self.in_flight == 0 {
            if let Some(tx) = self.done_tx.take() {
                surface.draw_grid(&self.grid());
                audio.trigger(AudioCue::SpinStop);
                events.push(StageEvent::new(Stage::SpinEnd, self.now));
                let _ = tx.send(());
            }
        }

        events
    }

    /// The settled grid. Fails with [`EngineError::NotSettled`] while any
    /// reel is in motion - a partial grid is never returned.
    pub fn result(&self) -> Result<Grid, EngineError> {
        if self.in_flight > 0 {
            return Err(EngineError::NotSettled);
        }
        Ok(self.grid())
    }

    /// Replace the overlay set with overlays for exactly `lines`; an empty
    /// slice clears everything. Pure rendering side effect, idempotent.
    pub fn highlight_paylines(&mut self, surface: &mut dyn RenderSurface, lines: &[PayLine]) {
        surface.set_overlays(lines);
    }

    fn grid(&self) -> Grid {
        Grid::from_columns(std::array::from_fn(|i| *self.reels[i].window()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rb_stage::{NullAudio, NullSurface};

    fn instant_engine(seed: u64) -> ReelEngine {
        ReelEngine::with_seed(TickConfig::instant(), seed)
    }

    fn run_to_settle(engine: &mut ReelEngine) -> Vec<StageEvent> {
        let mut surface = NullSurface;
        let mut audio = NullAudio;
        let mut events = Vec::new();
        while !engine.is_settled() {
            events.extend(engine.tick(&mut surface, &mut audio));
        }
        events
    }

    #[test]
    fn test_result_before_settle_fails() {
        let mut engine = instant_engine(1);
        engine.spin(&mut NullAudio).unwrap();

        assert_eq!(engine.result(), Err(EngineError::NotSettled));

        run_to_settle(&mut engine);
        assert!(engine.result().is_ok());
    }

    #[test]
    fn test_spin_while_spinning_rejected() {
        let mut engine = instant_engine(2);
        engine.spin(&mut NullAudio).unwrap();

        assert!(matches!(
            engine.spin(&mut NullAudio),
            Err(EngineError::SpinInProgress)
        ));
    }

    #[test]
    fn test_reels_stop_left_to_right() {
        let mut engine = instant_engine(3);
        engine.spin(&mut NullAudio).unwrap();
        let events = run_to_settle(&mut engine);

        let stops: Vec<u8> = events
            .iter()
            .filter_map(|e| match e.stage {
                Stage::ReelStop { reel_index, .. } => Some(reel_index),
                _ => None,
            })
            .collect();
        assert_eq!(stops, vec![0, 1, 2]);

        // Stop ticks strictly increase with the stagger
        let stop_ticks: Vec<u64> = events
            .iter()
            .filter(|e| matches!(e.stage, Stage::ReelStop { .. }))
            .map(|e| e.tick)
            .collect();
        assert!(stop_ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_completion_fires_exactly_once_after_last_stop() {
        let mut engine = instant_engine(4);
        let started = engine.spin(&mut NullAudio).unwrap();

        assert!(started.completion.try_recv().is_err());

        let events = run_to_settle(&mut engine);
        let end_count = events
            .iter()
            .filter(|e| matches!(e.stage, Stage::SpinEnd))
            .count();
        assert_eq!(end_count, 1);

        assert!(started.completion.try_recv().is_ok());
        // One-shot: no second message, sender is gone
        assert!(started.completion.try_recv().is_err());

        // Further ticks stay silent
        let quiet = engine.tick(&mut NullSurface, &mut NullAudio);
        assert!(quiet.is_empty());
    }

    #[test]
    fn test_spin_end_matches_result_grid() {
        let mut engine = instant_engine(5);
        engine.spin(&mut NullAudio).unwrap();
        let events = run_to_settle(&mut engine);
        let grid = engine.result().unwrap();

        for event in &events {
            if let Stage::ReelStop {
                reel_index,
                symbols,
            } = &event.stage
            {
                for (row, &symbol) in symbols.iter().enumerate() {
                    assert_eq!(grid.cell(row, *reel_index as usize), symbol);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let mut a = instant_engine(99);
        let mut b = instant_engine(99);
        a.spin(&mut NullAudio).unwrap();
        b.spin(&mut NullAudio).unwrap();
        run_to_settle(&mut a);
        run_to_settle(&mut b);

        assert_eq!(a.result().unwrap(), b.result().unwrap());
    }
}
