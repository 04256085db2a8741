//! Round controller — credits, spin-lock, payout
//!
//! Owns the session's `RoundState` and sequences a spin end-to-end: validate
//! and debit, start the engine, consume the one-shot completion signal,
//! evaluate, credit, highlight. The controller never mutates reel state; it
//! only reads the settled grid.

use crossbeam_channel::{Receiver, TryRecvError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rb_stage::{AudioCue, AudioSink, Grid, RenderSurface, Stage, StageEvent};

use crate::engine::{EngineError, ReelEngine};
use crate::paytable::{BET_PER_SPIN, LineWin, evaluate};
use crate::stats::SessionStats;

/// Credits a fresh session starts with.
pub const STARTING_CREDITS: u64 = 100;

/// Rejected spin requests. State is unchanged on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("insufficient credits: have {credits}, bet is {bet}")]
    InsufficientCredits { credits: u64, bet: u64 },
    #[error("spin already in progress")]
    SpinInProgress,
}

/// The result of one settled spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub grid: Grid,
    /// Winning lines in evaluation order
    pub line_wins: Vec<LineWin>,
    pub total_win: u64,
    /// Player-facing messages, one per winning line (or a single loss notice)
    pub messages: Vec<String>,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }
}

/// Mutable UI state of the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub credits: u64,
    pub bet: u64,
    pub locked: bool,
    pub last_outcome: Option<Outcome>,
}

/// A settled spin as reported by [`Round::poll_spin_end`].
#[derive(Debug, Clone)]
pub struct SpinReport {
    pub outcome: Outcome,
    /// Evaluation/presentation stages, for logging and front-end routing
    pub events: Vec<StageEvent>,
}

/// The round controller.
pub struct Round {
    state: RoundState,
    stats: SessionStats,
    /// Completion receiver of the spin in flight, consumed exactly once.
    pending: Option<Receiver<()>>,
}

impl Round {
    pub fn new(starting_credits: u64) -> Self {
        Self {
            state: RoundState {
                credits: starting_credits,
                bet: BET_PER_SPIN,
                locked: false,
                last_outcome: None,
            },
            stats: SessionStats::default(),
            pending: None,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn credits(&self) -> u64 {
        self.state.credits
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked
    }

    /// Validate and start a spin: debit the bet, set the spin-lock, clear
    /// highlights, start the engine. On failure nothing changes.
    pub fn request_spin(
        &mut self,
        engine: &mut ReelEngine,
        surface: &mut dyn RenderSurface,
        audio: &mut dyn AudioSink,
    ) -> Result<Vec<StageEvent>, RoundError> {
        if self.state.locked {
            return Err(RoundError::SpinInProgress);
        }
        if self.state.credits < self.state.bet {
            return Err(RoundError::InsufficientCredits {
                credits: self.state.credits,
                bet: self.state.bet,
            });
        }

        let started = engine
            .spin(audio)
            .map_err(|_| RoundError::SpinInProgress)?;
        engine.highlight_paylines(surface, &[]);

        self.state.credits -= self.state.bet;
        self.state.locked = true;
        self.pending = Some(started.completion);
        log::debug!("spin started, credits {}", self.state.credits);

        Ok(started.events)
    }

    /// Consume the completion signal if it has fired. Runs the settle path
    /// exactly once per spin: read the grid, evaluate, credit any win,
    /// request highlights, release the lock.
    ///
    /// Returns `Ok(None)` while the spin is still running (or none is).
    /// An [`EngineError`] here is a broken engine contract and is fatal.
    pub fn poll_spin_end(
        &mut self,
        engine: &mut ReelEngine,
        surface: &mut dyn RenderSurface,
        audio: &mut dyn AudioSink,
    ) -> Result<Option<SpinReport>, EngineError> {
        let Some(rx) = &self.pending else {
            return Ok(None);
        };
        match rx.try_recv() {
            Ok(()) => {}
            Err(TryRecvError::Empty) => return Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                return Err(EngineError::NotSettled);
            }
        }
        self.pending = None;

        let grid = engine.result()?;
        let eval = evaluate(&grid);
        let lines = eval.winning_lines();

        let mut events = vec![StageEvent::new(Stage::EvaluateWins, engine.now())];
        let messages;
        if eval.is_win() {
            self.state.credits += eval.total_win;
            events.push(StageEvent::new(
                Stage::WinPresent {
                    amount: eval.total_win,
                    line_count: eval.line_wins.len() as u8,
                },
                engine.now(),
            ));
            for win in &eval.line_wins {
                events.push(StageEvent::new(
                    Stage::WinLineShow {
                        line: win.line,
                        amount: win.amount,
                    },
                    engine.now(),
                ));
            }
            messages = eval.line_wins.iter().map(|w| w.message()).collect();
            audio.trigger(AudioCue::Win);
            log::info!("win: {} credits over {} lines", eval.total_win, lines.len());
        } else {
            messages = vec!["no win".to_string()];
            audio.trigger(AudioCue::Lose);
        }

        engine.highlight_paylines(surface, &lines);
        self.state.locked = false;

        let outcome = Outcome {
            grid,
            line_wins: eval.line_wins,
            total_win: eval.total_win,
            messages,
        };
        self.stats.record(self.state.bet, &outcome);
        self.state.last_outcome = Some(outcome.clone());

        Ok(Some(SpinReport { outcome, events }))
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(STARTING_CREDITS)
    }
}
