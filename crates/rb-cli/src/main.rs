//! reelbox — terminal slot mini-game

mod term;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use rb_reels::{ReelEngine, Round, RoundError, SpinReport, TickConfig, TickProfile};
use rb_stage::{RenderSurface, TextRegion};

use crate::term::{LogAudio, TermSurface};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    Normal,
    Turbo,
    Instant,
}

impl From<ProfileArg> for TickProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Normal => TickProfile::Normal,
            ProfileArg::Turbo => TickProfile::Turbo,
            ProfileArg::Instant => TickProfile::Instant,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "reelbox", about = "3x3 slot mini-game", version)]
struct Args {
    /// Autoplay this many spins, then exit (interactive when omitted)
    #[arg(long)]
    spins: Option<u64>,

    /// Seed the RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Timing profile
    #[arg(long, value_enum, default_value = "normal")]
    profile: ProfileArg,

    /// Starting credits
    #[arg(long, default_value_t = rb_reels::STARTING_CREDITS)]
    credits: u64,

    /// Print session stats as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env().init();
    let args = Args::parse();

    let config = TickConfig::from_profile(args.profile.into());
    let mut engine = match args.seed {
        Some(seed) => ReelEngine::with_seed(config, seed),
        None => ReelEngine::new(config),
    };
    let mut round = Round::new(args.credits);
    // Animate transit frames only when the tick clock has real duration
    let mut surface = TermSurface::new(config.tick_ms > 0 && args.spins.is_none());
    let mut audio = LogAudio;

    surface.draw_text(TextRegion::Title, "REELBOX");
    surface.draw_text(TextRegion::Bet, &round.state().bet.to_string());

    match args.spins {
        Some(count) => autoplay(count, &mut round, &mut engine, &mut surface, &mut audio)?,
        None => interactive(&mut round, &mut engine, &mut surface, &mut audio)?,
    }

    surface.draw_text(TextRegion::Credits, &round.credits().to_string());
    let stats = round.stats();
    if args.json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        surface.draw_text(
            TextRegion::Message,
            &format!(
                "session: {} spins, rtp {:.1}%, hit rate {:.1}%",
                stats.total_spins,
                stats.rtp(),
                stats.hit_rate()
            ),
        );
    }
    Ok(())
}

/// Run one spin to completion on the cooperative tick clock.
fn spin_to_settle(
    round: &mut Round,
    engine: &mut ReelEngine,
    surface: &mut TermSurface,
    audio: &mut LogAudio,
) -> anyhow::Result<SpinReport> {
    let tick_ms = engine.config().tick_ms;
    loop {
        engine.tick(surface, audio);
        if let Some(report) = round
            .poll_spin_end(engine, surface, audio)
            .context("engine broke the settle contract")?
        {
            return Ok(report);
        }
        if tick_ms > 0 {
            thread::sleep(Duration::from_millis(tick_ms));
        }
    }
}

fn log_stages(events: &[rb_stage::StageEvent]) {
    for event in events {
        log::debug!("stage {} at tick {}", event.type_name(), event.tick);
    }
}

fn show_report(report: &SpinReport, round: &Round, surface: &mut TermSurface) {
    log_stages(&report.events);
    for message in &report.outcome.messages {
        surface.draw_text(TextRegion::Message, message);
    }
    surface.draw_text(TextRegion::Credits, &round.credits().to_string());
}

fn autoplay(
    count: u64,
    round: &mut Round,
    engine: &mut ReelEngine,
    surface: &mut TermSurface,
    audio: &mut LogAudio,
) -> anyhow::Result<()> {
    for n in 1..=count {
        match round.request_spin(engine, surface, audio) {
            Ok(events) => log_stages(&events),
            Err(err @ RoundError::InsufficientCredits { .. }) => {
                surface.draw_text(TextRegion::Message, &err.to_string());
                break;
            }
            Err(err) => return Err(err.into()),
        }
        let report = spin_to_settle(round, engine, surface, audio)?;
        log::info!(
            "spin {}/{}: win {} credits, balance {}",
            n,
            count,
            report.outcome.total_win,
            round.credits()
        );
        show_report(&report, round, surface);
    }
    Ok(())
}

fn interactive(
    round: &mut Round,
    engine: &mut ReelEngine,
    surface: &mut TermSurface,
    audio: &mut LogAudio,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        surface.draw_text(TextRegion::Credits, &round.credits().to_string());
        print!("spin? [Enter to spin, q to quit] ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        match line.trim() {
            "" | "spin" => {}
            "q" | "quit" | "exit" => break,
            other => {
                surface.draw_text(TextRegion::Message, &format!("unknown command: {other}"));
                continue;
            }
        }

        match round.request_spin(engine, surface, audio) {
            Ok(events) => log_stages(&events),
            Err(err) => {
                // Both rejections are user-recoverable notices; state is unchanged
                surface.draw_text(TextRegion::Message, &err.to_string());
                if matches!(err, RoundError::InsufficientCredits { .. }) {
                    surface.draw_text(TextRegion::Message, "game over");
                    break;
                }
                continue;
            }
        }

        let report = spin_to_settle(round, engine, surface, audio)?;
        show_report(&report, round, surface);
    }
    Ok(())
}
