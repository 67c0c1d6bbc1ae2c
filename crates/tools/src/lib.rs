//! Shared plumbing for the replay and fuzz binaries: config loading, a seeded autoplayer and
//! board invariant checks.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::Serialize;
use squish_core::{
    Clock, GameConfig, InputJournal, ManualClock, MonotonicClock, Occupant, Pos, Session,
    SessionState, TickInput, TickOutcome,
};

/// Wall time between autoplay ticks.
pub const FRAME: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Pacing {
    /// Every tick lands exactly one frame after the previous one.
    #[default]
    Synthetic,
    /// Sleeps a frame between ticks and stamps them with the monotonic clock.
    Realtime,
}

/// Reads a TOML config; missing keys fall back to the defaults. `None` means all defaults.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: GameConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate().map_err(|e| anyhow::anyhow!("Invalid config {}: {e:?}", path.display()))?;
    Ok(config)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn read_journal(path: &Path) -> Result<InputJournal> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| "Failed to deserialize journal JSON")
}

/// Picks inputs from its own seeded stream, biased toward movement.
pub struct AutoPlayer {
    rng: ChaCha8Rng,
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next_input(&mut self, session: &Session) -> TickInput {
        match session.state() {
            SessionState::Playing => match self.rng.next_u64() % 20 {
                0 => TickInput::toggle_pause(),
                1..=12 => {
                    let directions = session.config().neighbors.directions();
                    let p = self.rng.next_u64() as usize % directions.len();
                    TickInput::movement(directions[p])
                }
                _ => TickInput::default(),
            },
            SessionState::Paused => TickInput::toggle_pause(),
            SessionState::LevelComplete | SessionState::GameOver => TickInput::proceed(),
        }
    }
}

#[derive(Debug)]
pub struct AutoplayReport {
    pub journal: InputJournal,
    pub ticks: u64,
    pub final_state: SessionState,
    pub level: u32,
    pub score: u64,
    pub best_score: u64,
    pub final_snapshot_hash: u64,
}

/// Plays `ticks` frames, checking invariants after each one.
pub fn autoplay(
    seed: u64,
    ticks: u64,
    config: GameConfig,
    pacing: Pacing,
) -> Result<(AutoplayReport, Session)> {
    let mut journal = InputJournal::new(seed, config.clone());
    let mut session = Session::new(seed, config, Duration::ZERO)
        .map_err(|e| anyhow::anyhow!("Invalid config: {e:?}"))?;
    let mut player = AutoPlayer::new(seed);
    let mut best_score = 0;
    let mut clock = ManualClock::default();
    let wall = MonotonicClock::start();

    for step in 1..=ticks {
        match pacing {
            Pacing::Synthetic => clock.advance(FRAME),
            Pacing::Realtime => {
                thread::sleep(FRAME);
                clock.set(wall.now());
            }
        }
        let now = clock.now();
        let input = player.next_input(&session);
        journal.append(now, input);
        if session.tick(input, now) == TickOutcome::Quit {
            break;
        }
        best_score = best_score.max(session.score());
        check_invariants(&session).with_context(|| format!("seed {seed}, tick {step}"))?;
    }

    let report = AutoplayReport {
        journal,
        ticks: session.current_tick(),
        final_state: session.state(),
        level: session.level(),
        score: session.score(),
        best_score,
        final_snapshot_hash: session.snapshot_hash(),
    };
    Ok((report, session))
}

pub fn check_invariants(session: &Session) -> Result<()> {
    let board = session.board();
    for pos in board.extent().cells() {
        if board.is_border(pos) && board.occupant(pos) != Occupant::Wall {
            bail!("Invariant failed: border broken at {pos:?}");
        }
    }

    let mut taken: BTreeSet<Pos> = board.blocks().map(|(pos, _)| pos).collect();
    taken.extend(board.walls());
    for pos in board.hunters().map(|h| h.pos).chain(board.eggs().map(|e| e.pos)) {
        if !taken.insert(pos) {
            bail!("Invariant failed: two occupants at {pos:?}");
        }
    }
    if let Some(hero) = board.hero()
        && taken.contains(&hero)
        && session.state() != SessionState::GameOver
    {
        bail!("Invariant failed: hero shares {hero:?}");
    }
    Ok(())
}
