//! The session owns one game: its board, counters, pacing gates and event log.
//! Callers drive it with `tick(input, now)` and read snapshots back; nothing outside this
//! module mutates the board.

use std::time::Duration;

use crate::board::{Board, BoardSnapshot};
use crate::clock::{IntervalGate, PlayClock};
use crate::config::GameConfig;
use crate::random::RandomStream;
use crate::types::*;

mod advance;
mod bootstrap;
mod hash;
mod level_transition;

#[cfg(test)]
mod test_support;

pub struct Session {
    seed: u64,
    /// Games started from this seed so far; each one gets different levels.
    run: u64,
    config: GameConfig,
    board: Board,
    state: SessionState,
    level: u32,
    lives: u32,
    score: u64,
    squish_count: u32,
    moves: u64,
    level_squishes: u32,
    level_moves: u64,
    level_started_at: Duration,
    tick: u64,
    play_clock: PlayClock,
    enemy_gate: IntervalGate,
    hatch_gate: IntervalGate,
    pursuit_rng: RandomStream,
    hatch_rng: RandomStream,
    log: Vec<LogEvent>,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub state: SessionState,
    pub level: u32,
    pub lives: u32,
    pub score: u64,
    pub squish_count: u32,
    pub moves: u64,
    pub elapsed: Duration,
}

impl Session {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn squish_count(&self) -> u32 {
        self.squish_count
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Play time since the game started, paused intervals excluded.
    pub fn play_time(&self, now: Duration) -> Duration {
        self.play_clock.play_time(now)
    }

    pub fn snapshot(&self, now: Duration) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.snapshot(),
            state: self.state,
            level: self.level,
            lives: self.lives,
            score: self.score,
            squish_count: self.squish_count,
            moves: self.moves,
            elapsed: self.play_time(now),
        }
    }

    pub fn score_record(&self, player: &str, timestamp_unix_ms: u64) -> ScoreRecord {
        ScoreRecord {
            player: player.to_string(),
            score: self.score,
            level: self.level,
            timestamp_unix_ms,
        }
    }
}
