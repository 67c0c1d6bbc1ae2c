//! Session construction and game restarts.
//! This module exists to isolate initialization from the per-tick flow.

use super::*;
use crate::config::ConfigError;
use crate::levelgen::STARTING_LEVEL;
use crate::random::{HATCH_STREAM, PURSUIT_STREAM, mix_seed_stream};

impl Session {
    pub fn new(seed: u64, config: GameConfig, now: Duration) -> Result<Self, ConfigError> {
        config.validate()?;
        let run_seed = mix_seed_stream(seed, 0);
        let mut session = Self {
            seed,
            run: 0,
            board: Board::new(config.width, config.height),
            state: SessionState::Playing,
            level: STARTING_LEVEL,
            lives: config.starting_lives,
            score: 0,
            squish_count: 0,
            moves: 0,
            level_squishes: 0,
            level_moves: 0,
            level_started_at: Duration::ZERO,
            tick: 0,
            play_clock: PlayClock::new(now),
            enemy_gate: IntervalGate::new(config.enemy_move_delay, Duration::ZERO),
            hatch_gate: IntervalGate::new(config.hatch_poll_interval, Duration::ZERO),
            pursuit_rng: RandomStream::for_stream(run_seed, PURSUIT_STREAM),
            hatch_rng: RandomStream::for_stream(run_seed, HATCH_STREAM),
            log: Vec::new(),
            config,
        };
        session.install_level(STARTING_LEVEL, now);
        Ok(session)
    }

    /// Starts over after `GameOver` with fresh levels; the log is kept.
    pub(super) fn restart(&mut self, now: Duration) {
        self.run += 1;
        let run_seed = self.run_seed();
        self.lives = self.config.starting_lives;
        self.score = 0;
        self.squish_count = 0;
        self.moves = 0;
        self.play_clock = PlayClock::new(now);
        self.pursuit_rng = RandomStream::for_stream(run_seed, PURSUIT_STREAM);
        self.hatch_rng = RandomStream::for_stream(run_seed, HATCH_STREAM);
        self.install_level(STARTING_LEVEL, now);
    }

    pub(super) fn run_seed(&self) -> u64 {
        mix_seed_stream(self.seed, self.run)
    }
}
