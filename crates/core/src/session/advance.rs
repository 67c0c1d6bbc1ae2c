//! The per-tick flow: input, hero move, gated enemy pass, gated hatch poll, collision and
//! level completion, in that order.

use super::*;
use crate::hatching::poll_eggs;
use crate::levelgen::farthest_safe_cell;
use crate::levelgen::progression::level_clear_bonus;
use crate::movement::attempt_move;
use crate::pursuit::run_pursuit;

impl Session {
    /// Runs one tick at wall time `now`. An input with nothing set is a no-op frame.
    pub fn tick(&mut self, input: TickInput, now: Duration) -> TickOutcome {
        self.tick += 1;
        if input.quit {
            return TickOutcome::Quit;
        }

        match self.state {
            SessionState::Playing if input.toggle_pause => {
                self.play_clock.pause(now);
                self.state = SessionState::Paused;
                self.log.push(LogEvent::Paused);
            }
            SessionState::Playing => self.play(input, now),
            SessionState::Paused => {
                if input.toggle_pause {
                    self.play_clock.resume(now);
                    self.state = SessionState::Playing;
                    self.log.push(LogEvent::Resumed);
                }
            }
            SessionState::LevelComplete => {
                if input.proceed {
                    self.advance_level(now);
                }
            }
            SessionState::GameOver => {
                if input.proceed {
                    self.restart(now);
                }
            }
        }
        TickOutcome::Continue(self.state)
    }

    fn play(&mut self, input: TickInput, now: Duration) {
        let play = self.play_clock.play_time(now);

        if let Some(direction) = input.movement
            && self.config.neighbors.allows(direction)
        {
            self.move_hero(direction);
        }

        if self.enemy_gate.fire(play) {
            let report = run_pursuit(&mut self.board, &self.config, &mut self.pursuit_rng);
            for squish in report.squished {
                self.log.push(LogEvent::Squished {
                    pos: squish.pos,
                    victim: squish.victim,
                    by_hero: false,
                });
            }
        }

        if self.hatch_gate.fire(play) {
            let base_delay = self.config.egg_base_delay;
            for pos in poll_eggs(&mut self.board, play, base_delay, &mut self.hatch_rng) {
                self.log.push(LogEvent::EggHatched { pos });
            }
        }

        if self.board.hunter_on_hero().is_some() {
            self.hero_caught();
            if self.state == SessionState::GameOver {
                return;
            }
        }

        if self.board.enemies_remaining() == 0 {
            self.score += level_clear_bonus(&self.config, self.level);
            self.state = SessionState::LevelComplete;
            self.log.push(LogEvent::LevelCompleted {
                level: self.level,
                squished: self.level_squishes,
                moves: self.level_moves,
                elapsed: play.saturating_sub(self.level_started_at),
            });
        }
    }

    fn move_hero(&mut self, direction: Direction) {
        let Some(from) = self.board.hero() else {
            return;
        };
        let outcome = attempt_move(&mut self.board, from, direction);
        let Some(to) = outcome.destination() else {
            return;
        };
        self.moves += 1;
        self.level_moves += 1;
        self.log.push(LogEvent::HeroMoved { from, to });

        if let MoveOutcome::PushedAndMoved { blocks, squished, .. } = outcome {
            let mut chain_end = to;
            for _ in 0..blocks + squished.len() {
                chain_end = chain_end.step(direction);
            }
            self.log.push(LogEvent::BlocksPushed { from: to, to: chain_end, blocks });
            for squish in squished {
                self.score += self.config.squish_points;
                self.squish_count += 1;
                self.level_squishes += 1;
                self.log.push(LogEvent::Squished {
                    pos: squish.pos,
                    victim: squish.victim,
                    by_hero: true,
                });
            }
        }
    }

    fn hero_caught(&mut self) {
        let Some(pos) = self.board.hero() else {
            return;
        };
        self.lives = self.lives.saturating_sub(1);
        self.log.push(LogEvent::HeroCaught { pos, lives_left: self.lives });

        let respawn = match self.lives {
            0 => None,
            _ => farthest_safe_cell(&self.board, &self.config),
        };
        match respawn {
            Some(cell) => {
                self.board.move_hero(cell);
                self.log.push(LogEvent::HeroRespawned { pos: cell });
            }
            None => {
                self.state = SessionState::GameOver;
                self.log.push(LogEvent::GameOver { score: self.score });
            }
        }
    }
}
