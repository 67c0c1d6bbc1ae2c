//! Level installation: generation, counter resets and the level-start log entry.
//! This module exists to isolate board replacement from the tick loop.

use super::*;
use crate::levelgen::{LevelPlan, generate_level};
use crate::random::{PLACEMENT_STREAM, derive_level_seed};

impl Session {
    pub(super) fn install_level(&mut self, level: u32, now: Duration) {
        let play = self.play_clock.play_time(now);
        let plan = LevelPlan::for_level(&self.config, level, play);
        let mut rng =
            RandomStream::for_stream(derive_level_seed(self.run_seed(), level), PLACEMENT_STREAM);
        self.board = generate_level(&self.config, &plan, &mut rng);

        self.level = level;
        self.level_squishes = 0;
        self.level_moves = 0;
        self.level_started_at = play;
        self.enemy_gate.reset(play);
        self.hatch_gate.reset(play);
        self.state = SessionState::Playing;
        self.log.push(LogEvent::LevelStarted {
            level,
            hunters: self.board.hunter_count(),
            eggs: self.board.egg_count(),
            hero: self.board.hero(),
        });
    }

    pub(super) fn advance_level(&mut self, now: Duration) {
        self.install_level(self.level + 1, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_level_scales_enemy_counts() {
        let config = GameConfig {
            initial_hunters: 1,
            hunters_per_level: 2,
            initial_eggs: 0,
            eggs_per_level: 1,
            ..GameConfig::default()
        };
        let mut session = Session::new(5, config, Duration::ZERO).expect("valid config");
        session.advance_level(Duration::from_secs(3));
        assert_eq!(session.level(), 2);
        assert_eq!(session.board().hunter_count(), 3);
        assert_eq!(session.board().egg_count(), 1);
        assert!(matches!(
            session.log().last(),
            Some(LogEvent::LevelStarted { level: 2, hunters: 3, eggs: 1, hero: Some(_) })
        ));
    }

    #[test]
    fn levels_differ_between_indices() {
        let mut session =
            Session::new(5, GameConfig::default(), Duration::ZERO).expect("valid config");
        let first = session.board().snapshot();
        session.advance_level(Duration::ZERO);
        assert_ne!(first, session.board().snapshot());
    }
}
