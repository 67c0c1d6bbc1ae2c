//! Shared fixtures for the session test suites.
//! Sessions are built normally and then handed a hand-drawn board.

use super::*;
use crate::test_support::board_with_eggs_at;

/// Hunters never move and eggs never hatch unless a test turns the gates down.
pub(super) fn quiet_config() -> GameConfig {
    GameConfig {
        enemy_move_delay: Duration::from_secs(3600),
        hatch_poll_interval: Duration::from_secs(3600),
        ..GameConfig::default()
    }
}

pub(super) fn session_on(rows: &[&str], config: GameConfig) -> Session {
    let mut session = Session::new(1, config, Duration::ZERO).expect("valid config");
    session.board = board_with_eggs_at(rows, session.config.egg_base_delay);
    session.log.clear();
    session
}

pub(super) const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
