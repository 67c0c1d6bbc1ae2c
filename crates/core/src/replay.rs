use std::time::Duration;

use crate::clock::{Clock, ManualClock};
use crate::config::ConfigError;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::session::Session;
use crate::types::{SessionState, TickOutcome};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    UnsupportedFormat { found: u16 },
    InvalidConfig(ConfigError),
    OutOfOrderInput { seq: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_state: SessionState,
    pub final_tick: u64,
    pub level: u32,
    pub score: u64,
    pub quit: bool,
    pub final_snapshot_hash: u64,
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat { found: journal.format_version });
    }
    let mut clock = ManualClock::default();
    let mut session = Session::new(journal.seed, journal.config.clone(), clock.now())
        .map_err(ReplayError::InvalidConfig)?;

    let mut previous: Option<(u64, u64)> = None;
    let mut quit = false;
    for record in &journal.inputs {
        if let Some((seq, at_ms)) = previous
            && (record.seq <= seq || record.at_ms < at_ms)
        {
            return Err(ReplayError::OutOfOrderInput { seq: record.seq });
        }
        previous = Some((record.seq, record.at_ms));

        clock.set(Duration::from_millis(record.at_ms));
        if session.tick(record.input, clock.now()) == TickOutcome::Quit {
            quit = true;
            break;
        }
    }

    Ok(ReplayResult {
        final_state: session.state(),
        final_tick: session.current_tick(),
        level: session.level(),
        score: session.score(),
        quit,
        final_snapshot_hash: session.snapshot_hash(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::types::{Direction, TickInput};

    fn play_and_record(seed: u64, ticks: u64) -> (Session, InputJournal) {
        let config = GameConfig::default();
        let mut session = Session::new(seed, config.clone(), Duration::ZERO).expect("valid config");
        let mut journal = InputJournal::new(seed, config);
        let directions = Direction::ORTHOGONAL;
        for step in 0..ticks {
            let now = Duration::from_millis(step * 200);
            let input = match step % 4 {
                0 => TickInput::movement(directions[(step / 4) as usize % directions.len()]),
                _ => TickInput::default(),
            };
            journal.append(now, input);
            if session.tick(input, now) == TickOutcome::Quit {
                break;
            }
        }
        (session, journal)
    }

    #[test]
    fn replay_matches_the_recorded_session() {
        let (session, journal) = play_and_record(2024, 300);
        let replay = replay_to_end(&journal).expect("replay");
        assert_eq!(replay.final_snapshot_hash, session.snapshot_hash());
        assert_eq!(replay.final_tick, 300);
        assert_eq!(replay.final_state, session.state());
        assert!(!replay.quit);
    }

    #[test]
    fn replay_stops_at_quit() {
        let mut journal = InputJournal::new(1, GameConfig::default());
        journal.append(Duration::ZERO, TickInput::default());
        journal.append(Duration::from_millis(10), TickInput::quit());
        journal.append(Duration::from_millis(20), TickInput::movement(Direction::UP));
        let replay = replay_to_end(&journal).expect("replay");
        assert!(replay.quit);
        assert_eq!(replay.final_tick, 2);
    }

    #[test]
    fn backwards_timestamps_are_rejected() {
        let mut journal = InputJournal::new(1, GameConfig::default());
        journal.append(Duration::from_millis(50), TickInput::default());
        journal.append(Duration::from_millis(40), TickInput::default());
        assert_eq!(replay_to_end(&journal), Err(ReplayError::OutOfOrderInput { seq: 1 }));
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = GameConfig { width: 2, ..GameConfig::default() };
        let journal = InputJournal::new(1, config);
        assert_eq!(
            replay_to_end(&journal),
            Err(ReplayError::InvalidConfig(ConfigError::BoardTooSmall { width: 2, height: 20 }))
        );
    }
}
