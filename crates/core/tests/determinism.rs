use std::time::Duration;

use squish_core::{
    Direction, GameConfig, InputJournal, LogEvent, ReplayError, Session, TickInput, TickOutcome,
    replay_to_end,
};

fn scripted_journal(seed: u64, ticks: u64) -> InputJournal {
    let script = [Direction::RIGHT, Direction::DOWN, Direction::LEFT, Direction::UP];
    let mut journal = InputJournal::new(seed, GameConfig::default());
    for step in 0..ticks {
        let input = match step % 4 {
            0 => TickInput::movement(script[(step / 4) as usize % script.len()]),
            _ => TickInput::default(),
        };
        journal.append(Duration::from_millis(step * 125), input);
    }
    journal
}

#[test]
fn test_determinism_identical_journals_produce_same_hash() {
    let result1 = replay_to_end(&scripted_journal(12345, 400)).expect("Replay 1 failed");
    let result2 = replay_to_end(&scripted_journal(12345, 400)).expect("Replay 2 failed");

    assert_eq!(
        result1.final_snapshot_hash, result2.final_snapshot_hash,
        "Identical runs must produce identical hashes"
    );
    assert_eq!(result1, result2);
    assert_eq!(result1.final_tick, 400);
}

#[test]
fn test_determinism_different_seeds_produce_different_hashes() {
    let result1 = replay_to_end(&scripted_journal(123, 50)).expect("Replay 1 failed");
    let result2 = replay_to_end(&scripted_journal(456, 50)).expect("Replay 2 failed");

    assert_ne!(result1.final_snapshot_hash, result2.final_snapshot_hash);
}

#[test]
fn test_replay_stops_at_recorded_quit() {
    let mut journal = scripted_journal(7, 10);
    journal.append(Duration::from_secs(5), TickInput::quit());
    journal.append(Duration::from_secs(6), TickInput::movement(Direction::UP));

    let result = replay_to_end(&journal).expect("replay");
    assert!(result.quit);
    assert_eq!(result.final_tick, 11);
}

#[test]
fn test_replay_rejects_time_going_backwards() {
    let mut journal = InputJournal::new(9, GameConfig::default());
    journal.append(Duration::from_millis(500), TickInput::default());
    journal.append(Duration::from_millis(400), TickInput::default());

    assert_eq!(replay_to_end(&journal), Err(ReplayError::OutOfOrderInput { seq: 1 }));
}

#[test]
fn test_deterministic_smoke_fixed_seed_stable_log_sequence() {
    fn run_trace(seed: u64) -> Vec<String> {
        let mut session =
            Session::new(seed, GameConfig::default(), Duration::ZERO).expect("valid config");
        let mut trace = Vec::new();
        let mut seen_logs = 0usize;

        for step in 1..=200_u64 {
            let input = match step % 5 {
                0 => TickInput::movement(Direction::RIGHT),
                1 => TickInput::movement(Direction::DOWN),
                _ => TickInput::default(),
            };
            if session.tick(input, Duration::from_millis(step * 200)) == TickOutcome::Quit {
                break;
            }

            let logs = session.log();
            for event in &logs[seen_logs..] {
                trace.push(format!("{event:?}"));
            }
            seen_logs = logs.len();
        }

        trace.push(format!("hash={}", session.snapshot_hash()));
        trace
    }

    let left = run_trace(12345);
    let right = run_trace(12345);
    assert_eq!(left, right, "fixed-seed trace should be stable");
    assert!(left[0].starts_with("LevelStarted"));
}

#[test]
fn test_level_started_is_logged_once_per_fresh_session() {
    let session = Session::new(77, GameConfig::default(), Duration::ZERO).expect("valid config");
    let starts =
        session.log().iter().filter(|event| matches!(event, LogEvent::LevelStarted { .. })).count();
    assert_eq!(starts, 1);
}
