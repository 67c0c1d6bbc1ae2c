//! Egg to Crusher transitions. An egg is ready `egg_base_delay` after it was laid; on the
//! first poll at or past that point it draws a jitter in `0..=egg_base_delay` and hatches once
//! the jitter has also elapsed.

use std::time::Duration;

use crate::board::Board;
use crate::random::RandomStream;
use crate::types::Pos;

/// Hatches every egg whose deadline has passed at play time `now`. Eggs are visited in
/// row-major order so jitter draws are reproducible.
pub fn poll_eggs(
    board: &mut Board,
    now: Duration,
    base_delay: Duration,
    rng: &mut RandomStream,
) -> Vec<Pos> {
    let mut hatched = Vec::new();
    for id in board.egg_ids() {
        let Some(egg) = board.egg_mut(id) else {
            continue;
        };
        if now < egg.ready_at {
            continue;
        }
        let ready_at = egg.ready_at;
        let jitter = *egg.jitter.get_or_insert_with(|| rng.millis_up_to(base_delay));
        if now < ready_at + jitter {
            continue;
        }
        let pos = egg.pos;
        if board.hatch(id).is_some() {
            hatched.push(pos);
        }
    }
    hatched
}
