//! One enemy-move pass. Every hunter decides from the same frozen copy of the board, in
//! (row, col) order of its starting cell; a target cell can be claimed by one hunter per pass.
//! Plain steps are committed before pushes, and pushes go through `movement::attempt_move`.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::config::GameConfig;
use crate::movement::attempt_move;
use crate::pathfinding::shortest_path;
use crate::random::RandomStream;
use crate::types::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PursuitReport {
    pub moved: usize,
    /// Hunters and eggs crushed by Crusher pushes during this pass.
    pub squished: Vec<Squish>,
}

#[derive(Clone, Copy, Debug)]
struct Intent {
    hunter: HunterId,
    direction: Direction,
    pushes: bool,
}

pub fn run_pursuit(
    board: &mut Board,
    config: &GameConfig,
    rng: &mut RandomStream,
) -> PursuitReport {
    let mut report = PursuitReport::default();
    let Some(hero) = board.hero() else {
        return report;
    };
    let frozen = board.clone();
    let mut claimed = BTreeSet::new();
    let mut intents = Vec::new();

    for id in frozen.hunters_in_scan_order() {
        let Some(hunter) = frozen.hunter(id) else {
            continue;
        };
        let target = match hunter.kind {
            HunterKind::Chaser => chaser_step(&frozen, config, hunter.pos, hero),
            HunterKind::Crusher => crusher_step(&frozen, config, hunter.pos, hero, &claimed, rng),
        };
        let Some(target) = target else {
            continue;
        };
        let Some(direction) = Direction::between(hunter.pos, target) else {
            continue;
        };
        if !claimed.insert(target) {
            continue;
        }
        let pushes = matches!(frozen.occupant(target), Occupant::Block(_));
        intents.push(Intent { hunter: id, direction, pushes });
    }

    let (steps, pushes): (Vec<Intent>, Vec<Intent>) =
        intents.into_iter().partition(|intent| !intent.pushes);
    for intent in steps.into_iter().chain(pushes) {
        let Some(from) = board.hunter(intent.hunter).map(|hunter| hunter.pos) else {
            continue;
        };
        match attempt_move(board, from, intent.direction) {
            MoveOutcome::Blocked => {}
            MoveOutcome::Moved(_) => report.moved += 1,
            MoveOutcome::PushedAndMoved { squished, .. } => {
                report.moved += 1;
                report.squished.extend(squished);
            }
        }
    }
    report
}

/// First cell of a path that avoids every occupied cell, or `None` to stay put.
fn chaser_step(frozen: &Board, config: &GameConfig, from: Pos, hero: Pos) -> Option<Pos> {
    let path = shortest_path(frozen.extent(), from, hero, config.neighbors, |pos| {
        frozen.occupant(pos) != Occupant::Empty
    })?;
    path.first().copied()
}

/// Crushers path through blocks, since they can push them. With no path they try a shuffled
/// list of directions and take the first empty, unclaimed cell.
fn crusher_step(
    frozen: &Board,
    config: &GameConfig,
    from: Pos,
    hero: Pos,
    claimed: &BTreeSet<Pos>,
    rng: &mut RandomStream,
) -> Option<Pos> {
    if from.euclidean(hero) > config.crusher_activation_radius {
        return None;
    }
    let path = shortest_path(frozen.extent(), from, hero, config.neighbors, |pos| {
        !matches!(frozen.occupant(pos), Occupant::Empty | Occupant::Block(_))
    });
    if let Some(path) = path {
        return path.first().copied();
    }

    let mut directions = config.neighbors.directions().to_vec();
    rng.shuffle(&mut directions);
    directions
        .into_iter()
        .map(|direction| from.step(direction))
        .find(|cell| frozen.is_empty(*cell) && !claimed.contains(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board;

    fn config() -> GameConfig {
        GameConfig { crusher_activation_radius: 8.0, ..GameConfig::default() }
    }

    fn kind_at(board: &Board, pos: Pos) -> Option<HunterKind> {
        board.hunter_at(pos).and_then(|id| board.hunter(id)).map(|hunter| hunter.kind)
    }

    #[test]
    fn chaser_takes_one_step_along_the_shortest_path() {
        let mut b = board(&["#######", "#@...c#", "#######"]);
        let report = run_pursuit(&mut b, &config(), &mut RandomStream::new(1));
        assert_eq!(report.moved, 1);
        assert_eq!(kind_at(&b, Pos::new(1, 4)), Some(HunterKind::Chaser));
    }

    #[test]
    fn chaser_without_a_path_stays_put() {
        let mut b = board(&["#######", "#@.#.c#", "#..#..#", "#######"]);
        let report = run_pursuit(&mut b, &config(), &mut RandomStream::new(1));
        assert_eq!(report.moved, 0);
        assert_eq!(kind_at(&b, Pos::new(1, 5)), Some(HunterKind::Chaser));
    }

    #[test]
    fn contended_cell_goes_to_the_first_hunter_in_scan_order() {
        // Both chasers need (1,2) to reach the hero; (1,1) scans before (1,3).
        let mut b = board(&["#####", "#c.c#", "##.##", "##@##", "#####"]);
        let report = run_pursuit(&mut b, &config(), &mut RandomStream::new(1));
        assert_eq!(report.moved, 1);
        assert_eq!(b.draw_diag(), "#####\n#.cc#\n##.##\n##@##\n#####\n");
    }

    #[test]
    fn chaser_steps_onto_an_adjacent_hero() {
        let mut b = board(&["#####", "#@c.#", "#####"]);
        run_pursuit(&mut b, &config(), &mut RandomStream::new(1));
        assert!(b.hunter_on_hero().is_some());
    }

    #[test]
    fn crusher_outside_radius_stays_dormant() {
        let config = GameConfig { crusher_activation_radius: 2.0, ..config() };
        let mut b = board(&["#######", "#@...C#", "#######"]);
        let report = run_pursuit(&mut b, &config, &mut RandomStream::new(1));
        assert_eq!(report.moved, 0);
        assert_eq!(kind_at(&b, Pos::new(1, 5)), Some(HunterKind::Crusher));
    }

    #[test]
    fn crusher_pushes_a_block_toward_the_hero() {
        let mut b = board(&["#######", "#@..OC#", "#######"]);
        let report = run_pursuit(&mut b, &config(), &mut RandomStream::new(1));
        assert_eq!(report.moved, 1);
        assert_eq!(b.draw_diag(), "#######\n#@.OC.#\n#######\n");
    }

    #[test]
    fn boxed_in_crusher_takes_the_only_free_step() {
        let mut b = board(&["#######", "#@.#.O#", "#..#C##", "#######"]);
        let report = run_pursuit(&mut b, &config(), &mut RandomStream::new(3));
        assert_eq!(report.moved, 1);
        assert_eq!(kind_at(&b, Pos::new(1, 4)), Some(HunterKind::Crusher));
    }

    #[test]
    fn crusher_push_stops_at_a_hero_already_caught_this_pass() {
        // The chaser steps onto the hero before the crusher's push is applied.
        let mut b = board(&["#######", "#CO@O.#", "###c###", "#######"]);
        let report = run_pursuit(&mut b, &GameConfig::default(), &mut RandomStream::new(1));
        assert_eq!(report.moved, 1);
        assert!(report.squished.is_empty());
        assert!(b.hunter_on_hero().is_some());
        assert_eq!(b.draw_diag(), "#######\n#COcO.#\n###.###\n#######\n");
    }

    #[test]
    fn eggs_never_move() {
        let mut b = board(&["#####", "#@.e#", "#####"]);
        let before = b.draw_diag();
        run_pursuit(&mut b, &config(), &mut RandomStream::new(1));
        assert_eq!(b.draw_diag(), before);
    }
}
