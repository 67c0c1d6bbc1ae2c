//! Hero spawn selection: the empty cell that scores highest on the danger-weighted distance
//! field. Used for the initial spawn and for every respawn after a catch.

use crate::board::Board;
use crate::config::GameConfig;
use crate::pathfinding::{DistanceField, WeightedSource, weighted_distance_field};
use crate::types::{Occupant, Pos};

pub fn danger_field(board: &Board, config: &GameConfig) -> DistanceField {
    let sources: Vec<WeightedSource> = board
        .occupied_cells()
        .into_iter()
        .map(|(pos, occupant)| {
            let weight = match occupant {
                Occupant::Hunter(_) | Occupant::Egg(_) => config.hunter_weight,
                _ => config.obstacle_weight,
            };
            WeightedSource { pos, weight }
        })
        .collect();
    weighted_distance_field(board.extent(), &sources, config.neighbors)
}

/// `None` only when the board has no empty cell left.
pub fn farthest_safe_cell(board: &Board, config: &GameConfig) -> Option<Pos> {
    danger_field(board, config).argmax(|pos| board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board;

    #[test]
    fn spawn_lands_as_far_from_the_hunter_as_possible() {
        let b = board(&["#########", "#c......#", "#.......#", "#.......#", "#########"]);
        let config = GameConfig { width: 9, height: 5, ..GameConfig::default() };
        assert_eq!(farthest_safe_cell(&b, &config), Some(Pos::new(3, 7)));
    }

    #[test]
    fn eggs_repel_like_hunters() {
        let b = board(&["#######", "#.....#", "#....e#", "#######"]);
        let config = GameConfig { width: 7, height: 4, ..GameConfig::default() };
        assert_eq!(farthest_safe_cell(&b, &config), Some(Pos::new(1, 1)));
    }

    const OPEN_9X7: [&str; 7] = [
        "#########",
        "#.......#",
        "#.......#",
        "#.......#",
        "#.......#",
        "#.......#",
        "#########",
    ];
    const BLOCKED_9X7: [&str; 7] = [
        "#########",
        "#.......#",
        "#.......#",
        "#..O....#",
        "#.......#",
        "#.......#",
        "#########",
    ];

    #[test]
    fn without_hunters_spawn_keeps_away_from_obstacles() {
        let config = GameConfig { width: 9, height: 7, ..GameConfig::default() };
        assert_eq!(farthest_safe_cell(&board(&OPEN_9X7), &config), Some(Pos::new(3, 3)));
        // The block takes the centre and pushes the pick to the next-farthest cell.
        assert_eq!(farthest_safe_cell(&board(&BLOCKED_9X7), &config), Some(Pos::new(2, 2)));
    }

    #[test]
    fn obstacles_are_outweighed_once_a_hunter_is_present() {
        let config = GameConfig { width: 9, height: 7, ..GameConfig::default() };
        let mut open = OPEN_9X7;
        open[1] = "#c......#";
        let mut blocked = BLOCKED_9X7;
        blocked[1] = "#c......#";
        assert_eq!(farthest_safe_cell(&board(&open), &config), Some(Pos::new(5, 7)));
        assert_eq!(farthest_safe_cell(&board(&blocked), &config), Some(Pos::new(5, 7)));
    }

    #[test]
    fn full_board_has_no_safe_cell() {
        let b = board(&["####", "#OO#", "#cO#", "####"]);
        let config = GameConfig { width: 4, height: 4, ..GameConfig::default() };
        assert_eq!(farthest_safe_cell(&b, &config), None);
    }

    #[test]
    fn ties_resolve_to_first_cell_in_row_major_order() {
        let b = board(&["#####", "#...#", "#.c.#", "#...#", "#####"]);
        let config = GameConfig { width: 5, height: 5, ..GameConfig::default() };
        assert_eq!(farthest_safe_cell(&b, &config), Some(Pos::new(1, 1)));
    }
}
