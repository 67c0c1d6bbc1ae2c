//! Shared test fixtures for the unit test suites.
//! Boards are written in the `draw_diag` alphabet so failures read back the same way.

use std::time::Duration;

use crate::board::Board;
use crate::types::*;

/// `#` wall, `O` block, `@` hero, `c` chaser, `C` crusher, `e` egg, `.` empty.
/// The outer ring must be walls; eggs are stamped ready at `egg_ready_at`.
pub(crate) fn board_with_eggs_at(rows: &[&str], egg_ready_at: Duration) -> Board {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut board = Board::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "ragged fixture row {y}");
        for (x, c) in row.chars().enumerate() {
            let pos = Pos::new(y as i32, x as i32);
            if board.is_border(pos) {
                assert_eq!(c, '#', "fixture border must be wall at {pos:?}");
                continue;
            }
            match c {
                '.' => {}
                '#' => board.place_wall(pos),
                'O' => board.place_block(pos, BlockSkin::Light),
                '@' => board.place_hero(pos),
                'c' => {
                    board.spawn_hunter(pos, HunterKind::Chaser);
                }
                'C' => {
                    board.spawn_hunter(pos, HunterKind::Crusher);
                }
                'e' => {
                    board.lay_egg(pos, egg_ready_at);
                }
                other => panic!("unknown fixture cell {other:?} at {pos:?}"),
            }
        }
    }
    board
}

pub(crate) fn board(rows: &[&str]) -> Board {
    board_with_eggs_at(rows, Duration::from_secs(30))
}

