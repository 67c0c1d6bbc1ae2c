//! Cell occupancy for one level: walls, blocks, eggs, hunters and the hero.
//! This module owns the at-most-one-occupant rule and bounds checks.
//! It does not decide who may move where; see `movement` and `pursuit`.

use std::time::Duration;

use slotmap::SlotMap;

use crate::pathfinding::Extent;
use crate::types::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Hunter {
    pub id: HunterId,
    pub kind: HunterKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Egg {
    pub id: EggId,
    pub pos: Pos,
    pub ready_at: Duration,
    /// Extra wait drawn once the egg first becomes ready.
    pub jitter: Option<Duration>,
}

/// Read-only view handed to renderers. Every list is in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub walls: Vec<Pos>,
    pub blocks: Vec<(Pos, BlockSkin)>,
    pub hunters: Vec<(Pos, HunterKind)>,
    pub eggs: Vec<Pos>,
    pub hero: Option<Pos>,
}

#[derive(Clone)]
pub struct Board {
    width: usize,
    height: usize,
    // Never holds `Occupant::Hero`; the hero is tracked separately so a hunter can step onto it.
    cells: Vec<Occupant>,
    hero: Option<Pos>,
    hunters: SlotMap<HunterId, Hunter>,
    eggs: SlotMap<EggId, Egg>,
}

impl Board {
    /// Empty board enclosed by a wall border.
    pub fn new(width: usize, height: usize) -> Self {
        let mut cells = vec![Occupant::Empty; width * height];
        for x in 0..width {
            cells[x] = Occupant::Wall;
            cells[(height - 1) * width + x] = Occupant::Wall;
        }
        for y in 0..height {
            cells[y * width] = Occupant::Wall;
            cells[y * width + (width - 1)] = Occupant::Wall;
        }
        Self {
            width,
            height,
            cells,
            hero: None,
            hunters: SlotMap::with_key(),
            eggs: SlotMap::with_key(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn extent(&self) -> Extent {
        Extent { width: self.width, height: self.height }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.extent().contains(pos)
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.y == 0
                || pos.x == 0
                || pos.y as usize == self.height - 1
                || pos.x as usize == self.width - 1)
    }

    /// Out-of-bounds cells read as `Wall`. A hunter standing on the hero reads as the hunter.
    pub fn occupant(&self, pos: Pos) -> Occupant {
        if !self.in_bounds(pos) {
            return Occupant::Wall;
        }
        match self.cells[self.index(pos)] {
            Occupant::Empty if self.hero == Some(pos) => Occupant::Hero,
            other => other,
        }
    }

    pub fn is_empty(&self, pos: Pos) -> bool {
        self.occupant(pos) == Occupant::Empty
    }

    pub fn hero(&self) -> Option<Pos> {
        self.hero
    }

    pub fn hunter(&self, id: HunterId) -> Option<&Hunter> {
        self.hunters.get(id)
    }

    pub fn hunters(&self) -> impl Iterator<Item = &Hunter> {
        self.hunters.values()
    }

    pub fn egg(&self, id: EggId) -> Option<&Egg> {
        self.eggs.get(id)
    }

    pub fn eggs(&self) -> impl Iterator<Item = &Egg> {
        self.eggs.values()
    }

    pub fn hunter_count(&self) -> usize {
        self.hunters.len()
    }

    pub fn egg_count(&self) -> usize {
        self.eggs.len()
    }

    /// Hunters plus unhatched eggs; the level is complete when this reaches zero.
    pub fn enemies_remaining(&self) -> usize {
        self.hunters.len() + self.eggs.len()
    }

    /// Hunter ids ordered by (row, col) of their current cell.
    pub fn hunters_in_scan_order(&self) -> Vec<HunterId> {
        let mut ids: Vec<(Pos, HunterId)> =
            self.hunters.iter().map(|(id, hunter)| (hunter.pos, id)).collect();
        ids.sort_by_key(|(pos, _)| *pos);
        ids.into_iter().map(|(_, id)| id).collect()
    }

    pub fn egg_ids(&self) -> Vec<EggId> {
        let mut ids: Vec<(Pos, EggId)> = self.eggs.iter().map(|(id, egg)| (egg.pos, id)).collect();
        ids.sort_by_key(|(pos, _)| *pos);
        ids.into_iter().map(|(_, id)| id).collect()
    }

    pub fn hunter_at(&self, pos: Pos) -> Option<HunterId> {
        match self.occupant(pos) {
            Occupant::Hunter(id) => Some(id),
            _ => None,
        }
    }

    /// The hunter sharing the hero's cell, if any.
    pub fn hunter_on_hero(&self) -> Option<HunterId> {
        self.hero.and_then(|hero| self.hunter_at(hero))
    }

    /// Every non-empty cell (hero excluded) in row-major order.
    pub fn occupied_cells(&self) -> Vec<(Pos, Occupant)> {
        self.positions()
            .filter_map(|pos| match self.cells[self.index(pos)] {
                Occupant::Empty => None,
                occupant => Some((pos, occupant)),
            })
            .collect()
    }

    /// Interior cells with no occupant, the hero counting as one, in row-major order.
    pub fn free_cells(&self) -> Vec<Pos> {
        self.positions().filter(|pos| !self.is_border(*pos) && self.is_empty(*pos)).collect()
    }

    pub fn blocks(&self) -> impl Iterator<Item = (Pos, BlockSkin)> + '_ {
        self.positions().filter_map(|pos| match self.cells[self.index(pos)] {
            Occupant::Block(skin) => Some((pos, skin)),
            _ => None,
        })
    }

    pub fn walls(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|pos| self.cells[self.index(*pos)] == Occupant::Wall)
    }

    pub fn place_wall(&mut self, pos: Pos) {
        self.put(pos, Occupant::Wall);
    }

    pub fn place_block(&mut self, pos: Pos, skin: BlockSkin) {
        self.put(pos, Occupant::Block(skin));
    }

    pub fn place_hero(&mut self, pos: Pos) {
        self.assert_placeable(pos);
        self.hero = Some(pos);
    }

    pub fn spawn_hunter(&mut self, pos: Pos, kind: HunterKind) -> HunterId {
        self.assert_placeable(pos);
        let id = self.hunters.insert_with_key(|id| Hunter { id, kind, pos });
        let idx = self.index(pos);
        self.cells[idx] = Occupant::Hunter(id);
        id
    }

    pub fn lay_egg(&mut self, pos: Pos, ready_at: Duration) -> EggId {
        self.assert_placeable(pos);
        let id = self.eggs.insert_with_key(|id| Egg { id, pos, ready_at, jitter: None });
        let idx = self.index(pos);
        self.cells[idx] = Occupant::Egg(id);
        id
    }

    pub(crate) fn move_hero(&mut self, to: Pos) {
        assert!(
            self.in_bounds(to) && self.cells[self.index(to)] == Occupant::Empty,
            "invariant violation: hero moved onto occupied cell {to:?}"
        );
        self.hero = Some(to);
    }

    /// Moves a hunter onto an empty cell or onto the hero.
    pub(crate) fn move_hunter(&mut self, id: HunterId, to: Pos) {
        assert!(
            self.in_bounds(to) && self.cells[self.index(to)] == Occupant::Empty,
            "invariant violation: hunter moved onto occupied cell {to:?}"
        );
        let from = self.hunters[id].pos;
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        self.cells[from_idx] = Occupant::Empty;
        self.cells[to_idx] = Occupant::Hunter(id);
        self.hunters[id].pos = to;
    }

    pub(crate) fn shift_block(&mut self, from: Pos, to: Pos) {
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        let Occupant::Block(skin) = self.cells[from_idx] else {
            panic!("invariant violation: no block at {from:?}");
        };
        assert!(
            self.cells[to_idx] == Occupant::Empty && self.hero != Some(to),
            "invariant violation: block shifted onto occupied cell {to:?}"
        );
        self.cells[from_idx] = Occupant::Empty;
        self.cells[to_idx] = Occupant::Block(skin);
    }

    /// Removes the hunter or egg at `pos`, returning what was there.
    pub(crate) fn remove_enemy_at(&mut self, pos: Pos) -> Option<Victim> {
        let idx = self.index(pos);
        let victim = match self.cells[idx] {
            Occupant::Hunter(id) => self.hunters.remove(id).map(|h| Victim::Hunter(h.kind)),
            Occupant::Egg(id) => self.eggs.remove(id).map(|_| Victim::Egg),
            _ => None,
        };
        if victim.is_some() {
            self.cells[idx] = Occupant::Empty;
        }
        victim
    }

    pub(crate) fn egg_mut(&mut self, id: EggId) -> Option<&mut Egg> {
        self.eggs.get_mut(id)
    }

    /// Replaces an egg with a Crusher on the same cell.
    pub(crate) fn hatch(&mut self, id: EggId) -> Option<HunterId> {
        let egg = self.eggs.remove(id)?;
        let idx = self.index(egg.pos);
        let hunter = self.hunters.insert_with_key(|hid| Hunter {
            id: hid,
            kind: HunterKind::Crusher,
            pos: egg.pos,
        });
        self.cells[idx] = Occupant::Hunter(hunter);
        Some(hunter)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut hunters: Vec<(Pos, HunterKind)> =
            self.hunters.values().map(|hunter| (hunter.pos, hunter.kind)).collect();
        hunters.sort();
        let mut eggs: Vec<Pos> = self.eggs.values().map(|egg| egg.pos).collect();
        eggs.sort();
        BoardSnapshot {
            width: self.width,
            height: self.height,
            walls: self.walls().collect(),
            blocks: self.blocks().collect(),
            hunters,
            eggs,
            hero: self.hero,
        }
    }

    pub fn draw_diag(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos { y: y as i32, x: x as i32 };
                let c = match self.occupant(pos) {
                    Occupant::Empty => '.',
                    Occupant::Wall => '#',
                    Occupant::Block(_) => 'O',
                    Occupant::Hero => '@',
                    Occupant::Egg(_) => 'e',
                    Occupant::Hunter(id) => match self.hunters[id].kind {
                        HunterKind::Chaser => 'c',
                        HunterKind::Crusher => 'C',
                    },
                };
                text.push(c);
            }
            text.push('\n');
        }
        text
    }

    fn put(&mut self, pos: Pos, occupant: Occupant) {
        self.assert_placeable(pos);
        let idx = self.index(pos);
        self.cells[idx] = occupant;
    }

    fn assert_placeable(&self, pos: Pos) {
        assert!(self.in_bounds(pos), "invariant violation: {pos:?} is off the board");
        assert!(
            self.is_empty(pos),
            "invariant violation: {pos:?} already holds {:?}",
            self.occupant(pos)
        );
    }

    fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        self.extent().cells()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_has_wall_border_and_empty_interior() {
        let board = Board::new(6, 5);
        for y in 0..5 {
            for x in 0..6 {
                let pos = Pos { y, x };
                let expected =
                    if board.is_border(pos) { Occupant::Wall } else { Occupant::Empty };
                assert_eq!(board.occupant(pos), expected, "at {pos:?}");
            }
        }
        assert_eq!(board.free_cells().len(), 4 * 3);
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let board = Board::new(5, 5);
        assert_eq!(board.occupant(Pos { y: -1, x: 2 }), Occupant::Wall);
        assert_eq!(board.occupant(Pos { y: 2, x: 5 }), Occupant::Wall);
    }

    #[test]
    fn hero_overlay_is_reported_but_hunter_on_hero_wins() {
        let mut board = Board::new(6, 6);
        board.place_hero(Pos { y: 2, x: 2 });
        assert_eq!(board.occupant(Pos { y: 2, x: 2 }), Occupant::Hero);

        let id = board.spawn_hunter(Pos { y: 2, x: 3 }, HunterKind::Chaser);
        board.move_hunter(id, Pos { y: 2, x: 2 });
        assert_eq!(board.occupant(Pos { y: 2, x: 2 }), Occupant::Hunter(id));
        assert_eq!(board.hunter_on_hero(), Some(id));
    }

    #[test]
    #[should_panic(expected = "invariant violation")]
    fn placing_onto_an_occupied_cell_is_fatal() {
        let mut board = Board::new(6, 6);
        board.place_block(Pos { y: 2, x: 2 }, BlockSkin::Light);
        board.lay_egg(Pos { y: 2, x: 2 }, Duration::ZERO);
    }

    #[test]
    fn hatching_keeps_position_and_swaps_sets() {
        let mut board = Board::new(6, 6);
        let egg = board.lay_egg(Pos { y: 3, x: 3 }, Duration::from_secs(30));
        let hunter = board.hatch(egg).expect("egg exists");
        assert_eq!(board.egg_count(), 0);
        assert_eq!(
            board.hunter(hunter).map(|h| (h.pos, h.kind)),
            Some((Pos { y: 3, x: 3 }, HunterKind::Crusher))
        );
        assert_eq!(board.occupant(Pos { y: 3, x: 3 }), Occupant::Hunter(hunter));
    }

    #[test]
    fn scan_order_sorts_by_row_then_column() {
        let mut board = Board::new(8, 8);
        let c = board.spawn_hunter(Pos { y: 4, x: 1 }, HunterKind::Chaser);
        let a = board.spawn_hunter(Pos { y: 1, x: 5 }, HunterKind::Chaser);
        let b = board.spawn_hunter(Pos { y: 4, x: 2 }, HunterKind::Crusher);
        assert_eq!(board.hunters_in_scan_order(), vec![a, c, b]);
    }

    #[test]
    fn diag_dump_marks_each_occupant() {
        let mut board = Board::new(5, 3);
        board.place_hero(Pos { y: 1, x: 1 });
        board.place_block(Pos { y: 1, x: 2 }, BlockSkin::Dense);
        board.spawn_hunter(Pos { y: 1, x: 3 }, HunterKind::Crusher);
        assert_eq!(board.draw_diag(), "#####\n#@OC#\n#####\n");
    }
}
