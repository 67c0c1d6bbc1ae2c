//! Breadth-first shortest paths and distance fields over the board's extent.
//! This module exists so every caller walks neighbours in the same fixed order.
//! It does not know what occupies a cell; callers pass a `blocked` predicate.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::types::{NeighborMode, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

impl Extent {
    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    fn index(self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

/// Per-cell cost from the nearest source. `None` means unreachable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    extent: Extent,
    costs: Vec<u64>,
}

const UNREACHABLE: u64 = u64::MAX;

impl DistanceField {
    fn unreached(extent: Extent) -> Self {
        Self { extent, costs: vec![UNREACHABLE; extent.width * extent.height] }
    }

    pub fn get(&self, pos: Pos) -> Option<u64> {
        if !self.extent.contains(pos) {
            return None;
        }
        match self.costs[self.extent.index(pos)] {
            UNREACHABLE => None,
            cost => Some(cost),
        }
    }

    /// Highest-cost cell accepted by `eligible`; ties go to the first cell in row-major order.
    pub fn argmax(&self, eligible: impl Fn(Pos) -> bool) -> Option<Pos> {
        let mut best: Option<(u64, Pos)> = None;
        for pos in self.extent.cells() {
            if !eligible(pos) {
                continue;
            }
            let Some(cost) = self.get(pos) else {
                continue;
            };
            if best.is_none_or(|(best_cost, _)| cost > best_cost) {
                best = Some((cost, pos));
            }
        }
        best.map(|(_, pos)| pos)
    }

    fn set(&mut self, pos: Pos, cost: u64) {
        let idx = self.extent.index(pos);
        self.costs[idx] = cost;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedSource {
    pub pos: Pos,
    pub weight: u32,
}

/// Steps from `start` (exclusive) to `goal` (inclusive). `Some(vec![])` when they coincide.
/// The goal is always enterable; every other cell must pass `blocked`.
pub fn shortest_path(
    extent: Extent,
    start: Pos,
    goal: Pos,
    neighbors: NeighborMode,
    blocked: impl Fn(Pos) -> bool,
) -> Option<Vec<Pos>> {
    if !extent.contains(start) || !extent.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![]);
    }
    let mut came_from = BTreeMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &direction in neighbors.directions() {
            let next = current.step(direction);
            if next == start || !extent.contains(next) || came_from.contains_key(&next) {
                continue;
            }
            if next != goal && blocked(next) {
                continue;
            }
            came_from.insert(next, current);
            if next == goal {
                return Some(reconstruct_path(&came_from, start, goal));
            }
            queue.push_back(next);
        }
    }
    None
}

/// Multi-source hop counts. Every source starts at zero even if `blocked` rejects it.
pub fn distance_field(
    extent: Extent,
    sources: &[Pos],
    neighbors: NeighborMode,
    blocked: impl Fn(Pos) -> bool,
) -> DistanceField {
    let mut field = DistanceField::unreached(extent);
    let mut queue = VecDeque::new();
    for &source in sources {
        if extent.contains(source) && field.get(source).is_none() {
            field.set(source, 0);
            queue.push_back(source);
        }
    }

    while let Some(current) = queue.pop_front() {
        let Some(cost) = field.get(current) else {
            continue;
        };
        for &direction in neighbors.directions() {
            let next = current.step(direction);
            if !extent.contains(next) || field.get(next).is_some() || blocked(next) {
                continue;
            }
            field.set(next, cost + 1);
            queue.push_back(next);
        }
    }
    field
}

/// Dijkstra relaxation where a source's step cost shrinks as its weight grows: the heaviest
/// source pays 1 per hop and a source of weight `w` pays `ceil(max_weight / w)`. The minimum
/// therefore follows the most dangerous source nearby. Propagates through every in-bounds cell.
/// With hunter weight 100 and obstacle weight 1 an obstacle hop costs 100, so obstacles only
/// decide the result when no heavy source is on the board.
pub fn weighted_distance_field(
    extent: Extent,
    sources: &[WeightedSource],
    neighbors: NeighborMode,
) -> DistanceField {
    let mut field = DistanceField::unreached(extent);
    let Some(max_weight) = sources.iter().map(|s| u64::from(s.weight.max(1))).max() else {
        return field;
    };

    // Labels are kept per (cell, step cost): a cheap label with a steep step must not hide a
    // dearer label that grows more slowly further out.
    let mut open = BTreeSet::new();
    let mut best: BTreeMap<(Pos, u64), u64> = BTreeMap::new();
    for source in sources {
        if !extent.contains(source.pos) {
            continue;
        }
        let step = max_weight.div_ceil(u64::from(source.weight.max(1)));
        if best.insert((source.pos, step), 0).is_none() {
            open.insert((0u64, source.pos, step));
        }
    }

    while let Some((cost, current, step)) = open.pop_first() {
        if best.get(&(current, step)).is_some_and(|&label| label < cost) {
            continue;
        }
        if field.get(current).is_none_or(|known| cost < known) {
            field.set(current, cost);
        }
        for &direction in neighbors.directions() {
            let next = current.step(direction);
            if !extent.contains(next) {
                continue;
            }
            let candidate = cost + step;
            let label = best.entry((next, step)).or_insert(UNREACHABLE);
            if candidate < *label {
                *label = candidate;
                open.insert((candidate, next, step));
            }
        }
    }
    field
}

fn reconstruct_path(came_from: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        if previous == start {
            break;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
