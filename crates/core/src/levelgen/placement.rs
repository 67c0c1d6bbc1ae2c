//! Entity budgets and shuffle-and-take placement for a fresh level.

use std::time::Duration;

use crate::board::Board;
use crate::config::GameConfig;
use crate::random::RandomStream;
use crate::types::{BlockSkin, HunterKind};

use super::progression;
use super::safe_spawn::farthest_safe_cell;

/// What a level should contain before the board size is taken into account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelPlan {
    pub level: u32,
    pub hunters: usize,
    pub eggs: usize,
    /// Session play time at generation; eggs become ready `egg_base_delay` after this.
    pub created_at: Duration,
}

impl LevelPlan {
    pub fn for_level(config: &GameConfig, level: u32, created_at: Duration) -> Self {
        Self {
            level,
            hunters: progression::hunter_count(config, level),
            eggs: progression::egg_count(config, level),
            created_at,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementCounts {
    pub blocks: usize,
    pub obstacles: usize,
    pub eggs: usize,
    pub hunters: usize,
}

impl PlacementCounts {
    pub fn requested(config: &GameConfig, plan: &LevelPlan) -> Self {
        let interior = config.interior_cells() as f64;
        Self {
            blocks: (interior * config.block_coverage).floor() as usize,
            obstacles: (interior * config.obstacle_coverage).floor() as usize,
            eggs: plan.eggs,
            hunters: plan.hunters,
        }
    }

    pub fn total(&self) -> usize {
        self.blocks + self.obstacles + self.eggs + self.hunters
    }

    /// Scales every count down proportionally so the total fits in `capacity`.
    /// At least one enemy survives the scaling whenever any was requested.
    pub fn fit(self, capacity: usize) -> Self {
        let total = self.total();
        if total <= capacity {
            return self;
        }
        let scale = |count: usize| count * capacity / total;
        let mut fitted = Self {
            blocks: scale(self.blocks),
            obstacles: scale(self.obstacles),
            eggs: scale(self.eggs),
            hunters: scale(self.hunters),
        };
        if capacity > 0 && self.eggs + self.hunters > 0 && fitted.eggs + fitted.hunters == 0 {
            if self.hunters > 0 {
                fitted.hunters = 1;
            } else {
                fitted.eggs = 1;
            }
            if fitted.total() > capacity {
                if fitted.blocks > 0 {
                    fitted.blocks -= 1;
                } else {
                    fitted.obstacles -= 1;
                }
            }
        }
        fitted
    }
}

/// Builds a walled board, samples blocks, obstacles, eggs and chasers without replacement from
/// the free cells, then puts the hero on the farthest safe cell.
pub fn generate_level(config: &GameConfig, plan: &LevelPlan, rng: &mut RandomStream) -> Board {
    let mut board = Board::new(config.width, config.height);
    // One interior cell stays reserved for the hero.
    let capacity = config.interior_cells().saturating_sub(1);
    let counts = PlacementCounts::requested(config, plan).fit(capacity);

    let mut pool = board.free_cells();
    for pos in rng.take(&mut pool, counts.blocks) {
        let skin = BlockSkin::ALL[rng.below(BlockSkin::ALL.len())];
        board.place_block(pos, skin);
    }
    for pos in rng.take(&mut pool, counts.obstacles) {
        board.place_wall(pos);
    }
    let ready_at = plan.created_at + config.egg_base_delay;
    for pos in rng.take(&mut pool, counts.eggs) {
        board.lay_egg(pos, ready_at);
    }
    for pos in rng.take(&mut pool, counts.hunters) {
        board.spawn_hunter(pos, HunterKind::Chaser);
    }

    if let Some(hero) = farthest_safe_cell(&board, config) {
        board.place_hero(hero);
    }
    board
}
