//! Level progression rules: how enemy counts and the clear bonus scale with the level index.

use crate::config::GameConfig;

pub const STARTING_LEVEL: u32 = 1;

pub fn hunter_count(config: &GameConfig, level: u32) -> usize {
    config.initial_hunters + level_slot(level) * config.hunters_per_level
}

pub fn egg_count(config: &GameConfig, level: u32) -> usize {
    config.initial_eggs + level_slot(level) * config.eggs_per_level
}

pub fn level_clear_bonus(config: &GameConfig, level: u32) -> u64 {
    config.level_clear_bonus * u64::from(level)
}

fn level_slot(level: u32) -> usize {
    level.saturating_sub(STARTING_LEVEL) as usize
}
