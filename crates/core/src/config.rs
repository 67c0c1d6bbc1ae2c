//! Immutable game tuning passed explicitly into level generation, AI and the session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::NeighborMode;

pub const MIN_BOARD_SIDE: usize = 4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub neighbors: NeighborMode,
    pub block_coverage: f64,
    pub obstacle_coverage: f64,
    pub initial_hunters: usize,
    pub hunters_per_level: usize,
    pub initial_eggs: usize,
    pub eggs_per_level: usize,
    #[serde(with = "millis")]
    pub enemy_move_delay: Duration,
    #[serde(with = "millis")]
    pub hatch_poll_interval: Duration,
    #[serde(with = "millis")]
    pub egg_base_delay: Duration,
    pub crusher_activation_radius: f64,
    pub hunter_weight: u32,
    pub obstacle_weight: u32,
    pub starting_lives: u32,
    pub squish_points: u64,
    pub level_clear_bonus: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            neighbors: NeighborMode::Orthogonal,
            block_coverage: 0.35,
            obstacle_coverage: 0.03,
            initial_hunters: 1,
            hunters_per_level: 1,
            initial_eggs: 0,
            eggs_per_level: 1,
            enemy_move_delay: Duration::from_millis(1000),
            hatch_poll_interval: Duration::from_millis(1000),
            egg_base_delay: Duration::from_secs(30),
            crusher_activation_radius: 8.0,
            hunter_weight: 100,
            obstacle_weight: 1,
            starting_lives: 3,
            squish_points: 100,
            level_clear_bonus: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooSmall { width: usize, height: usize },
    CoverageOutOfRange { field: &'static str },
    ZeroInterval { field: &'static str },
    ZeroWeight { field: &'static str },
    NegativeRadius,
    NoLives,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_SIDE || self.height < MIN_BOARD_SIDE {
            return Err(ConfigError::BoardTooSmall { width: self.width, height: self.height });
        }
        for (field, value) in
            [("block_coverage", self.block_coverage), ("obstacle_coverage", self.obstacle_coverage)]
        {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::CoverageOutOfRange { field });
            }
        }
        for (field, value) in [
            ("enemy_move_delay", self.enemy_move_delay),
            ("hatch_poll_interval", self.hatch_poll_interval),
        ] {
            if value.is_zero() {
                return Err(ConfigError::ZeroInterval { field });
            }
        }
        for (field, value) in
            [("hunter_weight", self.hunter_weight), ("obstacle_weight", self.obstacle_weight)]
        {
            if value == 0 {
                return Err(ConfigError::ZeroWeight { field });
            }
        }
        if self.crusher_activation_radius.is_nan() || self.crusher_activation_radius < 0.0 {
            return Err(ConfigError::NegativeRadius);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Cells inside the wall border.
    pub fn interior_cells(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
