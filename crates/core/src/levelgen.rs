//! Procedural level generation split into coherent submodules.

pub mod progression;

mod placement;
mod safe_spawn;

pub use placement::{LevelPlan, PlacementCounts, generate_level};
pub use progression::STARTING_LEVEL;
pub use safe_spawn::{danger_field, farthest_safe_cell};
