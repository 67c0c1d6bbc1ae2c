pub mod board;
pub mod clock;
pub mod config;
pub mod hatching;
pub mod journal;
pub mod levelgen;
pub mod movement;
pub mod pathfinding;
pub mod pursuit;
pub mod random;
pub mod replay;
pub mod session;
pub mod types;

#[cfg(test)]
mod test_support;

pub use board::{Board, BoardSnapshot, Egg, Hunter};
pub use clock::{Clock, IntervalGate, ManualClock, MonotonicClock, PlayClock};
pub use config::{ConfigError, GameConfig};
pub use journal::{InputJournal, InputRecord};
pub use levelgen::{LevelPlan, farthest_safe_cell, generate_level};
pub use movement::attempt_move;
pub use pathfinding::{DistanceField, Extent, WeightedSource, distance_field, shortest_path};
pub use random::RandomStream;
pub use replay::*;
pub use session::{Session, SessionSnapshot};
pub use types::*;
