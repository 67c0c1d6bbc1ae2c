use std::time::Duration;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct HunterId;
    pub struct EggId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    pub fn step(self, direction: Direction) -> Self {
        Self { y: self.y + direction.dy, x: self.x + direction.dx }
    }

    pub fn euclidean(self, other: Pos) -> f64 {
        let dy = f64::from(self.y - other.y);
        let dx = f64::from(self.x - other.x);
        (dy * dy + dx * dx).sqrt()
    }
}

/// Unit step on the grid. Both components are in `-1..=1` and at least one is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Direction {
    dy: i32,
    dx: i32,
}

impl Direction {
    pub const UP: Self = Self { dy: -1, dx: 0 };
    pub const DOWN: Self = Self { dy: 1, dx: 0 };
    pub const LEFT: Self = Self { dy: 0, dx: -1 };
    pub const RIGHT: Self = Self { dy: 0, dx: 1 };
    pub const UP_LEFT: Self = Self { dy: -1, dx: -1 };
    pub const UP_RIGHT: Self = Self { dy: -1, dx: 1 };
    pub const DOWN_LEFT: Self = Self { dy: 1, dx: -1 };
    pub const DOWN_RIGHT: Self = Self { dy: 1, dx: 1 };

    pub const ORTHOGONAL: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];
    pub const DIAGONAL: [Self; 4] =
        [Self::UP_LEFT, Self::UP_RIGHT, Self::DOWN_LEFT, Self::DOWN_RIGHT];

    /// Returns `None` for the zero vector or any component outside `-1..=1`.
    pub fn new(dy: i32, dx: i32) -> Option<Self> {
        let unit = |v: i32| (-1..=1).contains(&v);
        (unit(dy) && unit(dx) && (dy, dx) != (0, 0)).then_some(Self { dy, dx })
    }

    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        Self::new(to.y - from.y, to.x - from.x)
    }

    pub fn dy(self) -> i32 {
        self.dy
    }

    pub fn dx(self) -> i32 {
        self.dx
    }

    pub fn is_diagonal(self) -> bool {
        self.dy != 0 && self.dx != 0
    }
}

impl TryFrom<(i32, i32)> for Direction {
    type Error = String;

    fn try_from((dy, dx): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(dy, dx).ok_or_else(|| format!("({dy}, {dx}) is not a unit direction"))
    }
}

impl From<Direction> for (i32, i32) {
    fn from(direction: Direction) -> Self {
        (direction.dy, direction.dx)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighborMode {
    #[default]
    Orthogonal,
    EightWay,
}

impl NeighborMode {
    /// Fixed enumeration order: up, down, left, right, then diagonals when enabled.
    pub fn directions(self) -> &'static [Direction] {
        const EIGHT_WAY: [Direction; 8] = [
            Direction::UP,
            Direction::DOWN,
            Direction::LEFT,
            Direction::RIGHT,
            Direction::UP_LEFT,
            Direction::UP_RIGHT,
            Direction::DOWN_LEFT,
            Direction::DOWN_RIGHT,
        ];
        match self {
            Self::Orthogonal => &Direction::ORTHOGONAL,
            Self::EightWay => &EIGHT_WAY,
        }
    }

    pub fn allows(self, direction: Direction) -> bool {
        self == Self::EightWay || !direction.is_diagonal()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HunterKind {
    Chaser,
    Crusher,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BlockSkin {
    Light,
    Medium,
    Dense,
}

impl BlockSkin {
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Dense];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupant {
    Empty,
    Wall,
    Block(BlockSkin),
    Hero,
    Hunter(HunterId),
    Egg(EggId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Victim {
    Hunter(HunterKind),
    Egg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Squish {
    pub pos: Pos,
    pub victim: Victim,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Moved(Pos),
    PushedAndMoved { to: Pos, blocks: usize, squished: Vec<Squish> },
}

impl MoveOutcome {
    pub fn destination(&self) -> Option<Pos> {
        match self {
            Self::Blocked => None,
            Self::Moved(to) | Self::PushedAndMoved { to, .. } => Some(*to),
        }
    }

    pub fn squished_count(&self) -> usize {
        match self {
            Self::PushedAndMoved { squished, .. } => squished.len(),
            _ => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Paused,
    LevelComplete,
    GameOver,
}

/// One polled input frame. The default value is "no input".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub movement: Option<Direction>,
    pub toggle_pause: bool,
    pub proceed: bool,
    pub quit: bool,
}

impl TickInput {
    pub fn movement(direction: Direction) -> Self {
        Self { movement: Some(direction), ..Self::default() }
    }

    pub fn toggle_pause() -> Self {
        Self { toggle_pause: true, ..Self::default() }
    }

    pub fn proceed() -> Self {
        Self { proceed: true, ..Self::default() }
    }

    pub fn quit() -> Self {
        Self { quit: true, ..Self::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue(SessionState),
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    LevelStarted { level: u32, hunters: usize, eggs: usize, hero: Option<Pos> },
    HeroMoved { from: Pos, to: Pos },
    BlocksPushed { from: Pos, to: Pos, blocks: usize },
    Squished { pos: Pos, victim: Victim, by_hero: bool },
    EggHatched { pos: Pos },
    HeroCaught { pos: Pos, lives_left: u32 },
    HeroRespawned { pos: Pos },
    LevelCompleted { level: u32, squished: u32, moves: u64, elapsed: Duration },
    Paused,
    Resumed,
    GameOver { score: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player: String,
    pub score: u64,
    pub level: u32,
    pub timestamp_unix_ms: u64,
}
