//! Input journals: the seed, the configuration and every tick's input with its timestamp.
//! Replaying a journal reproduces the recorded game exactly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::TickInput;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    /// Wall time passed to `Session::tick`, in milliseconds.
    pub at_ms: u64,
    pub input: TickInput,
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn append(&mut self, at: Duration, input: TickInput) -> u64 {
        let seq = self.inputs.last().map_or(0, |record| record.seq + 1);
        self.inputs.push(InputRecord { seq, at_ms: at.as_millis() as u64, input });
        seq
    }
}
