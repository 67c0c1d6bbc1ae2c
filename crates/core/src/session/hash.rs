//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Session {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.run);
        hasher.write_u64(self.tick);
        hasher.write_u32(self.level);
        hasher.write_u32(self.lives);
        hasher.write_u64(self.score);
        hasher.write_u32(self.squish_count);
        hasher.write_u64(self.moves);
        hasher.write_u8(match self.state {
            SessionState::Playing => 0,
            SessionState::Paused => 1,
            SessionState::LevelComplete => 2,
            SessionState::GameOver => 3,
        });

        let snapshot = self.board.snapshot();
        if let Some(hero) = snapshot.hero {
            write_pos(&mut hasher, hero);
        }
        hasher.write_usize(snapshot.hunters.len());
        hasher.write_usize(snapshot.eggs.len());
        hasher.write_usize(snapshot.blocks.len());
        for (pos, kind) in &snapshot.hunters {
            write_pos(&mut hasher, *pos);
            hasher.write_u8(match kind {
                HunterKind::Chaser => 0,
                HunterKind::Crusher => 1,
            });
        }
        for pos in &snapshot.eggs {
            write_pos(&mut hasher, *pos);
        }
        for (pos, skin) in &snapshot.blocks {
            write_pos(&mut hasher, *pos);
            hasher.write_u8(match skin {
                BlockSkin::Light => 0,
                BlockSkin::Medium => 1,
                BlockSkin::Dense => 2,
            });
        }
        hasher.finish()
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.y);
    hasher.write_i32(pos.x);
}
