//! Stable maze fingerprints for reproducing a run from its seed.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::maze::Maze;

impl Maze {
    /// xxh3 over dimensions and the ordered wall list. Equal mazes always hash equal.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.width() as u64);
        hasher.write_u64(self.height() as u64);
        for wall in self.walls() {
            let (a, b) = wall.cells();
            hasher.write_i32(a.x);
            hasher.write_i32(a.y);
            hasher.write_i32(b.x);
            hasher.write_i32(b.y);
        }
        hasher.finish()
    }
}

/// `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}
