//! Maze generation split into the carving algorithm and its seeded randomness.

mod generator;
mod seed;

pub use generator::{CARVE_ORIGIN, MazeGenerator};
pub use seed::{RandomSource, maze_rng, runtime_seed};

use crate::maze::Maze;
use crate::types::MazeError;

/// Same seed, same dimensions, same maze.
pub fn generate_maze(width: usize, height: usize, seed: u64) -> Result<Maze, MazeError> {
    let generator = MazeGenerator::new(width, height)?;
    Ok(generator.generate(&mut maze_rng(seed)))
}
