pub mod geometry;
pub mod hash;
pub mod mapgen;
pub mod maze;
pub mod pathfinding;
pub mod session;
pub mod types;

pub use geometry::{CellGeometry, PixelRect, Segment};
pub use hash::format_fingerprint;
pub use mapgen::{MazeGenerator, RandomSource, generate_maze, maze_rng, runtime_seed};
pub use maze::{Maze, Wall, WallSet};
pub use pathfinding::{SearchOutcome, bfs_distance, find_path, reachable_cells};
pub use session::{ExplorationPlayback, MazeSession};
pub use types::*;
