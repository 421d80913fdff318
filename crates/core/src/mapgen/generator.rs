//! Randomized depth-first maze carving with an explicit backtracking stack.

use log::debug;

use crate::maze::{Maze, Wall};
use crate::types::{Cell, MazeError};

use super::seed::RandomSource;

/// Carving always begins here so every maze shares the same root cell.
pub const CARVE_ORIGIN: Cell = Cell { x: 0, y: 0 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeGenerator {
    width: usize,
    height: usize,
}

impl MazeGenerator {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        // Validates the dimensions once so `generate` cannot fail.
        Maze::open(width, height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generate(&self, rng: &mut impl RandomSource) -> Maze {
        let mut maze = Maze::fully_walled(self.width, self.height)
            .expect("dimensions are validated in MazeGenerator::new");
        let mut visited = vec![false; maze.cell_count()];
        let mut stack = vec![CARVE_ORIGIN];
        visited[self.index(CARVE_ORIGIN)] = true;
        let mut opened = 0_usize;

        while let Some(current) = stack.pop() {
            let candidates: Vec<Cell> = current
                .neighbors()
                .into_iter()
                .filter(|next| maze.in_bounds(*next) && !visited[self.index(*next)])
                .collect();
            if candidates.is_empty() {
                continue;
            }

            let next = candidates[rng.pick_index(candidates.len())];
            if let Some(wall) = Wall::between(current, next) {
                maze.walls_mut().remove(wall);
                opened += 1;
            }
            visited[self.index(next)] = true;
            stack.push(current);
            stack.push(next);
        }

        debug!(
            "carved {}x{} maze: {opened} passages, {} walls",
            self.width,
            self.height,
            maze.walls().len()
        );
        maze
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.y as usize) * self.width + (cell.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::reachable_cells;

    /// Always takes the first candidate, which makes the carve order predictable.
    struct FirstChoice;

    impl RandomSource for FirstChoice {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    /// Replays a fixed list of picks, wrapping each into range.
    struct Scripted {
        picks: Vec<usize>,
        cursor: usize,
    }

    impl RandomSource for Scripted {
        fn pick_index(&mut self, len: usize) -> usize {
            let pick = self.picks.get(self.cursor).copied().unwrap_or(0);
            self.cursor += 1;
            pick % len
        }
    }

    #[test]
    fn single_cell_grid_has_no_walls() {
        let maze = MazeGenerator::new(1, 1).expect("1x1 is valid").generate(&mut FirstChoice);
        assert!(maze.walls().is_empty());
        assert_eq!(maze.open_edge_count(), 0);
    }

    #[test]
    fn first_choice_source_walks_down_the_left_column_first() {
        // Neighbor order prefers "down", so the first pass walks the left column before turning.
        let maze = MazeGenerator::new(2, 3).expect("valid").generate(&mut FirstChoice);
        assert!(maze.is_open(Cell::new(0, 0), Cell::new(0, 1)));
        assert!(maze.is_open(Cell::new(0, 1), Cell::new(0, 2)));
        assert!(maze.is_open(Cell::new(0, 2), Cell::new(1, 2)));
        assert_eq!(maze.open_edge_count(), 5);
    }

    #[test]
    fn scripted_sources_always_produce_spanning_trees() {
        for picks in [vec![1, 2, 3], vec![3, 3, 0, 1], vec![2; 40]] {
            let mut source = Scripted { picks, cursor: 0 };
            let maze = MazeGenerator::new(5, 4).expect("valid").generate(&mut source);
            assert_eq!(maze.open_edge_count(), 5 * 4 - 1);
            assert_eq!(reachable_cells(&maze, CARVE_ORIGIN).len(), 20);
        }
    }

    #[test]
    fn invalid_dimensions_are_rejected_before_generation() {
        assert_eq!(
            MazeGenerator::new(0, 3),
            Err(MazeError::InvalidDimensions { width: 0, height: 3 })
        );
    }
}
