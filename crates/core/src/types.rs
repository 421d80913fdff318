use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid coordinate. Ordering is by `x` then `y`, which also fixes how wall pairs normalize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four grid-adjacent cells in expansion order: down, right, up, left.
    pub fn neighbors(self) -> [Cell; 4] {
        [
            Cell { x: self.x, y: self.y + 1 },
            Cell { x: self.x + 1, y: self.y },
            Cell { x: self.x, y: self.y - 1 },
            Cell { x: self.x - 1, y: self.y },
        ]
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimensions { width: usize, height: usize },
    CellOutOfBounds(Cell),
    WallOutOfBounds(Cell, Cell),
    NotAdjacent(Cell, Cell),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { width, height } => {
                write!(f, "maze dimensions must be at least 1x1, got {width}x{height}")
            }
            MazeError::CellOutOfBounds(cell) => write!(f, "cell {cell} is outside the grid"),
            MazeError::WallOutOfBounds(a, b) => {
                write!(f, "wall between {a} and {b} leaves the grid")
            }
            MazeError::NotAdjacent(a, b) => write!(f, "cells {a} and {b} are not adjacent"),
        }
    }
}

impl Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_all_adjacent() {
        let center = Cell::new(2, 3);
        for neighbor in center.neighbors() {
            assert!(center.is_adjacent(neighbor), "{neighbor} should touch {center}");
        }
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Cell::new(3, 4)));
    }

    #[test]
    fn errors_render_readable_messages() {
        let err = MazeError::InvalidDimensions { width: 0, height: 4 };
        assert_eq!(err.to_string(), "maze dimensions must be at least 1x1, got 0x4");
        let err = MazeError::CellOutOfBounds(Cell::new(-1, 2));
        assert_eq!(err.to_string(), "cell (-1, 2) is outside the grid");
    }

    #[test]
    fn cells_serialize_as_plain_coordinates() {
        let json = serde_json::to_string(&Cell::new(3, -1)).expect("serialize");
        assert_eq!(json, r#"{"x":3,"y":-1}"#);
        let back: Cell = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Cell::new(3, -1));
    }
}
