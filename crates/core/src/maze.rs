//! Grid dimensions, wall pairs, and open-edge queries.
//! Everything that asks "may I step from here to there" goes through [`Maze`].

use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::types::{Cell, MazeError};

/// A blocked connection between two grid-adjacent cells, stored smaller cell first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wall {
    a: Cell,
    b: Cell,
}

impl Wall {
    /// Returns `None` unless the cells are 4-directionally adjacent.
    pub fn between(first: Cell, second: Cell) -> Option<Wall> {
        if !first.is_adjacent(second) {
            return None;
        }
        let (a, b) = if first <= second { (first, second) } else { (second, first) };
        Some(Wall { a, b })
    }

    pub fn cells(self) -> (Cell, Cell) {
        (self.a, self.b)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallSet {
    walls: BTreeSet<Wall>,
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&mut self, wall: Wall) -> bool {
        self.walls.remove(&wall)
    }

    pub fn contains(&self, wall: Wall) -> bool {
        self.walls.contains(&wall)
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Wall> {
        self.walls.iter()
    }
}

impl<'a> IntoIterator for &'a WallSet {
    type Item = &'a Wall;
    type IntoIter = btree_set::Iter<'a, Wall>;

    fn into_iter(self) -> Self::IntoIter {
        self.walls.iter()
    }
}

impl FromIterator<Wall> for WallSet {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> Self {
        Self { walls: iter.into_iter().collect() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: WallSet,
}

impl Maze {
    /// A grid with no walls at all.
    pub fn open(width: usize, height: usize) -> Result<Self, MazeError> {
        check_dimensions(width, height)?;
        Ok(Self { width, height, walls: WallSet::new() })
    }

    /// A grid with every interior edge walled. Generation carves passages out of this.
    pub fn fully_walled(width: usize, height: usize) -> Result<Self, MazeError> {
        let mut maze = Self::open(width, height)?;
        maze.walls = maze.grid_edges().collect();
        Ok(maze)
    }

    pub fn with_walls(width: usize, height: usize, walls: WallSet) -> Result<Self, MazeError> {
        let maze = Self::open(width, height)?;
        for wall in &walls {
            let (a, b) = wall.cells();
            if !maze.in_bounds(a) || !maze.in_bounds(b) {
                return Err(MazeError::WallOutOfBounds(a, b));
            }
        }
        Ok(Self { walls, ..maze })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Errors on non-adjacent cells; out-of-bounds adjacent pairs report `false`.
    pub fn is_wall_between(&self, first: Cell, second: Cell) -> Result<bool, MazeError> {
        let wall = Wall::between(first, second).ok_or(MazeError::NotAdjacent(first, second))?;
        Ok(self.walls.contains(wall))
    }

    pub fn is_open(&self, first: Cell, second: Cell) -> bool {
        if !self.in_bounds(first) || !self.in_bounds(second) {
            return false;
        }
        Wall::between(first, second).is_some_and(|wall| !self.walls.contains(wall))
    }

    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors().into_iter().filter(move |next| self.is_open(cell, *next))
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Cell { x, y }))
    }

    /// Every grid-adjacent pair, walled or not, each reported once.
    pub fn grid_edges(&self) -> impl Iterator<Item = Wall> + '_ {
        self.cells().flat_map(move |cell| {
            let right = Cell { x: cell.x + 1, y: cell.y };
            let down = Cell { x: cell.x, y: cell.y + 1 };
            [right, down]
                .into_iter()
                .filter(move |next| self.in_bounds(*next))
                .filter_map(move |next| Wall::between(cell, next))
        })
    }

    pub fn open_edge_count(&self) -> usize {
        self.grid_edges().filter(|edge| !self.walls.contains(*edge)).count()
    }

    pub(crate) fn walls_mut(&mut self) -> &mut WallSet {
        &mut self.walls
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
        return Err(MazeError::InvalidDimensions { width, height });
    }
    Ok(())
}
