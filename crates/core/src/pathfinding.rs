//! Shortest-path search over a maze's open edges.
//! A* produces the path plus the order in which cells were expanded; breadth-first
//! helpers answer reachability and serve as a reference distance.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use crate::maze::Maze;
use crate::types::Cell;

/// Frontier entry. Field order is the tie-break: lowest `f`, then lowest `h`, then `x`, then `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    x: i32,
    y: i32,
}

impl OpenNode {
    fn cell(self) -> Cell {
        Cell { x: self.x, y: self.y }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Start to end inclusive, or `None` when the end is unreachable.
    pub path: Option<Vec<Cell>>,
    /// Every cell popped from the frontier and expanded, in visit order.
    pub explored: Vec<Cell>,
}

impl SearchOutcome {
    /// Number of moves along the path, which is one less than its cell count.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

/// A* with a Manhattan heuristic. Out-of-bounds endpoints produce an empty outcome.
pub fn find_path(maze: &Maze, start: Cell, end: Cell) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    if !maze.in_bounds(start) || !maze.in_bounds(end) {
        return outcome;
    }

    let mut open_set = BTreeSet::new();
    let mut closed = BTreeSet::new();
    let mut g_score = BTreeMap::new();
    let mut came_from = BTreeMap::new();
    let h = start.manhattan(end);
    open_set.insert(OpenNode { f: h, h, x: start.x, y: start.y });
    g_score.insert(start, 0_u32);

    while let Some(node) = open_set.pop_first() {
        let current = node.cell();
        // A cheaper entry for this cell was already expanded.
        if !closed.insert(current) {
            continue;
        }
        outcome.explored.push(current);

        if current == end {
            outcome.path = Some(reconstruct_path(&came_from, start, end));
            break;
        }

        let cur_g = g_score.get(&current).copied().unwrap_or(u32::MAX);
        for next in maze.open_neighbors(current) {
            let tentative = cur_g + 1;
            if tentative < g_score.get(&next).copied().unwrap_or(u32::MAX) {
                came_from.insert(next, current);
                g_score.insert(next, tentative);
                let h = next.manhattan(end);
                open_set.insert(OpenNode { f: tentative + h, h, x: next.x, y: next.y });
            }
        }
    }

    debug!(
        "astar {start} -> {end}: explored {} cells, path {:?} steps",
        outcome.explored.len(),
        outcome.steps()
    );
    outcome
}

fn reconstruct_path(came: &BTreeMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut cell = end;
    let mut result = vec![cell];
    while cell != start {
        cell = *came.get(&cell).expect("every reached cell has a predecessor");
        result.push(cell);
    }
    result.reverse();
    result
}

/// Flood fill over open edges. Empty when `from` lies outside the grid.
pub fn reachable_cells(maze: &Maze, from: Cell) -> BTreeSet<Cell> {
    let mut visited = BTreeSet::new();
    if !maze.in_bounds(from) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for next in maze.open_neighbors(current) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Breadth-first edge count between two cells, the reference length for A*.
pub fn bfs_distance(maze: &Maze, start: Cell, end: Cell) -> Option<usize> {
    if !maze.in_bounds(start) || !maze.in_bounds(end) {
        return None;
    }

    let mut distance = BTreeMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start, 0_usize);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let here = distance[&current];
        if current == end {
            return Some(here);
        }
        for next in maze.open_neighbors(current) {
            if !distance.contains_key(&next) {
                distance.insert(next, here + 1);
                queue.push_back(next);
            }
        }
    }

    None
}
