//! Mutable maze-editing session: one maze, two endpoints, and the search derived from them.
//! Every mutation recomputes the search before returning, so readers never observe a path
//! that belongs to a different maze or endpoint pair.

use log::debug;

use crate::mapgen::generate_maze;
use crate::maze::Maze;
use crate::pathfinding::{SearchOutcome, find_path};
use crate::types::{Cell, MazeError};

/// Incremental reveal of an explored-node sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorationPlayback {
    revealed: usize,
    total: usize,
}

impl ExplorationPlayback {
    pub fn new(total: usize) -> Self {
        Self { revealed: 0, total }
    }

    /// Reveals up to `steps` more cells and reports whether playback has finished.
    pub fn advance(&mut self, steps: usize) -> bool {
        self.revealed = self.revealed.saturating_add(steps).min(self.total);
        self.is_finished()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.total
    }
}

#[derive(Clone, Debug)]
pub struct MazeSession {
    seed: u64,
    maze: Maze,
    start: Cell,
    end: Cell,
    search: SearchOutcome,
    playback: Option<ExplorationPlayback>,
}

impl MazeSession {
    /// Generates a maze from `seed` with endpoints on opposite corners.
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        let maze = generate_maze(width, height, seed)?;
        let start = Cell::new(0, 0);
        let end = Cell::new(width as i32 - 1, height as i32 - 1);
        Ok(Self::assemble(seed, maze, start, end))
    }

    /// Wraps an existing maze, e.g. one with hand-placed walls.
    pub fn from_maze(maze: Maze, seed: u64, start: Cell, end: Cell) -> Result<Self, MazeError> {
        for cell in [start, end] {
            if !maze.in_bounds(cell) {
                return Err(MazeError::CellOutOfBounds(cell));
            }
        }
        Ok(Self::assemble(seed, maze, start, end))
    }

    fn assemble(seed: u64, maze: Maze, start: Cell, end: Cell) -> Self {
        let search = find_path(&maze, start, end);
        Self { seed, maze, start, end, search, playback: None }
    }

    /// Discards the current maze and carves a new one of the same size; endpoints are kept.
    pub fn regenerate(&mut self, seed: u64) {
        let maze = generate_maze(self.maze.width(), self.maze.height(), seed)
            .expect("session dimensions were validated at construction");
        debug!("regenerated maze with seed {seed}");
        self.seed = seed;
        self.maze = maze;
        self.recompute();
    }

    pub fn set_start(&mut self, cell: Cell) -> Result<(), MazeError> {
        self.check_bounds(cell)?;
        self.start = cell;
        self.recompute();
        Ok(())
    }

    pub fn set_end(&mut self, cell: Cell) -> Result<(), MazeError> {
        self.check_bounds(cell)?;
        self.end = cell;
        self.recompute();
        Ok(())
    }

    /// Re-runs the search and restarts the explored-node reveal from the first cell.
    pub fn start_animation(&mut self) {
        self.search = find_path(&self.maze, self.start, self.end);
        self.playback = Some(ExplorationPlayback::new(self.search.explored.len()));
    }

    /// Returns `true` once the animation has revealed every explored cell (or none is running).
    pub fn advance_animation(&mut self, steps: usize) -> bool {
        match self.playback.as_mut() {
            Some(playback) => {
                let finished = playback.advance(steps);
                if finished {
                    self.playback = None;
                }
                finished
            }
            None => true,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.playback.is_some()
    }

    /// The explored prefix revealed so far; the full sequence when no animation is running.
    pub fn visible_explored(&self) -> &[Cell] {
        match &self.playback {
            Some(playback) => &self.search.explored[..playback.revealed()],
            None => &self.search.explored,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn width(&self) -> usize {
        self.maze.width()
    }

    pub fn height(&self) -> usize {
        self.maze.height()
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn search(&self) -> &SearchOutcome {
        &self.search
    }

    pub fn path(&self) -> Option<&[Cell]> {
        self.search.path.as_deref()
    }

    pub fn explored(&self) -> &[Cell] {
        &self.search.explored
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), MazeError> {
        if self.maze.in_bounds(cell) { Ok(()) } else { Err(MazeError::CellOutOfBounds(cell)) }
    }

    fn recompute(&mut self) {
        self.search = find_path(&self.maze, self.start, self.end);
        self.playback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Wall, WallSet};

    #[test]
    fn new_session_solves_corner_to_corner() {
        let session = MazeSession::new(6, 4, 11).expect("valid");
        assert_eq!(session.start(), Cell::new(0, 0));
        assert_eq!(session.end(), Cell::new(5, 3));
        let path = session.path().expect("generated mazes are connected");
        assert_eq!(path.first(), Some(&session.start()));
        assert_eq!(path.last(), Some(&session.end()));
    }

    #[test]
    fn rejected_endpoint_leaves_session_unchanged() {
        let mut session = MazeSession::new(4, 4, 3).expect("valid");
        let before = session.search().clone();
        assert_eq!(
            session.set_start(Cell::new(4, 0)),
            Err(MazeError::CellOutOfBounds(Cell::new(4, 0)))
        );
        assert_eq!(session.start(), Cell::new(0, 0));
        assert_eq!(session.search(), &before);
    }

    #[test]
    fn moving_endpoints_recomputes_the_path() {
        let mut session = MazeSession::new(5, 5, 8).expect("valid");
        session.set_end(Cell::new(2, 2)).expect("in bounds");
        assert_eq!(session.path().and_then(|path| path.last()), Some(&Cell::new(2, 2)));
        session.set_start(Cell::new(2, 2)).expect("in bounds");
        assert_eq!(session.path(), Some(&[Cell::new(2, 2)][..]));
        assert_eq!(session.explored(), &[Cell::new(2, 2)]);
    }

    #[test]
    fn regenerate_replaces_walls_and_keeps_endpoints() {
        let mut session = MazeSession::new(8, 8, 1).expect("valid");
        session.set_start(Cell::new(3, 3)).expect("in bounds");
        let old_walls = session.maze().walls().clone();
        session.regenerate(2);
        assert_eq!(session.seed(), 2);
        assert_ne!(session.maze().walls(), &old_walls);
        assert_eq!(session.start(), Cell::new(3, 3));
        assert_eq!(session.path().and_then(|path| path.first()), Some(&Cell::new(3, 3)));
    }

    #[test]
    fn animation_reveals_explored_cells_in_order() {
        let mut session = MazeSession::new(5, 5, 21).expect("valid");
        let total = session.explored().len();
        session.start_animation();
        assert!(session.is_animating());
        assert!(session.visible_explored().is_empty());

        assert!(!session.advance_animation(1) || total == 1);
        assert_eq!(session.visible_explored(), &session.explored()[..1.min(total)]);

        assert!(session.advance_animation(total));
        assert!(!session.is_animating());
        assert_eq!(session.visible_explored(), session.explored());
    }

    #[test]
    fn edits_cancel_a_running_animation() {
        let mut session = MazeSession::new(5, 5, 21).expect("valid");
        session.start_animation();
        session.set_end(Cell::new(1, 1)).expect("in bounds");
        assert!(!session.is_animating());
        assert!(session.advance_animation(1));
    }

    #[test]
    fn from_maze_reports_unreachable_goal_as_no_path() {
        let walls: WallSet = [
            Wall::between(Cell::new(1, 1), Cell::new(1, 0)),
            Wall::between(Cell::new(1, 1), Cell::new(0, 1)),
        ]
        .into_iter()
        .flatten()
        .collect();
        let maze = Maze::with_walls(2, 2, walls).expect("in bounds");
        let session =
            MazeSession::from_maze(maze, 0, Cell::new(0, 0), Cell::new(1, 1)).expect("in bounds");
        assert_eq!(session.path(), None);
        assert_eq!(session.search().steps(), None);
    }

    #[test]
    fn playback_clamps_to_total() {
        let mut playback = ExplorationPlayback::new(3);
        assert!(!playback.advance(2));
        assert!(playback.advance(5));
        assert_eq!(playback.revealed(), 3);
    }
}
