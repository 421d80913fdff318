use maze_core::{
    Cell, CellGeometry, Maze, MazeGenerator, MazeSession, Wall, WallSet, find_path, generate_maze,
};

fn walls(pairs: &[((i32, i32), (i32, i32))]) -> WallSet {
    pairs
        .iter()
        .map(|&((ax, ay), (bx, by))| {
            Wall::between(Cell::new(ax, ay), Cell::new(bx, by)).expect("test walls are adjacent")
        })
        .collect()
}

#[test]
fn single_cell_maze_has_no_walls_and_trivial_path() {
    let maze = generate_maze(1, 1, 0).expect("1x1 is valid");
    assert!(maze.walls().is_empty());

    let outcome = find_path(&maze, Cell::new(0, 0), Cell::new(0, 0));
    assert_eq!(outcome.path, Some(vec![Cell::new(0, 0)]));
}

#[test]
fn open_two_by_two_grid_path_has_three_cells() {
    let maze = Maze::open(2, 2).expect("valid");
    let path = find_path(&maze, Cell::new(0, 0), Cell::new(1, 1)).path.expect("grid is open");

    assert_eq!(path.len(), 3);
    let detours = [
        vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)],
        vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)],
    ];
    assert!(detours.contains(&path), "unexpected path {path:?}");
}

#[test]
fn disconnected_corners_in_three_by_three_grid_have_no_path() {
    // Every edge is walled except a corridor along the top row and down the left column,
    // so (2, 2) is sealed off from (0, 0).
    let mut all = Maze::fully_walled(3, 3).expect("valid").walls().clone();
    for (a, b) in [((0, 0), (1, 0)), ((1, 0), (2, 0)), ((0, 0), (0, 1)), ((0, 1), (0, 2))] {
        let wall = Wall::between(Cell::new(a.0, a.1), Cell::new(b.0, b.1)).expect("adjacent");
        assert!(all.remove(wall), "{a:?}-{b:?} starts walled");
    }
    let maze = Maze::with_walls(3, 3, all).expect("walls in bounds");

    let outcome = find_path(&maze, Cell::new(0, 0), Cell::new(2, 2));
    assert_eq!(outcome.path, None);
    assert_eq!(outcome.explored.len(), 5);
}

#[test]
fn coordinate_transform_round_trips_and_rejects_outside_pixels() {
    let geometry = CellGeometry::new(5, 5, 40.0, 0.0);
    let (px, py) = geometry.cell_origin(Cell::new(3, 4));
    assert_eq!(geometry.pixel_to_cell(px, py), Some(Cell::new(3, 4)));

    let (center_x, center_y) = geometry.cell_center(Cell::new(3, 4));
    assert_eq!(geometry.pixel_to_cell(center_x, center_y), Some(Cell::new(3, 4)));

    assert_eq!(geometry.pixel_to_cell(200.0, 10.0), None);
    assert_eq!(geometry.pixel_to_cell(10.0, 200.0), None);
    assert_eq!(geometry.pixel_to_cell(-1.0, 10.0), None);
}

#[test]
fn hand_built_maze_matches_known_detour() {
    // Two routes to the goal; only the shorter one may be returned.
    let maze = Maze::with_walls(
        5,
        5,
        walls(&[
            ((0, 1), (1, 1)),
            ((1, 1), (2, 1)),
            ((2, 1), (3, 1)),
            ((3, 1), (3, 2)),
            ((3, 2), (3, 3)),
            ((1, 3), (2, 3)),
            ((2, 3), (3, 3)),
        ]),
    )
    .expect("walls in bounds");

    let path = find_path(&maze, Cell::new(0, 0), Cell::new(4, 4)).path.expect("connected");
    assert_eq!(path.len(), 9);
}

#[test]
fn session_exposes_everything_a_renderer_reads() {
    let session = MazeSession::new(7, 5, 99).expect("valid");
    assert_eq!((session.width(), session.height()), (7, 5));
    assert_eq!(session.maze().open_edge_count(), 7 * 5 - 1);
    assert!(session.path().is_some());
    assert!(!session.explored().is_empty());
    assert_eq!(session.visible_explored(), session.explored());
}

#[test]
fn generator_rejects_empty_grids() {
    assert!(MazeGenerator::new(0, 0).is_err());
    assert!(MazeSession::new(4, 0, 1).is_err());
}
