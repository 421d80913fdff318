use maze_core::{
    Cell, Maze, MazeGenerator, Wall, WallSet, bfs_distance, find_path, maze_rng, reachable_cells,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn check_generated_maze(width: usize, height: usize, seed: u64) -> Result<(), String> {
    let maze = MazeGenerator::new(width, height)
        .map_err(|err| err.to_string())?
        .generate(&mut maze_rng(seed));

    let expected_open = width * height - 1;
    if maze.open_edge_count() != expected_open {
        return Err(format!(
            "{width}x{height} seed {seed}: {} open edges, expected {expected_open}",
            maze.open_edge_count()
        ));
    }

    let reached = reachable_cells(&maze, Cell::new(0, 0));
    if reached.len() != width * height {
        return Err(format!("{width}x{height} seed {seed}: only {} cells reachable", reached.len()));
    }

    for wall in maze.walls() {
        let (a, b) = wall.cells();
        if !maze.in_bounds(a) || !maze.in_bounds(b) || !a.is_adjacent(b) {
            return Err(format!("{width}x{height} seed {seed}: invalid wall {a} - {b}"));
        }
    }

    Ok(())
}

/// Random wall subset over a grid, possibly disconnecting it.
fn random_walls(width: usize, height: usize, seed: u64) -> Maze {
    let open = Maze::open(width, height).expect("valid dimensions");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let walls: WallSet = open.grid_edges().filter(|_| rng.next_u64() % 3 == 0).collect();
    Maze::with_walls(width, height, walls).expect("grid edges stay in bounds")
}

fn check_astar_against_bfs(maze: &Maze, start: Cell, end: Cell) -> Result<(), String> {
    let walls_before = maze.walls().clone();
    let outcome = find_path(maze, start, end);
    let reference = bfs_distance(maze, start, end);

    match (&outcome.path, reference) {
        (Some(path), Some(distance)) => {
            if path.len() - 1 != distance {
                return Err(format!("A* found {} steps, BFS found {distance}", path.len() - 1));
            }
            if path.first() != Some(&start) || path.last() != Some(&end) {
                return Err("path does not run start to end".to_string());
            }
            for step in path.windows(2) {
                if !maze.is_open(step[0], step[1]) {
                    return Err(format!("path crosses a wall between {} and {}", step[0], step[1]));
                }
            }
        }
        (None, None) => {}
        (found, expected) => {
            return Err(format!("A* returned {found:?} but BFS distance is {expected:?}"));
        }
    }

    let again = find_path(maze, start, end);
    if again.steps() != outcome.steps() {
        return Err("repeated search changed the path length".to_string());
    }
    if maze.walls() != &walls_before {
        return Err("search mutated the wall set".to_string());
    }
    Ok(())
}

#[test]
fn generated_mazes_are_spanning_trees() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let inputs = (1_usize..=20, 1_usize..=20, any::<u64>());

    runner
        .run(&inputs, |(width, height, seed)| {
            check_generated_maze(width, height, seed).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("generated mazes should be connected and acyclic");
}

#[test]
fn astar_matches_bfs_on_generated_mazes() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let inputs = (2_usize..=15, 2_usize..=15, any::<u64>(), any::<(u16, u16, u16, u16)>());

    runner
        .run(&inputs, |(width, height, seed, (sx, sy, ex, ey))| {
            let maze = MazeGenerator::new(width, height)
                .expect("valid dimensions")
                .generate(&mut maze_rng(seed));
            let start = Cell::new(i32::from(sx) % width as i32, i32::from(sy) % height as i32);
            let end = Cell::new(i32::from(ex) % width as i32, i32::from(ey) % height as i32);
            check_astar_against_bfs(&maze, start, end).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("A* should be optimal on generated mazes");
}

#[test]
fn astar_matches_bfs_on_random_wall_sets() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(96));
    let inputs = (1_usize..=10, 1_usize..=10, any::<u64>());

    runner
        .run(&inputs, |(width, height, seed)| {
            let maze = random_walls(width, height, seed);
            let end = Cell::new(width as i32 - 1, height as i32 - 1);
            check_astar_against_bfs(&maze, Cell::new(0, 0), end).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("A* should agree with BFS, including when no path exists");
}

#[test]
fn wall_constructor_never_accepts_non_adjacent_pairs() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(128));
    let inputs = (-5_i32..5, -5_i32..5, -5_i32..5, -5_i32..5);

    runner
        .run(&inputs, |(ax, ay, bx, by)| {
            let a = Cell::new(ax, ay);
            let b = Cell::new(bx, by);
            let adjacent = a.manhattan(b) == 1;
            if Wall::between(a, b).is_some() != adjacent {
                return Err(TestCaseError::fail(format!("{a} / {b} adjacency mismatch")));
            }
            Ok(())
        })
        .expect("walls only join adjacent cells");
}
