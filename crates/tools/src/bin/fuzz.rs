use anyhow::{Result, bail};
use clap::Parser;
use maze_core::{Cell, Maze, bfs_distance, find_path, generate_maze, reachable_cells};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Sweep generated mazes and cross-check A* against BFS
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    cases: u32,
    /// Largest width or height tried
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..=256))]
    max_side: u32,
}

fn roll(rng: &mut ChaCha8Rng, upper: u32) -> u32 {
    (rng.next_u64() % u64::from(upper)) as u32
}

fn random_cell(rng: &mut ChaCha8Rng, maze: &Maze) -> Cell {
    Cell::new(roll(rng, maze.width() as u32) as i32, roll(rng, maze.height() as u32) as i32)
}

fn check_case(maze: &Maze, start: Cell, end: Cell) -> Result<()> {
    let open_edges = maze.open_edge_count();
    if open_edges != maze.cell_count() - 1 {
        bail!("expected a spanning tree, found {open_edges} open edges");
    }
    let reached = reachable_cells(maze, Cell::new(0, 0)).len();
    if reached != maze.cell_count() {
        bail!("only {reached} of {} cells are reachable", maze.cell_count());
    }

    let outcome = find_path(maze, start, end);
    let Some(path) = &outcome.path else {
        bail!("no path from {start} to {end} in a connected maze");
    };
    if path.first() != Some(&start) || path.last() != Some(&end) {
        bail!("path does not run from {start} to {end}");
    }
    if let Some(pair) = path.windows(2).find(|pair| !maze.is_open(pair[0], pair[1])) {
        bail!("path steps through a wall between {} and {}", pair[0], pair[1]);
    }
    if outcome.explored.last() != Some(&end) {
        bail!("search did not finish on the end cell");
    }
    let steps = outcome.steps().unwrap_or_default();
    if bfs_distance(maze, start, end) != Some(steps) {
        bail!("A* found {steps} steps but BFS disagrees");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting maze fuzz on seed {} for {} cases...", args.seed, args.cases);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for case in 0..args.cases {
        let width = roll(&mut rng, args.max_side) as usize + 1;
        let height = roll(&mut rng, args.max_side) as usize + 1;
        let maze_seed = rng.next_u64();
        let maze = generate_maze(width, height, maze_seed)?;
        let start = random_cell(&mut rng, &maze);
        let end = random_cell(&mut rng, &maze);

        if let Err(err) = check_case(&maze, start, end) {
            bail!(
                "case {case} failed ({width}x{height}, seed {maze_seed}, {start} -> {end}): {err}"
            );
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
