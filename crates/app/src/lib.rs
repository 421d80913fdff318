pub mod app_loop;
pub mod cell_size;
pub mod fly_view;
pub mod screen_layout;
pub mod seed;
pub mod settings_file;

use env_logger::Env;
use maze_core::SearchOutcome;

pub const APP_NAME: &str = "A* Maze Visualization";

/// Control column width in pixels, left of the maze.
pub const CONTROL_PANEL_WIDTH: f32 = 250.0;
/// Blank border around the grid inside the maze panel.
pub const MAZE_MARGIN: f32 = 50.0;

/// Format a seed as an exact decimal string, or `Random` when none is pinned.
pub fn format_seed(seed: Option<u64>) -> String {
    match seed {
        Some(seed) => seed.to_string(),
        None => "Random".to_string(),
    }
}

/// Logs at `info` unless `RUST_LOG` says otherwise. Later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}

pub fn path_summary(search: &SearchOutcome) -> String {
    match search.steps() {
        Some(steps) => format!("Path: {steps} steps, {} explored", search.explored.len()),
        None => format!("No path, {} explored", search.explored.len()),
    }
}
