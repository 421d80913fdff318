//! Text for the control column, legend, and selection banners.

use maze_app::app_loop::{AppMode, AppState};
use maze_app::{format_seed, path_summary};
use maze_core::{MazeSession, format_fingerprint};

pub const CONTROL_LINES: [&str; 7] = [
    "R: Regenerate maze",
    "S: Set start position (click)",
    "E: Set end position (click)",
    "A: Toggle explored nodes",
    "Space: Animate search",
    "D: Set seed for debugging",
    "Q: Quit",
];

pub const SEED_PROMPT_LINES: [&str; 3] =
    ["Type a number to set a specific seed", "Press Enter to confirm", "Press Esc to cancel"];

pub const LEGEND_LABELS: [&str; 4] = ["Start position", "End position", "Path", "Explored nodes"];

pub fn banner_text(mode: &AppMode) -> Option<&'static str> {
    match mode {
        AppMode::SelectingStart => Some("Click to set start position"),
        AppMode::SelectingEnd => Some("Click to set end position"),
        AppMode::Animating => Some("Animating search..."),
        AppMode::Idle | AppMode::EnteringSeed { .. } => None,
    }
}

pub fn debug_info_lines(app: &AppState, session: &MazeSession) -> Vec<String> {
    let exploration = if app.show_exploration { "shown" } else { "hidden" };
    vec![
        format!("Current Seed: {}", format_seed(app.pinned_seed)),
        format!("Maze Seed: {}", session.seed()),
        format!("Maze: {}x{}", session.width(), session.height()),
        format!("Fingerprint: {}", format_fingerprint(session.maze().fingerprint())),
        path_summary(session.search()),
        format!("Explored nodes: {exploration}"),
    ]
}

/// The seed input with a blinking cursor.
pub fn seed_input_text(buffer: &str, cursor_visible: bool) -> String {
    if cursor_visible { format!("{buffer}|") } else { buffer.to_string() }
}
