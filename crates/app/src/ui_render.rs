//! Rendering for the control column and the maze panel.

use std::collections::HashSet;

use crate::ui_text::{
    CONTROL_LINES, LEGEND_LABELS, SEED_PROMPT_LINES, banner_text, debug_info_lines,
    seed_input_text,
};
use macroquad::prelude::*;
use maze_app::app_loop::{AppMode, AppState};
use maze_app::screen_layout::{PanelRect, ScreenLayout};
use maze_core::{Cell, CellGeometry, Maze, MazeSession, Segment};

const CONTROL_BACKGROUND: Color = Color { r: 0.68, g: 0.85, b: 0.90, a: 1.0 };
const SEED_BOX_BACKGROUND: Color = Color { r: 0.78, g: 0.88, b: 1.0, a: 0.94 };
const EXPLORED_COLOR: Color = MAGENTA;
const PATH_COLOR: Color = YELLOW;
const START_COLOR: Color = GREEN;
const END_COLOR: Color = RED;
const LEGEND_COLORS: [Color; 4] = [START_COLOR, END_COLOR, PATH_COLOR, EXPLORED_COLOR];
const WALL_THICKNESS: f32 = 3.0;
const TEXT_X: f32 = 20.0;
const LINE_STEP: f32 = 25.0;
const CURSOR_BLINK_SECONDS: f64 = 0.5;

/// Which overlay fills a cell, from bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellLayer {
    Explored,
    Path,
    Start,
    End,
}

pub fn draw_frame(
    session: &MazeSession,
    app: &AppState,
    layout: &ScreenLayout,
    geometry: &CellGeometry,
) {
    clear_background(WHITE);
    draw_control_panel(session, app, layout.controls);
    draw_maze_cells(session, app, geometry);
    draw_walls(geometry, session.maze());
    draw_banner(&app.mode, layout.maze);
}

fn draw_maze_cells(session: &MazeSession, app: &AppState, geometry: &CellGeometry) {
    let explored: HashSet<Cell> = if app.show_exploration {
        session.visible_explored().iter().copied().collect()
    } else {
        HashSet::new()
    };
    let path: &[Cell] = session.path().unwrap_or_default();
    let on_path: HashSet<Cell> = path.iter().copied().collect();

    for cell in session.maze().cells() {
        let Some(layer) = top_layer(cell, session.start(), session.end(), &on_path, &explored)
        else {
            continue;
        };
        let (inset, color) = match layer {
            CellLayer::Explored => (3.0, EXPLORED_COLOR),
            CellLayer::Path => (5.0, PATH_COLOR),
            CellLayer::Start => (5.0, START_COLOR),
            CellLayer::End => (5.0, END_COLOR),
        };
        let rect = geometry.cell_rect(cell).inset(inset);
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, color);
    }
}

/// Start and end sit above the path, which sits above explored cells.
fn top_layer(
    cell: Cell,
    start: Cell,
    end: Cell,
    path: &HashSet<Cell>,
    explored: &HashSet<Cell>,
) -> Option<CellLayer> {
    if cell == end {
        Some(CellLayer::End)
    } else if cell == start {
        Some(CellLayer::Start)
    } else if path.contains(&cell) {
        Some(CellLayer::Path)
    } else if explored.contains(&cell) {
        Some(CellLayer::Explored)
    } else {
        None
    }
}

fn draw_walls(geometry: &CellGeometry, maze: &Maze) {
    for ((x1, y1), (x2, y2)) in wall_segments(geometry, maze) {
        draw_line(x1, y1, x2, y2, WALL_THICKNESS, BLACK);
    }
}

/// The four boundary edges followed by one segment per interior wall.
fn wall_segments(geometry: &CellGeometry, maze: &Maze) -> Vec<Segment> {
    let (left, top) = geometry.grid_origin();
    let (grid_w, grid_h) = geometry.grid_pixel_size();
    let (right, bottom) = (left + grid_w, top + grid_h);

    let mut segments = vec![
        ((left, top), (right, top)),
        ((right, top), (right, bottom)),
        ((left, bottom), (right, bottom)),
        ((left, top), (left, bottom)),
    ];
    segments.extend(maze.walls().iter().map(|wall| geometry.wall_segment(*wall)));
    segments
}

fn draw_control_panel(session: &MazeSession, app: &AppState, panel: PanelRect) {
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, CONTROL_BACKGROUND);
    draw_text(maze_app::APP_NAME, TEXT_X, 32.0, 24.0, BLACK);

    let mut y = 70.0;
    draw_text("Controls:", TEXT_X, y, 20.0, BLACK);
    y += LINE_STEP;
    for line in CONTROL_LINES {
        draw_text(line, TEXT_X, y, 18.0, BLACK);
        y += LINE_STEP;
    }

    y += 10.0;
    if let AppMode::EnteringSeed { buffer } = &app.mode {
        draw_seed_prompt(buffer, panel, y);
    } else {
        draw_text("Debugging Info:", TEXT_X, y, 20.0, BLACK);
        y += LINE_STEP;
        for line in debug_info_lines(app, session) {
            draw_text(&line, TEXT_X, y, 16.0, BLACK);
            y += 20.0;
        }
    }

    draw_legend(panel);
}

fn draw_seed_prompt(buffer: &str, panel: PanelRect, top: f32) {
    let box_width = panel.width - 20.0;
    draw_rectangle(10.0, top, box_width, 150.0, SEED_BOX_BACKGROUND);
    draw_rectangle_lines(10.0, top, box_width, 150.0, 2.0, BLACK);
    draw_text("Enter Seed Value:", TEXT_X, top + 25.0, 20.0, BLACK);
    for (index, line) in SEED_PROMPT_LINES.iter().enumerate() {
        draw_text(line, TEXT_X, top + 50.0 + index as f32 * 20.0, 16.0, BLACK);
    }

    let input_y = top + 50.0 + SEED_PROMPT_LINES.len() as f32 * 20.0;
    draw_rectangle(TEXT_X, input_y, box_width - 20.0, 30.0, WHITE);
    draw_rectangle_lines(TEXT_X, input_y, box_width - 20.0, 30.0, 1.0, BLACK);
    let cursor_visible = (get_time() / CURSOR_BLINK_SECONDS) as u64 % 2 == 0;
    let input_text = seed_input_text(buffer, cursor_visible);
    draw_text(&input_text, TEXT_X + 5.0, input_y + 21.0, 18.0, BLACK);
}

fn draw_legend(panel: PanelRect) {
    let top = panel.y + panel.height - 150.0;
    draw_text("Legend:", TEXT_X, top, 20.0, BLACK);
    for (index, (label, color)) in LEGEND_LABELS.iter().zip(LEGEND_COLORS).enumerate() {
        let y = top + 15.0 + index as f32 * LINE_STEP;
        draw_rectangle(TEXT_X, y, 20.0, 20.0, color);
        draw_text(label, TEXT_X + 30.0, y + 15.0, 16.0, BLACK);
    }
}

fn draw_banner(mode: &AppMode, panel: PanelRect) {
    let Some(text) = banner_text(mode) else {
        return;
    };
    let color = match mode {
        AppMode::SelectingStart => DARKGREEN,
        AppMode::SelectingEnd => RED,
        _ => DARKGRAY,
    };
    let dims = measure_text(text, None, 20, 1.0);
    draw_text(text, panel.x + (panel.width - dims.width) / 2.0, panel.y + 30.0, 20.0, color);
}
