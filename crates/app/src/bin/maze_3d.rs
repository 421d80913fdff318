//! First-person 3D view of a generated maze.

use clap::Parser;
use macroquad::prelude::*;
use macroquad::window::Conf;
use maze_app::fly_view::{
    FLY_INSTRUCTIONS, FlyInput, FlyState, WORLD_CELL, WallBox, marker_position,
    minimap_geometry, minimap_point, minimap_side, path_marker_color, wall_boxes,
};
use maze_app::{init_logging, path_summary};
use maze_core::{Cell, CellGeometry, MazeSession, format_fingerprint, runtime_seed};

const SKY_COLOR: Color = Color { r: 0.53, g: 0.72, b: 0.85, a: 1.0 };
const FLOOR_COLOR: Color = Color { r: 0.45, g: 0.42, b: 0.38, a: 1.0 };
const WALL_COLOR: Color = Color { r: 0.75, g: 0.72, b: 0.66, a: 1.0 };
const WALL_EDGE_COLOR: Color = Color { r: 0.3, g: 0.28, b: 0.25, a: 1.0 };
const MINIMAP_BACKGROUND: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.5 };
const MINIMAP_CELL: Color = Color { r: 0.3, g: 0.3, b: 0.3, a: 1.0 };
const MINIMAP_PATH_CELL: Color = Color { r: 0.7, g: 0.7, b: 0.7, a: 1.0 };
const MINIMAP_WALL: Color = Color { r: 0.8, g: 0.4, b: 0.2, a: 1.0 };
const ENDPOINT_RADIUS: f32 = 0.3;
const PATH_MARKER_RADIUS: f32 = 0.15;

const HELD_KEYS: [KeyCode; 8] = [
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Q,
    KeyCode::E,
    KeyCode::Z,
    KeyCode::X,
];
const TAPPED_KEYS: [KeyCode; 3] = [KeyCode::R, KeyCode::P, KeyCode::Escape];

#[derive(Parser, Debug)]
#[command(author, version, about = "First-person 3D maze viewer", long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Maze height in cells
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    /// Maze seed; a fresh one is chosen when omitted
    #[arg(short, long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "3D A* Maze".to_owned(),
        window_width: 1024,
        window_height: 768,
        high_dpi: false,
        ..Default::default()
    }
}

fn capture_fly_input() -> FlyInput {
    FlyInput {
        keys_down: HELD_KEYS.into_iter().filter(|key| is_key_down(*key)).collect(),
        keys_pressed: TAPPED_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(runtime_seed);
    let session = match MazeSession::new(args.width as usize, args.height as usize, seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("cannot build maze: {err}");
            return;
        }
    };
    log::info!(
        "3D maze {}x{} seed {seed} fingerprint {}: {}",
        session.width(),
        session.height(),
        format_fingerprint(session.maze().fingerprint()),
        path_summary(session.search()),
    );

    let walls = wall_boxes(session.maze());
    let mut state = FlyState::new(session.width(), session.height());

    loop {
        state.tick(&capture_fly_input());
        if state.quit_requested {
            break;
        }

        draw_scene(&session, &state, &walls);
        draw_overlay(&session, &state);
        next_frame().await
    }
}

fn draw_scene(session: &MazeSession, state: &FlyState, walls: &[WallBox]) {
    clear_background(SKY_COLOR);
    set_camera(&Camera3D {
        position: state.pose.position(),
        target: state.pose.target(),
        up: state.pose.up(),
        ..Default::default()
    });

    let half_w = session.width() as f32 * WORLD_CELL / 2.0;
    let half_h = session.height() as f32 * WORLD_CELL / 2.0;
    draw_plane(vec3(half_w, 0.0, half_h), vec2(half_w, half_h), None, FLOOR_COLOR);
    for wall in walls {
        draw_cube(wall.center, wall.size, None, WALL_COLOR);
        draw_cube_wires(wall.center, wall.size, WALL_EDGE_COLOR);
    }

    draw_sphere(marker_position(session.start(), ENDPOINT_RADIUS), ENDPOINT_RADIUS, None, GREEN);
    draw_sphere(marker_position(session.end(), ENDPOINT_RADIUS), ENDPOINT_RADIUS, None, RED);
    if state.show_path
        && let Some(path) = session.path()
    {
        for (index, cell) in path.iter().enumerate() {
            let color = path_marker_color(index, path.len());
            draw_sphere(marker_position(*cell, 0.2), PATH_MARKER_RADIUS, None, color);
        }
    }

    set_default_camera();
}

fn draw_overlay(session: &MazeSession, state: &FlyState) {
    let (screen_w, screen_h) = (screen_width(), screen_height());
    let geometry = minimap_geometry(screen_w, screen_h, session.width(), session.height());
    let side = minimap_side(screen_w, screen_h);
    let (left, top) = geometry.grid_origin();
    draw_rectangle(left, top, side, side, MINIMAP_BACKGROUND);

    let path = session.path().unwrap_or_default();
    for cell in session.maze().cells() {
        let color = if path.contains(&cell) { MINIMAP_PATH_CELL } else { MINIMAP_CELL };
        let rect = geometry.cell_rect(cell).inset(geometry.cell_size * 0.1);
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, color);
    }

    let thickness = (geometry.cell_size * 0.1).max(1.0);
    let (grid_w, grid_h) = geometry.grid_pixel_size();
    draw_rectangle_lines(left, top, grid_w, grid_h, thickness * 2.0, MINIMAP_WALL);
    for wall in session.maze().walls() {
        let ((x1, y1), (x2, y2)) = geometry.wall_segment(*wall);
        draw_line(x1, y1, x2, y2, thickness, MINIMAP_WALL);
    }

    draw_minimap_marker(&geometry, session.start(), GREEN);
    draw_minimap_marker(&geometry, session.end(), RED);
    let (camera_x, camera_y) = minimap_point(&geometry, &state.pose);
    draw_circle(camera_x, camera_y, (geometry.cell_size * 0.25).max(2.0), WHITE);

    draw_text(FLY_INSTRUCTIONS, 10.0, screen_h - 12.0, 20.0, BLACK);
}

fn draw_minimap_marker(geometry: &CellGeometry, cell: Cell, color: Color) {
    let rect = geometry.cell_rect(cell).inset(geometry.cell_size * 0.3);
    draw_rectangle(rect.x, rect.y, rect.width, rect.height, color);
}
