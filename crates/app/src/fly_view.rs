//! Camera, input, and scene geometry for the first-person 3D maze view.
//!
//! The camera hangs above the ground plane looking straight down. Grid `x` maps to world
//! `x`, grid `y` maps to world `z`, and world `y` is up.

use macroquad::prelude::{Color, KeyCode, Vec3, vec3};
use maze_core::{Cell, CellGeometry, Maze, Segment};

/// World units per grid cell.
pub const WORLD_CELL: f32 = 2.0;
pub const WALL_HEIGHT: f32 = 1.5;
pub const WALL_THICKNESS: f32 = 0.1;
/// Ground distance covered per frame while a movement key is held.
pub const MOVE_STEP: f32 = 0.1;
pub const TURN_STEP_DEGREES: f32 = 1.0;
pub const ZOOM_STEP: f32 = 0.1;
pub const MIN_CAMERA_HEIGHT: f32 = 1.0;
/// Minimap side as a share of the shorter screen edge.
pub const MINIMAP_FRACTION: f32 = 0.3;
const MINIMAP_PADDING: f32 = 10.0;

pub const FLY_INSTRUCTIONS: &str =
    "WASD: Move | Q/E: Rotate | Z/X: Zoom In/Out | R: Reset | P: Path | ESC: Quit";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub x: f32,
    pub z: f32,
    pub height: f32,
    pub heading_degrees: f32,
}

impl CameraPose {
    /// Centered over the grid and high enough to see all of it.
    pub fn overview(width: usize, height: usize) -> Self {
        Self {
            x: width as f32 * WORLD_CELL / 2.0,
            z: height as f32 * WORLD_CELL / 2.0,
            height: width.max(height) as f32 * WORLD_CELL * 0.8,
            heading_degrees: 0.0,
        }
    }

    /// Ground direction shown at the top of the screen.
    pub fn forward(&self) -> (f32, f32) {
        let heading = self.heading_degrees.to_radians();
        (-heading.sin(), -heading.cos())
    }

    pub fn right(&self) -> (f32, f32) {
        let heading = self.heading_degrees.to_radians();
        (heading.cos(), -heading.sin())
    }

    pub fn position(&self) -> Vec3 {
        vec3(self.x, self.height, self.z)
    }

    pub fn target(&self) -> Vec3 {
        vec3(self.x, 0.0, self.z)
    }

    pub fn up(&self) -> Vec3 {
        let (fx, fz) = self.forward();
        vec3(fx, 0.0, fz)
    }

    /// Position in cell units.
    pub fn grid_position(&self) -> (f32, f32) {
        (self.x / WORLD_CELL, self.z / WORLD_CELL)
    }
}

pub fn max_camera_height(width: usize, height: usize) -> f32 {
    width.max(height) as f32 * WORLD_CELL * 1.5
}

/// Keys for one frame of the 3D view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlyInput {
    /// Held keys; movement, rotation and zoom repeat every frame they stay down.
    pub keys_down: Vec<KeyCode>,
    /// Keys that went down this frame.
    pub keys_pressed: Vec<KeyCode>,
}

impl FlyInput {
    pub fn held(keys: &[KeyCode]) -> Self {
        Self { keys_down: keys.to_vec(), ..Default::default() }
    }

    pub fn tapped(keys: &[KeyCode]) -> Self {
        Self { keys_pressed: keys.to_vec(), ..Default::default() }
    }

    fn is_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn was_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }
}

pub struct FlyState {
    pub pose: CameraPose,
    pub show_path: bool,
    pub quit_requested: bool,
    home: CameraPose,
    max_height: f32,
}

impl FlyState {
    pub fn new(width: usize, height: usize) -> Self {
        let home = CameraPose::overview(width, height);
        Self {
            pose: home,
            show_path: false,
            quit_requested: false,
            home,
            max_height: max_camera_height(width, height),
        }
    }

    pub fn home(&self) -> CameraPose {
        self.home
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Process input for a single frame.
    pub fn tick(&mut self, input: &FlyInput) {
        if input.was_pressed(KeyCode::Escape) {
            self.quit_requested = true;
            return;
        }
        if input.was_pressed(KeyCode::R) {
            log::info!("camera reset");
            self.pose = self.home;
        }
        if input.was_pressed(KeyCode::P) {
            self.show_path = !self.show_path;
            log::info!("path markers {}", if self.show_path { "shown" } else { "hidden" });
        }

        // Movement uses the heading from the start of the frame.
        let (fx, fz) = self.pose.forward();
        let (rx, rz) = self.pose.right();
        let moves = [
            (KeyCode::W, (fx, fz)),
            (KeyCode::S, (-fx, -fz)),
            (KeyCode::D, (rx, rz)),
            (KeyCode::A, (-rx, -rz)),
        ];
        let mut step = (0.0, 0.0);
        for (key, (dx, dz)) in moves {
            if input.is_down(key) {
                step.0 += dx * MOVE_STEP;
                step.1 += dz * MOVE_STEP;
            }
        }
        self.pose.x += step.0;
        self.pose.z += step.1;

        if input.is_down(KeyCode::Q) {
            self.pose.heading_degrees += TURN_STEP_DEGREES;
        }
        if input.is_down(KeyCode::E) {
            self.pose.heading_degrees -= TURN_STEP_DEGREES;
        }
        self.pose.heading_degrees = self.pose.heading_degrees.rem_euclid(360.0);

        if input.is_down(KeyCode::Z) {
            self.pose.height = (self.pose.height - ZOOM_STEP).max(MIN_CAMERA_HEIGHT);
        }
        if input.is_down(KeyCode::X) {
            self.pose.height = (self.pose.height + ZOOM_STEP).min(self.max_height);
        }
    }
}

/// An axis-aligned box given by its center and full extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallBox {
    pub center: Vec3,
    pub size: Vec3,
}

/// The four outer walls followed by one box per interior wall.
pub fn wall_boxes(maze: &Maze) -> Vec<WallBox> {
    let plan = CellGeometry::new(maze.width(), maze.height(), WORLD_CELL, 0.0);
    let (w, h) = plan.grid_pixel_size();
    let boundary = [
        ((0.0, 0.0), (w, 0.0)),
        ((w, 0.0), (w, h)),
        ((0.0, h), (w, h)),
        ((0.0, 0.0), (0.0, h)),
    ];
    boundary
        .into_iter()
        .chain(maze.walls().iter().map(|wall| plan.wall_segment(*wall)))
        .map(segment_box)
        .collect()
}

fn segment_box(((x1, z1), (x2, z2)): Segment) -> WallBox {
    WallBox {
        center: vec3((x1 + x2) / 2.0, WALL_HEIGHT / 2.0, (z1 + z2) / 2.0),
        size: vec3(
            (x2 - x1).abs().max(WALL_THICKNESS),
            WALL_HEIGHT,
            (z2 - z1).abs().max(WALL_THICKNESS),
        ),
    }
}

/// World point above the middle of `cell`.
pub fn marker_position(cell: Cell, lift: f32) -> Vec3 {
    vec3((cell.x as f32 + 0.5) * WORLD_CELL, lift, (cell.y as f32 + 0.5) * WORLD_CELL)
}

/// Green at the start of the path fading to red at the end.
pub fn path_marker_color(index: usize, len: usize) -> Color {
    let progress = index as f32 / len.saturating_sub(1).max(1) as f32;
    Color::new(progress, 1.0 - progress, 0.0, 0.8)
}

/// Minimap grid placement in the top-right corner of the screen.
pub fn minimap_geometry(
    screen_width: f32,
    screen_height: f32,
    width: usize,
    height: usize,
) -> CellGeometry {
    let side = minimap_side(screen_width, screen_height);
    let cell_size = side / width.max(height) as f32;
    CellGeometry::new(width, height, cell_size, 0.0)
        .with_offset(screen_width - side - MINIMAP_PADDING, MINIMAP_PADDING)
}

pub fn minimap_side(screen_width: f32, screen_height: f32) -> f32 {
    screen_width.min(screen_height) * MINIMAP_FRACTION
}

/// Where the camera sits on the minimap, in screen pixels.
pub fn minimap_point(geometry: &CellGeometry, pose: &CameraPose) -> (f32, f32) {
    let (origin_x, origin_y) = geometry.grid_origin();
    let (grid_x, grid_y) = pose.grid_position();
    (origin_x + grid_x * geometry.cell_size, origin_y + grid_y * geometry.cell_size)
}
