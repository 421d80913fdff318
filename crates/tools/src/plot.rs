//! Static SVG plot of a maze, its search, and the solution path.

use std::fs;
use std::io;
use std::path::Path;

use maze_core::{Cell, CellGeometry, Maze};
use svg::Document;
use svg::node::element::{Circle, Group, Line, Polyline, Rectangle, Text};

/// Okabe-Ito style palette, matched to the window legend.
mod colors {
    pub const WALL: &str = "#000000";
    pub const EXPLORED: &str = "#ADD8E6";
    pub const PATH: &str = "#0072B2";
    pub const START: &str = "#009E73";
    pub const END: &str = "#D55E00";
}

const CELL_SIZE: f32 = 40.0;
const MARGIN: f32 = 30.0;
const TITLE_BAND: f32 = 30.0;
const WALL_WIDTH: f32 = 2.0;

pub struct PlotScene<'a> {
    pub maze: &'a Maze,
    pub start: Cell,
    pub end: Cell,
    pub path: Option<&'a [Cell]>,
    pub explored: Option<&'a [Cell]>,
}

pub fn render_plot(scene: &PlotScene<'_>) -> Document {
    let maze = scene.maze;
    let geometry = CellGeometry::new(maze.width(), maze.height(), CELL_SIZE, MARGIN)
        .with_offset(0.0, TITLE_BAND);
    let (framed_w, framed_h) = geometry.framed_size();
    let width = framed_w;
    let height = framed_h + TITLE_BAND;

    let mut doc = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height));

    doc = doc.add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", "white"),
    );
    doc = doc.add(
        Text::new("Maze with A* Path")
            .set("x", width / 2.0)
            .set("y", TITLE_BAND - 8.0)
            .set("text-anchor", "middle")
            .set("font-size", 16)
            .set("font-family", "sans-serif"),
    );

    if let Some(explored) = scene.explored {
        doc = doc.add(render_explored(&geometry, explored));
    }
    if let Some(path) = scene.path {
        doc = doc.add(render_path(&geometry, path));
    }
    doc = doc.add(render_endpoint(&geometry, scene.start, colors::START));
    doc = doc.add(render_endpoint(&geometry, scene.end, colors::END));
    doc.add(render_walls(&geometry, maze))
}

pub fn save_plot(path: &Path, doc: &Document) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    svg::save(path, doc)
}

fn render_walls(geometry: &CellGeometry, maze: &Maze) -> Group {
    let mut group = Group::new()
        .set("id", "walls")
        .set("stroke", colors::WALL)
        .set("stroke-width", WALL_WIDTH)
        .set("stroke-linecap", "square");

    let (origin_x, origin_y) = geometry.grid_origin();
    let (grid_w, grid_h) = geometry.grid_pixel_size();
    group = group.add(
        Rectangle::new()
            .set("x", origin_x)
            .set("y", origin_y)
            .set("width", grid_w)
            .set("height", grid_h)
            .set("fill", "none"),
    );

    for wall in maze.walls() {
        let ((x1, y1), (x2, y2)) = geometry.wall_segment(*wall);
        group = group.add(Line::new().set("x1", x1).set("y1", y1).set("x2", x2).set("y2", y2));
    }
    group
}

fn render_explored(geometry: &CellGeometry, explored: &[Cell]) -> Group {
    let mut group = Group::new().set("id", "explored").set("fill-opacity", 0.5);
    for cell in explored {
        let (cx, cy) = geometry.cell_center(*cell);
        group = group.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", CELL_SIZE * 0.25)
                .set("fill", colors::EXPLORED),
        );
    }
    group
}

fn render_path(geometry: &CellGeometry, path: &[Cell]) -> Polyline {
    let points = path
        .iter()
        .map(|cell| {
            let (x, y) = geometry.cell_center(*cell);
            format!("{x},{y}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    Polyline::new()
        .set("id", "path")
        .set("points", points)
        .set("fill", "none")
        .set("stroke", colors::PATH)
        .set("stroke-width", 3)
        .set("stroke-linejoin", "round")
}

fn render_endpoint(geometry: &CellGeometry, cell: Cell, color: &str) -> Circle {
    let (cx, cy) = geometry.cell_center(cell);
    Circle::new().set("cx", cx).set("cy", cy).set("r", CELL_SIZE * 0.3).set("fill", color)
}
