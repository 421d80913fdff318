//! ASCII rendering of a maze with its start, end, path, and explored cells.

use std::collections::BTreeSet;

use maze_core::{Cell, Maze};

const EXPLORED_GLYPH: &str = " \u{b7} ";

pub struct TextScene<'a> {
    pub maze: &'a Maze,
    pub start: Cell,
    pub end: Cell,
    pub path: Option<&'a [Cell]>,
    pub explored: Option<&'a [Cell]>,
}

pub fn render_text(scene: &TextScene<'_>) -> String {
    let maze = scene.maze;
    let on_path: BTreeSet<Cell> = scene.path.unwrap_or_default().iter().copied().collect();
    let explored: BTreeSet<Cell> = scene.explored.unwrap_or_default().iter().copied().collect();

    let mut out = String::new();
    out.push('+');
    out.push_str(&"---+".repeat(maze.width()));
    out.push('\n');

    for y in 0..maze.height() as i32 {
        let mut row = String::from("|");
        let mut bottom = String::from("+");
        for x in 0..maze.width() as i32 {
            let cell = Cell { x, y };
            row.push_str(cell_glyph(cell, scene, &on_path, &explored));

            let right = Cell { x: x + 1, y };
            row.push_str(if maze.is_open(cell, right) { " " } else { "|" });

            let below = Cell { x, y: y + 1 };
            bottom.push_str(if maze.is_open(cell, below) { "   +" } else { "---+" });
        }
        out.push_str(&row);
        out.push('\n');
        out.push_str(&bottom);
        out.push('\n');
    }
    out
}

fn cell_glyph(
    cell: Cell,
    scene: &TextScene<'_>,
    on_path: &BTreeSet<Cell>,
    explored: &BTreeSet<Cell>,
) -> &'static str {
    if cell == scene.start {
        " S "
    } else if cell == scene.end {
        " E "
    } else if on_path.contains(&cell) {
        " * "
    } else if explored.contains(&cell) {
        EXPLORED_GLYPH
    } else {
        "   "
    }
}
