//! Layout model for the control column and the maze panel.

use maze_core::CellGeometry;
use taffy::TaffyTree;
use taffy::prelude::*;

use crate::{CONTROL_PANEL_WIDTH, MAZE_MARGIN};

pub struct LayoutNodes {
    root: NodeId,
    controls: NodeId,
    maze: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLayout {
    pub controls: PanelRect,
    pub maze: PanelRect,
}

impl ScreenLayout {
    /// Cell geometry for a grid drawn inside the maze panel.
    pub fn maze_geometry(&self, width: usize, height: usize, cell_size: f32) -> CellGeometry {
        CellGeometry::new(width, height, cell_size, MAZE_MARGIN)
            .with_offset(self.maze.x, self.maze.y)
    }
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> LayoutNodes {
    let controls = taffy
        .new_leaf(Style {
            size: Size { width: length(CONTROL_PANEL_WIDTH), height: percent(1.0) },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .expect("controls node");
    let maze = taffy
        .new_leaf(Style { flex_grow: 1.0, ..Default::default() })
        .expect("maze node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                size: Size { width: percent(1.0), height: percent(1.0) },
                ..Default::default()
            },
            &[controls, maze],
        )
        .expect("root node");
    LayoutNodes { root, controls, maze }
}

pub fn compute_screen_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> ScreenLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_controls = taffy.layout(nodes.controls).expect("controls layout");
    let l_maze = taffy.layout(nodes.maze).expect("maze layout");

    ScreenLayout {
        controls: panel_rect(l_controls, &[l_root]),
        maze: panel_rect(l_maze, &[l_root]),
    }
}

/// Shortest window that still fits the control column text and legend.
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Window size that fits the control column plus a framed grid.
pub fn window_size_for(width: usize, height: usize, cell_size: f32) -> (f32, f32) {
    let geometry = CellGeometry::new(width, height, cell_size, MAZE_MARGIN);
    let (framed_w, framed_h) = geometry.framed_size();
    (CONTROL_PANEL_WIDTH + framed_w, framed_h.max(MIN_WINDOW_HEIGHT))
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
