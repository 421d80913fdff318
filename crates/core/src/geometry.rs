//! Cell-to-pixel mapping shared by the window renderer and click handling.

use crate::maze::Wall;
use crate::types::Cell;

/// A line between two pixel points.
pub type Segment = ((f32, f32), (f32, f32));

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    /// Shrinks the rect by `inset` on every side, never below zero size.
    pub fn inset(self, inset: f32) -> PixelRect {
        PixelRect {
            x: self.x + inset,
            y: self.y + inset,
            width: (self.width - 2.0 * inset).max(0.0),
            height: (self.height - 2.0 * inset).max(0.0),
        }
    }

    pub fn center(self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Grid placement on screen: `offset + margin` is the top-left corner of cell (0, 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellGeometry {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
    pub margin: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl CellGeometry {
    pub fn new(width: usize, height: usize, cell_size: f32, margin: f32) -> Self {
        Self { width, height, cell_size, margin, offset_x: 0.0, offset_y: 0.0 }
    }

    pub fn with_offset(self, offset_x: f32, offset_y: f32) -> Self {
        Self { offset_x, offset_y, ..self }
    }

    pub fn grid_origin(&self) -> (f32, f32) {
        (self.offset_x + self.margin, self.offset_y + self.margin)
    }

    /// Pixel size of the drawn grid, margins excluded.
    pub fn grid_pixel_size(&self) -> (f32, f32) {
        (self.width as f32 * self.cell_size, self.height as f32 * self.cell_size)
    }

    /// Pixel size of the grid plus a margin on each side.
    pub fn framed_size(&self) -> (f32, f32) {
        let (grid_w, grid_h) = self.grid_pixel_size();
        (grid_w + 2.0 * self.margin, grid_h + 2.0 * self.margin)
    }

    pub fn cell_origin(&self, cell: Cell) -> (f32, f32) {
        let (origin_x, origin_y) = self.grid_origin();
        (origin_x + cell.x as f32 * self.cell_size, origin_y + cell.y as f32 * self.cell_size)
    }

    pub fn cell_rect(&self, cell: Cell) -> PixelRect {
        let (x, y) = self.cell_origin(cell);
        PixelRect { x, y, width: self.cell_size, height: self.cell_size }
    }

    pub fn cell_center(&self, cell: Cell) -> (f32, f32) {
        self.cell_rect(cell).center()
    }

    /// The edge shared by the two cells of `wall`, as pixel endpoints.
    pub fn wall_segment(&self, wall: Wall) -> Segment {
        let (a, b) = wall.cells();
        let rect = self.cell_rect(a);
        if a.y == b.y {
            let x = rect.x + rect.width;
            ((x, rect.y), (x, rect.y + rect.height))
        } else {
            let y = rect.y + rect.height;
            ((rect.x, y), (rect.x + rect.width, y))
        }
    }

    /// `None` for any pixel outside the rendered grid, margins included.
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> Option<Cell> {
        if !px.is_finite() || !py.is_finite() || self.cell_size <= 0.0 {
            return None;
        }
        let (origin_x, origin_y) = self.grid_origin();
        let (grid_w, grid_h) = self.grid_pixel_size();
        let local_x = px - origin_x;
        let local_y = py - origin_y;
        if local_x < 0.0 || local_y < 0.0 || local_x >= grid_w || local_y >= grid_h {
            return None;
        }

        let x = (local_x / self.cell_size).floor() as usize;
        let y = (local_y / self.cell_size).floor() as usize;
        (x < self.width && y < self.height).then_some(Cell { x: x as i32, y: y as i32 })
    }
}
