//! Grid cell boxes
//!
//! Slot boxes are expressed in normalized sheet coordinates: the sheet side
//! is the unit square with its origin at the bottom-left corner. Row 0 is the
//! top row.

use super::{Rect, SlotPosition};

/// Bounds of cell (`row`, `col`) in a `rows` × `cols` grid over the unit square
pub fn cell_box(rows: usize, cols: usize, row: usize, col: usize) -> Rect {
    let rows = rows.max(1);
    let cols = cols.max(1);
    let width = 1.0 / cols as f32;
    let height = 1.0 / rows as f32;

    Rect::new(
        col as f32 * width,
        (rows - row.min(rows - 1) - 1) as f32 * height,
        width,
        height,
    )
}

/// Bounds of a named position on a side laid out as a `rows` × `cols` grid
pub fn position_box(grid: (usize, usize), position: SlotPosition) -> Rect {
    let (row, col) = position.cell();
    cell_box(grid.0, grid.1, row, col)
}
