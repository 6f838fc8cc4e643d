//! Grid geometry calculation
//!
//! This module derives how many fixed-size card cells fit on a page and
//! the offsets that center the resulting grid.

use crate::types::{Result, StackError};

use super::{Frame, GridLayout, GridPosition};

// =============================================================================
// Grid Creation
// =============================================================================

/// Compute the grid layout for the given page and cell geometry.
///
/// All arguments are in points. Each cell occupies its own width/height plus
/// a margin on every side, so a column consumes `cell_width + 2·margin`
/// horizontally. The leftover space on each axis is split evenly to center
/// the grid.
///
/// Fails with [`StackError::Geometry`] when not even a single cell fits;
/// nothing may be drawn after that.
pub fn compute_grid(
    page_width_pt: f32,
    page_height_pt: f32,
    cell_width_pt: f32,
    cell_height_pt: f32,
    margin_pt: f32,
) -> Result<GridLayout> {
    let slot_width = cell_width_pt + 2.0 * margin_pt;
    let slot_height = cell_height_pt + 2.0 * margin_pt;

    let columns = (page_width_pt / slot_width).floor() as usize;
    let rows = (page_height_pt / slot_height).floor() as usize;

    if columns == 0 {
        return Err(StackError::Geometry(format!(
            "Page too small for card size: width {:.1}pt cannot fit one {:.1}pt cell with {:.1}pt margin",
            page_width_pt, cell_width_pt, margin_pt
        )));
    }
    if rows == 0 {
        return Err(StackError::Geometry(format!(
            "Page too small for card size: height {:.1}pt cannot fit one {:.1}pt cell with {:.1}pt margin",
            page_height_pt, cell_height_pt, margin_pt
        )));
    }

    let offset_x_pt = (page_width_pt - columns as f32 * slot_width) / 2.0;
    let offset_y_pt = (page_height_pt - rows as f32 * slot_height) / 2.0;

    Ok(GridLayout {
        columns,
        rows,
        cell_width_pt,
        cell_height_pt,
        margin_pt,
        offset_x_pt,
        offset_y_pt,
    })
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the frame of the card cell at the given grid position.
///
/// Row 0 is the top row; the returned frame uses PDF coordinates (origin at
/// the bottom-left of the page), hence the y inversion.
pub fn cell_frame(grid: &GridLayout, pos: GridPosition, page_height_pt: f32) -> Frame {
    let x = grid.offset_x_pt + pos.col as f32 * grid.slot_width_pt() + grid.margin_pt;
    let y = page_height_pt
        - grid.offset_y_pt
        - (pos.row + 1) as f32 * grid.slot_height_pt()
        + grid.margin_pt;

    Frame::new(x, y, grid.cell_width_pt, grid.cell_height_pt)
}

// =============================================================================
// Tests
// =============================================================================
