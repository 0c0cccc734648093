use serde::Serialize;

use crate::types::{GRID_COLS, GRID_ROWS};

/// Pixel rectangle of one grid cell; `x + width` and `y + height` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Uniform cell size of the card grid, derived once from the sheet dimensions.
///
/// Cell sizes use floor division. When the sheet is not an exact multiple of the
/// grid, the leftover pixels along the right and bottom edges belong to no cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct GridGeometry {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridGeometry {
    pub fn from_dimensions(sheet_width: u32, sheet_height: u32) -> Self {
        Self {
            sheet_width,
            sheet_height,
            cell_width: sheet_width / GRID_COLS,
            cell_height: sheet_height / GRID_ROWS,
        }
    }

    pub fn cell_rect(&self, row: u32, col: u32) -> CellRect {
        CellRect {
            x: col * self.cell_width,
            y: row * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Pixels along (right, bottom) not covered by any cell.
    pub fn remainder(&self) -> (u32, u32) {
        (
            self.sheet_width % GRID_COLS,
            self.sheet_height % GRID_ROWS,
        )
    }

    pub fn is_exact(&self) -> bool {
        self.remainder() == (0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.cell_width == 0 || self.cell_height == 0
    }

    /// Cell rectangles in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, CellRect)> + '_ {
        (0..GRID_ROWS)
            .flat_map(|row| (0..GRID_COLS).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cell_rect(row, col)))
    }
}
