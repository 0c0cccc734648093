use image::DynamicImage;

use crate::core::grid::CellRect;

/// Copy `rect` out of `sheet` into a standalone image with the same pixel format.
pub fn crop_cell(sheet: &DynamicImage, rect: CellRect) -> DynamicImage {
    sheet.crop_imm(rect.x, rect.y, rect.width, rect.height)
}
