//! High-level library API: slice a composite card sheet into named PNG files and
//! report what was written. Prefer these entrypoints over the low-level `core` and
//! `io` modules when embedding the extractor.
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::grid::GridGeometry;
use crate::core::params::ExtractParams;
use crate::core::slicing::crop_cell;
use crate::error::{Error, Result};
use crate::io::{open_image, write_png};
use crate::types::{CardName, GRID_COLS, GRID_ROWS, SPECIAL_CARD_FILE};

/// Outcome of a successful extraction run
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub output_dir: PathBuf,
    pub geometry: GridGeometry,
    /// File names in write order: the grid cards row-major, then the special card
    pub created: Vec<String>,
}

impl ExtractReport {
    /// Expected number of cards per run: every grid cell plus the special card.
    pub const fn expected_total() -> u32 {
        GRID_ROWS * GRID_COLS + 1
    }

    pub fn total(&self) -> usize {
        self.created.len()
    }

    /// Blank line, success line, then `Total cards: N`.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "All cards extracted successfully!")?;
        writeln!(out, "Total cards: {}", Self::expected_total())?;
        out.flush()
    }
}

fn progress<W: Write>(out: &mut W, file_name: &str) -> std::io::Result<()> {
    writeln!(out, "Created: {}", file_name)
}

/// Slice `params.sheet` into 56 grid cards and copy `params.special` alongside them.
///
/// The output directory is created first if missing. Each written file is announced
/// on `out` as `Created: {file}`. Any decode, write or directory failure aborts the
/// run immediately; files already written are left in place.
pub fn extract_cards<W: Write>(params: &ExtractParams, out: &mut W) -> Result<ExtractReport> {
    let output_dir = &params.output_dir;
    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;
    info!("Output directory: {:?}", output_dir);

    let sheet = open_image(&params.sheet)?;
    let geometry = GridGeometry::from_dimensions(sheet.width(), sheet.height());
    info!(
        "Sheet {:?}: {}x{}, grid {}x{}, cell {}x{}",
        params.sheet,
        geometry.sheet_width,
        geometry.sheet_height,
        GRID_COLS,
        GRID_ROWS,
        geometry.cell_width,
        geometry.cell_height
    );

    if geometry.is_empty() {
        return Err(Error::GridTooSmall {
            width: geometry.sheet_width,
            height: geometry.sheet_height,
            rows: GRID_ROWS,
            cols: GRID_COLS,
        });
    }
    if !geometry.is_exact() {
        let (right, bottom) = geometry.remainder();
        warn!(
            "Sheet size is not a multiple of the grid; ignoring {} px on the right and {} px at the bottom",
            right, bottom
        );
    }

    let mut created = Vec::with_capacity(ExtractReport::expected_total() as usize);

    for (name, (row, col, rect)) in CardName::all().zip(geometry.cells()) {
        let file_name = name.file_name();
        debug!(
            "Cropping {} [{}, {}] from ({}, {}) to ({}, {})",
            name,
            row,
            col,
            rect.x,
            rect.y,
            rect.right(),
            rect.bottom()
        );

        let card = crop_cell(&sheet, rect);
        write_png(&card, &output_dir.join(&file_name))?;
        progress(out, &file_name).map_err(Error::Report)?;
        created.push(file_name);
    }
    drop(sheet);

    let special = open_image(&params.special)?;
    write_png(&special, &output_dir.join(SPECIAL_CARD_FILE))?;
    info!("Copied {:?} -> {}", params.special, SPECIAL_CARD_FILE);
    progress(out, SPECIAL_CARD_FILE).map_err(Error::Report)?;
    created.push(SPECIAL_CARD_FILE.to_string());

    Ok(ExtractReport {
        output_dir: output_dir.clone(),
        geometry,
        created,
    })
}
