#![doc = r#"
card-extractor — slice a playing-card sprite sheet into individual PNG files.

The composite sheet is a fixed 4 x 14 grid: rows are colors (`red`, `yellow`, `green`,
`blue`), columns are values (`0`..`9`, `skip`, `reverse`, `draw2`, `wild`). Every cell is
written as `{color}_{value}.png`, and a separate wild draw-four image is copied next to
them as `wild_draw4.png`, 57 files in total.

Quick start
-----------
```rust,no_run
use std::path::Path;
use card_extractor::{extract_cards, ExtractParams};

fn main() -> card_extractor::Result<()> {
    let params = ExtractParams::in_dir(Path::new("/assets/deck"));
    let mut stdout = std::io::stdout().lock();
    let report = extract_cards(&params, &mut stdout)?;
    report.write_summary(&mut stdout).map_err(card_extractor::Error::Report)?;
    Ok(())
}
```

Grid geometry
-------------
Cell size is the sheet size floor-divided by the grid. Sheets that are not exact multiples
of 14 x 4 still extract; the leftover right and bottom pixels are dropped and a
`tracing` warning is emitted.

```rust
use card_extractor::GridGeometry;

let grid = GridGeometry::from_dimensions(1413, 803);
assert_eq!((grid.cell_width, grid.cell_height), (100, 200));
assert_eq!(grid.remainder(), (13, 3));
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — card naming tables (`CardColor`, `CardValue`, `CardName`).
- [`core`] — grid geometry, run parameters and cropping.
- [`io`] — image decoding and PNG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use core::grid::{CellRect, GridGeometry};
pub use core::params::ExtractParams;
pub use error::{Error, Result};
pub use types::{CardColor, CardName, CardValue, GRID_COLS, GRID_ROWS, SPECIAL_CARD_FILE};

// High-level API
pub use api::{ExtractReport, extract_cards};
