use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Input sheet, standalone special card and output directory for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractParams {
    /// Composite 4x14 sprite sheet
    pub sheet: PathBuf,
    /// Standalone wild draw-four card, copied without cropping
    pub special: PathBuf,
    /// Created if absent; existing files are overwritten
    pub output_dir: PathBuf,
}

impl ExtractParams {
    pub const SHEET_FILE: &'static str = "UnoCards.png";
    pub const SPECIAL_FILE: &'static str = "Draw4.png";
    pub const OUTPUT_DIR: &'static str = "cards";

    /// The fixed file names resolved under `base` instead of the working directory.
    pub fn in_dir(base: &Path) -> Self {
        Self {
            sheet: base.join(Self::SHEET_FILE),
            special: base.join(Self::SPECIAL_FILE),
            output_dir: base.join(Self::OUTPUT_DIR),
        }
    }
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            sheet: PathBuf::from(Self::SHEET_FILE),
            special: PathBuf::from(Self::SPECIAL_FILE),
            output_dir: PathBuf::from(Self::OUTPUT_DIR),
        }
    }
}
