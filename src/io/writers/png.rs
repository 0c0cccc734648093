use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Encode `img` as PNG at `output`, replacing any existing file.
pub fn write_png(img: &DynamicImage, output: &Path) -> Result<()> {
    img.save_with_format(output, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })
}
