use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode the image at `path`, detecting the format from its contents.
///
/// Allocation limits are lifted: a full-resolution card sheet can exceed the
/// decoder's default memory cap.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?;
    reader.no_limits();
    let format = reader.format();
    let img = reader.decode().map_err(decode_err)?;

    debug!(
        "Decoded {:?} ({:?}): {}x{} {:?}",
        path,
        format,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}
