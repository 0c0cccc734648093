//! Crate-level error type and `Result` alias.
//! Wraps the underlying I/O and image codec failures with the path that caused them,
//! and adds one semantic variant for sheets too small to hold the card grid.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to report progress: {0}")]
    Report(#[source] std::io::Error),

    #[error("Sheet of {width}x{height} px is too small for a {cols}x{rows} card grid")]
    GridTooSmall {
        width: u32,
        height: u32,
        rows: u32,
        cols: u32,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
