use crate::converters::{capture::ConversionError, reconstruct::ReconstructionError};
use crate::svg_meta::SvgMetaError;
use std::path::PathBuf;
use thiserror::Error;

/// Represents every error the capture tools can report, from a single library call
/// up to one file of a batch run.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Converting an SVG document into a capture document failed.
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    /// Reading a capture document back into path data failed.
    #[error("Reconstruction failed: {0}")]
    Reconstruction(#[from] ReconstructionError),

    /// Length, page-size or shape normalization failure.
    #[error("SVG metadata error: {0}")]
    SvgMeta(#[from] SvgMetaError),

    /// An I/O error on a specific input or output file.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error while reading options or writing the JSON rendition.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error indicating invalid input was provided to a batch function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CaptureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CaptureError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A type alias for `Result<T, CaptureError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, CaptureError>;
