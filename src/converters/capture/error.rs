use crate::svg_meta::SvgMetaError;
use thiserror::Error;

/// Errors that can occur while converting SVG line art into a capture document.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The path data contains an invalid command or numeric token.
    #[error("Invalid path data '{data}': {source}")]
    PathSyntax {
        data: String,
        #[source]
        source: svgtypes::Error,
    },
    #[error("Path data contains no drawable commands")]
    EmptyPathData,
    /// The sampled points span no usable area, so no scale factor exists.
    #[error("Document has no drawable extent (bounds x: {min_x}..{max_x}, y: {min_y}..{max_y})")]
    DegenerateBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
    #[error("Invalid conversion options: {0}")]
    InvalidOptions(String),
    #[error("SVG normalization failed: {0}")]
    SvgMeta(#[from] SvgMetaError),
    #[error("Formatting error during output generation: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// A specialized Result type for capture conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
