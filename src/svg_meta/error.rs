use thiserror::Error;

/// Errors raised by the SVG metadata helpers (lengths, page size, shape rewriting).
#[derive(Error, Debug)]
pub enum SvgMetaError {
    /// The string is not a non-negative number followed by an optional unit.
    #[error("{0:?} is not a positive, absolute unit of size")]
    MalformedLength(String),
    /// The number is fine but the unit is relative or unknown (`em`, `%`, `vw`, `MM`...).
    #[error("Unsupported unit '{unit}' in {dimension:?}; only absolute units are allowed")]
    UnsupportedUnit { dimension: String, unit: String },
    #[error("'width' and 'height' must be specified for <svg> tag.")]
    MissingDimensions,
    #[error("Root element is <{0}>, expected <svg>")]
    NotSvgRoot(String),
    #[error("Cannot read Inkscape version {0:?}")]
    InvalidInkscapeVersion(String),
    #[error("<{element}> is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    #[error("Invalid point list {0:?}")]
    InvalidPoints(String),
    #[error("Failed to parse SVG document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// A specialized Result type for SVG metadata operations.
pub type Result<T> = std::result::Result<T, SvgMetaError>;
