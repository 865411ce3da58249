use thiserror::Error;

/// Errors that can occur while reading a capture document back into path data.
#[derive(Error, Debug)]
pub enum ReconstructionError {
    #[error("Failed to parse capture document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Capture document has no <{0}> element")]
    MissingElement(&'static str),
    #[error("<{element}> is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    /// A coordinate attribute is not a finite decimal number.
    #[error("Invalid coordinate '{value}' in <{element}>")]
    InvalidCoordinate { element: &'static str, value: String },
    #[error("Formatting error during SVG generation: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// A specialized Result type for reconstruction operations.
pub type Result<T> = std::result::Result<T, ReconstructionError>;
