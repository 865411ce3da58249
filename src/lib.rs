pub mod batch;
pub mod converters;
pub mod errors;
pub mod models;
pub mod svg_meta;
pub mod wasm;

pub use converters::capture::{convert_svg_to_capture, ConversionOptions};
pub use converters::reconstruct::{parse_capture_document, reconstruct_stroke_svgs};
pub use errors::{CaptureError, Result};
pub use models::capture::StrokeDocument;

// features
#[cfg(feature = "diff")]
pub mod diff;
#[cfg(feature = "diff")]
pub use diff::compare_capture_documents;
