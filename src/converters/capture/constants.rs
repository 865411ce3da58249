//! Defaults and fixed vocabulary of the capture format.

/// Default canvas width in device units. The height is derived from the source bounds.
pub const DEFAULT_CANVAS_WIDTH: f64 = 400.0;
/// Default number of samples per segment, shared by the bounds and emission passes.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 10;
/// Smallest density that still reaches both ends of a segment.
pub const MIN_SAMPLES_PER_SEGMENT: usize = 2;
pub const DEFAULT_STROKE_COLOUR: &str = "black";
pub const SENSOR_CORNER: &str = "top_left";

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
/// Declaration written at the top of capture documents.
pub const CAPTURE_XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";
