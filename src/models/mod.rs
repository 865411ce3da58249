//! Plain data types shared by the converters.

pub mod bounds;
pub mod capture;
pub mod common;
pub mod path;
pub mod segment;

pub use bounds::Bounds;
pub use capture::{CanvasSpec, Stroke, StrokeDocument, WhiteboardDescription};
pub use common::{PageSize, Point};
pub use path::Path;
pub use segment::{ArcSegment, PathSegment};
