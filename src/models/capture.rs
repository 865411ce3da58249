//! The stroke-capture document model: a whiteboard session with page bounds and an
//! ordered set of strokes, each an ordered list of device-space points.

use super::common::Point;
use serde::{Deserialize, Serialize};

/// Target canvas size in device units.
///
/// The height is always derived from the observed source bounds so the aspect ratio
/// is preserved; see [`crate::converters::capture::mapper::CoordinateMapper`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
}

/// Page-bounds metadata of a capture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhiteboardDescription {
    /// Corner the sensor is mounted at, e.g. `top_left`.
    pub sensor_location: String,
    /// The corner opposite the origin: `(canvas_width, canvas_height)`.
    pub diagonally_opposite: Point,
    /// `(scaled min_x, canvas_height)`.
    pub vertically_opposite: Point,
    /// `(canvas_width, scaled min_y)`.
    pub horizontally_opposite: Point,
}

impl WhiteboardDescription {
    /// The canvas spanned by the diagonally opposite corner.
    pub fn canvas(&self) -> CanvasSpec {
        CanvasSpec {
            width: self.diagonally_opposite.x,
            height: self.diagonally_opposite.y,
        }
    }
}

/// A single pen stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub colour: String,
    /// Device-space points in drawing order.
    pub points: Vec<Point>,
}

/// A complete capture session. Built once per input document and not modified after
/// emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeDocument {
    pub description: WhiteboardDescription,
    pub strokes: Vec<Stroke>,
}

impl StrokeDocument {
    pub fn canvas(&self) -> CanvasSpec {
        self.description.canvas()
    }

    /// Total number of points over all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|stroke| stroke.points.len()).sum()
    }
}
