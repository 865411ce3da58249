//! Second pass of a conversion: maps source coordinates onto the device canvas.

use super::{
    constants::SENSOR_CORNER,
    error::{ConversionError, Result},
};
use crate::models::{Bounds, CanvasSpec, Point, WhiteboardDescription};

/// Affine source → device mapping for one document.
///
/// The scale is anchored at the source origin: `scale_x = width / max_x` and the canvas
/// height is derived as `width * max_y / max_x`, preserving the aspect ratio. The Y axis
/// is flipped so that `y = 0` in the source ends up at the canvas height.
///
/// One mapper is built per document and applied to every point of every stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    bounds: Bounds,
    canvas: CanvasSpec,
    scale_x: f64,
    scale_y: f64,
}

impl CoordinateMapper {
    /// Builds the mapper from tracked bounds and the target canvas width.
    ///
    /// # Errors
    /// [`ConversionError::DegenerateBounds`] when the bounds are empty, all points
    /// coincide, or `max_x`/`max_y` is not strictly positive (no scale factor exists).
    /// [`ConversionError::InvalidOptions`] when `canvas_width` is not a positive number.
    pub fn new(bounds: &Bounds, canvas_width: f64) -> Result<Self> {
        if !canvas_width.is_finite() || canvas_width <= 0.0 {
            return Err(ConversionError::InvalidOptions(format!(
                "canvas width must be a positive number, got {}",
                canvas_width
            )));
        }
        let degenerate = || ConversionError::DegenerateBounds {
            min_x: bounds.min_x,
            max_x: bounds.max_x,
            min_y: bounds.min_y,
            max_y: bounds.max_y,
        };
        if bounds.is_empty() || bounds.has_zero_extent() {
            return Err(degenerate());
        }
        if !(bounds.max_x > 0.0 && bounds.max_y > 0.0) {
            return Err(degenerate());
        }

        let canvas_height = canvas_width * bounds.max_y / bounds.max_x;
        let scale_x = canvas_width / bounds.max_x;
        let scale_y = canvas_height / bounds.max_y;
        if !(canvas_height.is_finite() && scale_x.is_finite() && scale_y.is_finite()) {
            return Err(degenerate());
        }

        Ok(Self {
            bounds: *bounds,
            canvas: CanvasSpec {
                width: canvas_width,
                height: canvas_height,
            },
            scale_x,
            scale_y,
        })
    }

    pub fn canvas(&self) -> CanvasSpec {
        self.canvas
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Maps a source point into device space.
    pub fn map(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale_x,
            self.canvas.height - point.y * self.scale_y,
        )
    }

    /// Page-bounds metadata for the capture document.
    ///
    /// The opposite corners use the scaled minima without the vertical flip.
    pub fn description(&self) -> WhiteboardDescription {
        let CanvasSpec { width, height } = self.canvas;
        WhiteboardDescription {
            sensor_location: SENSOR_CORNER.to_string(),
            diagonally_opposite: Point::new(width, height),
            vertically_opposite: Point::new(self.bounds.min_x * width / self.bounds.max_x, height),
            horizontally_opposite: Point::new(
                width,
                self.bounds.min_y * height / self.bounds.max_y,
            ),
        }
    }
}
