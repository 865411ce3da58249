//! Configuration of one conversion run.

use super::{
    constants::*,
    error::{ConversionError, Result},
};
use serde::{Deserialize, Serialize};

/// Options controlling how a document is flattened and mapped.
///
/// Every field has a default, so a JSON configuration file only needs to list the
/// values it overrides:
///
/// ```json
/// { "samplesPerSegment": 24 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Width of the device canvas. The height follows from the source aspect ratio.
    pub canvas_width: f64,
    /// Samples taken per segment (`linspace(0, 1, n)`). Used by the bounds pass and
    /// the emission pass alike so every emitted point lies inside the tracked bounds.
    pub samples_per_segment: usize,
    /// Rewrite `<line>`, `<polyline>` and `<polygon>` elements into paths before
    /// collecting path data.
    pub normalize_shapes: bool,
    /// Colour attribute written on every stroke.
    pub stroke_colour: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            normalize_shapes: true,
            stroke_colour: DEFAULT_STROKE_COLOUR.to_string(),
        }
    }
}

impl ConversionOptions {
    /// Parses options from a JSON string, filling unspecified fields with defaults.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples;
        self
    }

    pub fn with_canvas_width(mut self, width: f64) -> Self {
        self.canvas_width = width;
        self
    }

    /// Checks the options before any document is touched.
    pub fn validate(&self) -> Result<()> {
        if !self.canvas_width.is_finite() || self.canvas_width <= 0.0 {
            return Err(ConversionError::InvalidOptions(format!(
                "canvas width must be a positive number, got {}",
                self.canvas_width
            )));
        }
        if self.samples_per_segment < MIN_SAMPLES_PER_SEGMENT {
            return Err(ConversionError::InvalidOptions(format!(
                "at least {} samples per segment are required, got {}",
                MIN_SAMPLES_PER_SEGMENT, self.samples_per_segment
            )));
        }
        if self.stroke_colour.trim().is_empty() {
            return Err(ConversionError::InvalidOptions(
                "stroke colour must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = ConversionOptions::from_json_str(r#"{ "samplesPerSegment": 24 }"#)
            .expect("partial options should deserialize");
        assert_eq!(options.samples_per_segment, 24);
        assert_eq!(options.canvas_width, DEFAULT_CANVAS_WIDTH);
        assert!(options.normalize_shapes);
        assert_eq!(options.stroke_colour, "black");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_single_sample_is_rejected() {
        let options = ConversionOptions::default().with_samples_per_segment(1);
        assert!(matches!(
            options.validate(),
            Err(ConversionError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_non_positive_width_is_rejected() {
        for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let options = ConversionOptions::default().with_canvas_width(width);
            assert!(options.validate().is_err(), "width {} should fail", width);
        }
    }
}
