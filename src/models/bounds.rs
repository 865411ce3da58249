use super::common::Point;
use serde::{Deserialize, Serialize};

/// Running min/max of every sampled point of a document, in source coordinates.
///
/// Starts empty and is only ever widened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    /// Bounds that contain nothing yet.
    pub const fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Widens the bounds so that they contain `point`.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// `true` until the first point has been included.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    /// `true` when every included point coincides (or nothing was included).
    pub fn has_zero_extent(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_widens_monotonically() {
        let mut bounds = Bounds::empty();
        assert!(bounds.is_empty());
        bounds.include(Point::new(3.0, -1.0));
        bounds.include(Point::new(-2.0, 4.0));
        bounds.include(Point::new(0.0, 0.0));
        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_x, 3.0);
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_y, 4.0);
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 5.0);
    }

    #[test]
    fn test_single_point_has_zero_extent() {
        let mut bounds = Bounds::default();
        assert!(bounds.has_zero_extent());
        bounds.include(Point::new(7.0, 7.0));
        assert!(!bounds.is_empty());
        assert!(bounds.has_zero_extent());
    }
}
