//! First pass of a conversion: fold every sampled point of every path into [`Bounds`].

use super::sampler::sample;
use crate::models::{Bounds, Path};
use log::debug;

/// Accumulates the bounds of a document's paths.
///
/// Every segment of every path is sampled, the initial moveto included, at the same
/// density the emission pass uses.
#[derive(Debug, Clone)]
pub struct BoundingBoxTracker {
    bounds: Bounds,
    samples_per_segment: usize,
}

impl BoundingBoxTracker {
    pub fn new(samples_per_segment: usize) -> Self {
        Self {
            bounds: Bounds::empty(),
            samples_per_segment,
        }
    }

    pub fn track_path(&mut self, path: &Path) {
        for segment in path.segments() {
            for point in sample(segment, self.samples_per_segment) {
                self.bounds.include(point);
            }
        }
    }

    pub fn finish(self) -> Bounds {
        debug!("[BoundingBoxTracker] Final bounds: {:?}", self.bounds);
        self.bounds
    }
}

/// Tracks the bounds of all `paths` in one go.
pub fn track_bounds(paths: &[Path], samples_per_segment: usize) -> Bounds {
    let mut tracker = BoundingBoxTracker::new(samples_per_segment);
    for path in paths {
        tracker.track_path(path);
    }
    tracker.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::capture::parser::parse_path;

    #[test]
    fn test_bounds_cover_curve_extremes() {
        // The quadratic bulges to y = 5 at t = 0.5, which a density of 3 samples hits.
        let path = parse_path("M0 0 Q 5 10 10 0").expect("valid path");
        let bounds = track_bounds(&[path], 3);
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 10.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 5.0);
    }

    #[test]
    fn test_bounds_span_all_paths() {
        let paths = vec![
            parse_path("M 2 3 L 4 8").expect("valid path"),
            parse_path("M -1 6 L 7 1").expect("valid path"),
        ];
        let bounds = track_bounds(&paths, 10);
        assert_eq!(
            bounds,
            Bounds {
                min_x: -1.0,
                max_x: 7.0,
                min_y: 1.0,
                max_y: 8.0
            }
        );
    }

    #[test]
    fn test_no_paths_leaves_bounds_empty() {
        assert!(track_bounds(&[], 10).is_empty());
    }
}
