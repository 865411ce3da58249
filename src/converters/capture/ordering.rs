//! Left-to-right stroke ordering.
//!
//! Static SVG carries no timing information, so true stroke order cannot be
//! recovered. Strokes are ordered by the x-coordinate of their start point as an
//! approximation of handwriting order.

use crate::models::Path;
use std::cmp::Ordering;

/// Sorts `paths` ascending by the x-coordinate of their start point.
///
/// The sort is stable: paths starting at the same x keep their input order, with
/// `-0` and `0` counted as the same x.
pub fn order_strokes(paths: &mut [Path]) {
    paths.sort_by(|a, b| {
        a.start_point()
            .x
            .partial_cmp(&b.start_point().x)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::capture::parser::parse_path;

    fn sources(paths: &[Path]) -> Vec<&str> {
        paths.iter().map(Path::source).collect()
    }

    #[test]
    fn test_orders_by_start_x() {
        let mut paths = vec![
            parse_path("M 30 0 L 40 10").expect("valid path"),
            parse_path("M 10 50 L 0 0").expect("valid path"),
            parse_path("M 20 5 L 25 5").expect("valid path"),
        ];
        order_strokes(&mut paths);
        assert_eq!(
            sources(&paths),
            vec!["M 10 50 L 0 0", "M 20 5 L 25 5", "M 30 0 L 40 10"]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut paths = vec![
            parse_path("M 5 9 L 6 6").expect("valid path"),
            parse_path("M 1 1 L 2 2").expect("valid path"),
            parse_path("M 5 1 L 9 9").expect("valid path"),
            parse_path("M 5 4 L 0 0").expect("valid path"),
        ];
        order_strokes(&mut paths);
        assert_eq!(
            sources(&paths),
            vec!["M 1 1 L 2 2", "M 5 9 L 6 6", "M 5 1 L 9 9", "M 5 4 L 0 0"]
        );
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let mut paths = vec![
            parse_path("M 0 5 L 1 1").expect("valid path"),
            parse_path("M -0 7 L 2 2").expect("valid path"),
            parse_path("M -1 0 L 3 3").expect("valid path"),
        ];
        order_strokes(&mut paths);
        assert_eq!(
            sources(&paths),
            vec!["M -1 0 L 3 3", "M 0 5 L 1 1", "M -0 7 L 2 2"]
        );
    }
}
