//! Evaluates path segments at a parameter `t` and samples them at evenly spaced
//! parameters.
//!
//! All formulas use the Bernstein form, so `t = 0` and `t = 1` reproduce the declared
//! endpoints exactly. Sampling is deterministic: the same segment and count always
//! produce bit-identical points.

use crate::models::{ArcSegment, PathSegment, Point};

/// Returns the point on `segment` at parameter `t`.
///
/// `t` is expected in `[0, 1]`; values outside extrapolate along the same formula.
pub fn evaluate(segment: &PathSegment, t: f64) -> Point {
    match segment {
        PathSegment::Move { to } => *to,
        PathSegment::Line { start, end } => *start * (1.0 - t) + *end * t,
        PathSegment::QuadraticBezier {
            start,
            control,
            end,
        } => {
            let mt = 1.0 - t;
            let a = mt * mt;
            let b = 2.0 * mt * t;
            let c = t * t;
            *start * a + *control * b + *end * c
        }
        PathSegment::CubicBezier {
            start,
            control1,
            control2,
            end,
        } => {
            let mt = 1.0 - t;
            let a = mt * mt * mt;
            let b = 3.0 * mt * mt * t;
            let c = 3.0 * mt * t * t;
            let d = t * t * t;
            *start * a + *control1 * b + *control2 * c + *end * d
        }
        PathSegment::EllipticalArc(arc) => evaluate_arc(arc, t),
    }
}

fn evaluate_arc(arc: &ArcSegment, t: f64) -> Point {
    // The trigonometric form only approximates the endpoints.
    if t == 0.0 {
        return arc.start;
    }
    if t == 1.0 {
        return arc.end;
    }
    let angle = arc.theta + arc.delta * t;
    let (sin_a, cos_a) = angle.sin_cos();
    let (sin_r, cos_r) = arc.rotation.sin_cos();
    let x = arc.radius.x * cos_a;
    let y = arc.radius.y * sin_a;
    Point::new(
        arc.center.x + cos_r * x - sin_r * y,
        arc.center.y + sin_r * x + cos_r * y,
    )
}

/// `n` parameter values evenly spaced over `[0, 1]`, both ends included.
///
/// `n = 1` yields only `0.0` and `n = 0` yields nothing.
pub fn linspace(n: usize) -> impl Iterator<Item = f64> {
    let last = n.saturating_sub(1);
    (0..n).map(move |i| {
        if i == last && last > 0 {
            1.0
        } else if last == 0 {
            0.0
        } else {
            i as f64 / last as f64
        }
    })
}

/// Samples `segment` at `linspace(0, 1, n)`.
///
/// Callers must guard against `n < 2`, which never reaches the segment end.
pub fn sample(segment: &PathSegment, n: usize) -> Vec<Point> {
    linspace(n).map(|t| evaluate(segment, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::capture::parser::parse_path;

    fn all_kinds() -> Vec<PathSegment> {
        let path = parse_path("M0 0 L 10 5 Q 20 20 30 5 C 35 0 40 10 50 5 A 10 6 30 1 0 60 20")
            .expect("valid path");
        path.segments().to_vec()
    }

    #[test]
    fn test_endpoints_are_exact() {
        for segment in all_kinds() {
            assert_eq!(evaluate(&segment, 0.0), segment.start(), "{:?}", segment);
            assert_eq!(evaluate(&segment, 1.0), segment.end(), "{:?}", segment);
        }
    }

    #[test]
    fn test_arc_interior_is_continuous_with_endpoints() {
        let segments = all_kinds();
        let arc = segments.last().expect("arc segment");
        let near_start = evaluate(arc, 1e-9);
        let near_end = evaluate(arc, 1.0 - 1e-9);
        assert!((near_start.x - arc.start().x).abs() < 1e-6);
        assert!((near_start.y - arc.start().y).abs() < 1e-6);
        assert!((near_end.x - arc.end().x).abs() < 1e-6);
        assert!((near_end.y - arc.end().y).abs() < 1e-6);
    }

    #[test]
    fn test_line_midpoint() {
        let line = PathSegment::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 20.0),
        };
        assert_eq!(evaluate(&line, 0.5), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_linspace_values() {
        let values: Vec<f64> = linspace(5).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(1).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(linspace(0).count(), 0);
        assert_eq!(linspace(2).collect::<Vec<_>>(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_sample_count_and_order() {
        let line = PathSegment::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(9.0, 0.0),
        };
        for n in 1..12 {
            let points = sample(&line, n);
            assert_eq!(points.len(), n);
            assert!(points.windows(2).all(|w| w[0].x < w[1].x));
        }
        assert_eq!(sample(&line, 1), vec![Point::new(0.0, 0.0)]);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        for segment in all_kinds() {
            let first = sample(&segment, 17);
            let second = sample(&segment, 17);
            let first_bits: Vec<_> = first.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
            let second_bits: Vec<_> = second.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
            assert_eq!(first_bits, second_bits);
        }
    }

    #[test]
    fn test_move_is_constant() {
        let segment = PathSegment::Move {
            to: Point::new(3.0, 4.0),
        };
        assert!(sample(&segment, 4).iter().all(|p| *p == Point::new(3.0, 4.0)));
    }
}
