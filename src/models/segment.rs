use super::common::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One parametric primitive of a parsed path, in absolute source coordinates.
///
/// Segments are immutable once parsed. Evaluation over `t ∈ [0, 1]` lives in
/// [`crate::converters::capture::sampler`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PathSegment {
    /// A `moveto`: a point segment that evaluates to `to` for every `t`.
    Move { to: Point },
    /// A straight line, also produced by `H`, `V`, `Z` and zero-radius arcs.
    Line { start: Point, end: Point },
    QuadraticBezier {
        start: Point,
        control: Point,
        end: Point,
    },
    CubicBezier {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    EllipticalArc(ArcSegment),
}

impl PathSegment {
    /// The declared start point of the segment.
    pub fn start(&self) -> Point {
        match self {
            PathSegment::Move { to } => *to,
            PathSegment::Line { start, .. }
            | PathSegment::QuadraticBezier { start, .. }
            | PathSegment::CubicBezier { start, .. } => *start,
            PathSegment::EllipticalArc(arc) => arc.start,
        }
    }

    /// The declared end point of the segment.
    pub fn end(&self) -> Point {
        match self {
            PathSegment::Move { to } => *to,
            PathSegment::Line { end, .. }
            | PathSegment::QuadraticBezier { end, .. }
            | PathSegment::CubicBezier { end, .. } => *end,
            PathSegment::EllipticalArc(arc) => arc.end,
        }
    }

    /// Short, human readable name of the segment kind (used in log output).
    pub fn kind_name(&self) -> &'static str {
        match self {
            PathSegment::Move { .. } => "move",
            PathSegment::Line { .. } => "line",
            PathSegment::QuadraticBezier { .. } => "quadratic",
            PathSegment::CubicBezier { .. } => "cubic",
            PathSegment::EllipticalArc(_) => "arc",
        }
    }
}

/// An elliptical arc in both endpoint and center parameterization.
///
/// The endpoint form is what the path data declares; the center form
/// (`center`, `radius`, `theta`, `delta`) is derived once on construction following
/// the SVG implementation notes (appendix F.6.5) and is what evaluation uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcSegment {
    pub start: Point,
    pub end: Point,
    /// Effective radii (`x` = rx, `y` = ry), already scaled up when the declared radii
    /// were too small to span the endpoints.
    pub radius: Point,
    /// X-axis rotation in radians.
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub center: Point,
    /// Start angle in radians.
    pub theta: f64,
    /// Signed angular extent in radians.
    pub delta: f64,
}

impl ArcSegment {
    /// Builds an arc from its endpoint parameterization.
    ///
    /// Returns `None` when the arc is degenerate: zero radius or coincident endpoints.
    /// Callers decide how to replace it (a line or nothing at all).
    pub fn new(
        start: Point,
        radius: Point,
        rotation_degrees: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    ) -> Option<Self> {
        if start == end {
            return None;
        }
        let mut rx = radius.x.abs();
        let mut ry = radius.y.abs();
        if rx == 0.0 || ry == 0.0 {
            return None;
        }

        let rotation = rotation_degrees.to_radians();
        let (sin_r, cos_r) = rotation.sin_cos();

        // Step 1: move the origin to the midpoint and undo the rotation.
        let half = (start - end) * 0.5;
        let (dx2, dy2) = (half.x, half.y);
        let x1p = cos_r * dx2 + sin_r * dy2;
        let y1p = -sin_r * dx2 + cos_r * dy2;

        // Out-of-range radii are scaled up until the ellipse just fits.
        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // Step 2: center in the rotated frame.
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let numerator = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
        let denominator = rx2 * y1p * y1p + ry2 * x1p * x1p;
        let mut coefficient = (numerator.max(0.0) / denominator).sqrt();
        if large_arc == sweep {
            coefficient = -coefficient;
        }
        let cxp = coefficient * rx * y1p / ry;
        let cyp = -coefficient * ry * x1p / rx;

        // Step 3: back to the source frame.
        let midpoint = (start + end) * 0.5;
        let center = Point::new(
            cos_r * cxp - sin_r * cyp + midpoint.x,
            sin_r * cxp + cos_r * cyp + midpoint.y,
        );

        // Step 4: start angle and extent.
        let ux = (x1p - cxp) / rx;
        let uy = (y1p - cyp) / ry;
        let vx = (-x1p - cxp) / rx;
        let vy = (-y1p - cyp) / ry;
        let theta = uy.atan2(ux);
        let mut delta = (ux * vy - uy * vx).atan2(ux * vx + uy * vy);
        if !sweep && delta > 0.0 {
            delta -= 2.0 * PI;
        } else if sweep && delta < 0.0 {
            delta += 2.0 * PI;
        }

        Some(Self {
            start,
            end,
            radius: Point::new(rx, ry),
            rotation,
            large_arc,
            sweep,
            center,
            theta,
            delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_circle_center_is_midpoint() {
        let arc = ArcSegment::new(
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            0.0,
            false,
            true,
            Point::new(10.0, 0.0),
        )
        .expect("arc should not be degenerate");
        assert!((arc.center.x - 5.0).abs() < 1e-9);
        assert!(arc.center.y.abs() < 1e-9);
        assert!((arc.delta.abs() - PI).abs() < 1e-9);
    }

    #[test]
    fn test_small_radius_is_scaled_up() {
        let arc = ArcSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            0.0,
            false,
            false,
            Point::new(10.0, 0.0),
        )
        .expect("arc should not be degenerate");
        assert!((arc.radius.x - 5.0).abs() < 1e-9);
        assert!((arc.radius.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_arcs_are_rejected() {
        let p = Point::new(3.0, 4.0);
        assert!(ArcSegment::new(p, Point::new(1.0, 1.0), 0.0, false, false, p).is_none());
        assert!(ArcSegment::new(
            p,
            Point::new(0.0, 1.0),
            0.0,
            false,
            false,
            Point::new(9.0, 9.0)
        )
        .is_none());
    }
}
