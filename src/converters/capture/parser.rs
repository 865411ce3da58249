//! Parses SVG path data (`d` attributes) into absolute [`PathSegment`]s.
//!
//! Tokenization, including implicit command repetition and the implicit lineto after
//! a moveto, is delegated to `svgtypes`. This module resolves relative coordinates,
//! smooth-curve reflections, closepath and arc parameterization.

use super::error::{ConversionError, Result};
use crate::models::{ArcSegment, Path, PathSegment, Point};
use log::debug;
use svgtypes::{PathParser, PathSegment as PathToken};

/// Parses one path data string.
///
/// # Errors
/// * [`ConversionError::PathSyntax`] when a command or number is malformed.
/// * [`ConversionError::EmptyPathData`] when the string contains no commands.
pub fn parse_path(data: &str) -> Result<Path> {
    let mut builder = SegmentBuilder::default();
    for token in PathParser::from(data) {
        let token = token.map_err(|source| ConversionError::PathSyntax {
            data: data.to_string(),
            source,
        })?;
        builder.push(token);
    }

    let segments = builder.finish();
    if segments.is_empty() {
        return Err(ConversionError::EmptyPathData);
    }
    debug!("[parse_path] Parsed {} segments", segments.len());
    Ok(Path::new(data, segments))
}

/// Tracks the pen state while turning tokens into absolute segments.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<PathSegment>,
    current: Point,
    subpath_start: Point,
    // Second control point of the previous cubic, for `S`.
    last_cubic_control: Option<Point>,
    // Control point of the previous quadratic, for `T`.
    last_quadratic_control: Option<Point>,
}

impl SegmentBuilder {
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point {
        if abs {
            Point::new(x, y)
        } else {
            Point::new(self.current.x + x, self.current.y + y)
        }
    }

    /// Mirrors `control` through the current point.
    fn reflect(&self, control: Point) -> Point {
        Point::new(
            2.0 * self.current.x - control.x,
            2.0 * self.current.y - control.y,
        )
    }

    fn push(&mut self, token: PathToken) {
        let mut cubic_control = None;
        let mut quadratic_control = None;

        match token {
            PathToken::MoveTo { abs, x, y } => {
                let to = self.resolve(abs, x, y);
                self.segments.push(PathSegment::Move { to });
                self.current = to;
                self.subpath_start = to;
            }
            PathToken::LineTo { abs, x, y } => {
                let end = self.resolve(abs, x, y);
                self.line_to(end);
            }
            PathToken::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { self.current.x + x };
                self.line_to(Point::new(x, self.current.y));
            }
            PathToken::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { self.current.y + y };
                self.line_to(Point::new(self.current.x, y));
            }
            PathToken::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let control1 = self.resolve(abs, x1, y1);
                let control2 = self.resolve(abs, x2, y2);
                let end = self.resolve(abs, x, y);
                self.cubic_to(control1, control2, end);
                cubic_control = Some(control2);
            }
            PathToken::SmoothCurveTo { abs, x2, y2, x, y } => {
                let control1 = self
                    .last_cubic_control
                    .map(|control| self.reflect(control))
                    .unwrap_or(self.current);
                let control2 = self.resolve(abs, x2, y2);
                let end = self.resolve(abs, x, y);
                self.cubic_to(control1, control2, end);
                cubic_control = Some(control2);
            }
            PathToken::Quadratic { abs, x1, y1, x, y } => {
                let control = self.resolve(abs, x1, y1);
                let end = self.resolve(abs, x, y);
                self.quadratic_to(control, end);
                quadratic_control = Some(control);
            }
            PathToken::SmoothQuadratic { abs, x, y } => {
                let control = self
                    .last_quadratic_control
                    .map(|control| self.reflect(control))
                    .unwrap_or(self.current);
                let end = self.resolve(abs, x, y);
                self.quadratic_to(control, end);
                quadratic_control = Some(control);
            }
            PathToken::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let end = self.resolve(abs, x, y);
                match ArcSegment::new(
                    self.current,
                    Point::new(rx, ry),
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    end,
                ) {
                    Some(arc) => {
                        self.segments.push(PathSegment::EllipticalArc(arc));
                        self.current = end;
                    }
                    // Coincident endpoints: the arc is omitted entirely.
                    None if end == self.current => {}
                    // Zero radius: the arc is a straight line.
                    None => self.line_to(end),
                }
            }
            PathToken::ClosePath { .. } => {
                let start = self.subpath_start;
                self.line_to(start);
            }
        }

        self.last_cubic_control = cubic_control;
        self.last_quadratic_control = quadratic_control;
    }

    fn line_to(&mut self, end: Point) {
        self.segments.push(PathSegment::Line {
            start: self.current,
            end,
        });
        self.current = end;
    }

    fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.segments.push(PathSegment::CubicBezier {
            start: self.current,
            control1,
            control2,
            end,
        });
        self.current = end;
    }

    fn quadratic_to(&mut self, control: Point, end: Point) {
        self.segments.push(PathSegment::QuadraticBezier {
            start: self.current,
            control,
            end,
        });
        self.current = end;
    }

    fn finish(self) -> Vec<PathSegment> {
        self.segments
    }
}
