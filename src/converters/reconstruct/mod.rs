//! Rebuilds SVG path syntax from capture documents, for visual round-trip checks.
//!
//! Each stroke becomes `M x y L x y ...` in device space. The replay SVGs are
//! cumulative: frame `k` draws strokes `0..=k` on the canvas given by the document's
//! `DiagonallyOppositeCoords`.

mod error;

pub use error::{ReconstructionError, Result};

use crate::converters::capture::{
    constants::{DEFAULT_STROKE_COLOUR, SENSOR_CORNER, SVG_NAMESPACE, XML_DECLARATION},
    format_coord,
};
use crate::models::{Point, Stroke, StrokeDocument, WhiteboardDescription};
use log::{debug, info, warn};
use roxmltree::Node;
use std::fmt::Write;

/// Point counts per stroke, in stroke order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconstructionReport {
    pub points_per_stroke: Vec<usize>,
}

impl ReconstructionReport {
    pub fn total_points(&self) -> usize {
        self.points_per_stroke.iter().sum()
    }

    pub fn empty_strokes(&self) -> usize {
        self.points_per_stroke.iter().filter(|&&n| n == 0).count()
    }
}

/// Reads a capture XML document into a [`StrokeDocument`].
///
/// Elements are looked up by name anywhere below their parent. Attributes other than
/// the ones the model holds (e.g. a per-point `time`) are ignored.
///
/// # Errors
/// Fails on malformed XML, missing elements or attributes, and coordinates that are
/// not finite numbers.
pub fn parse_capture_document(xml: &str) -> Result<StrokeDocument> {
    let document = roxmltree::Document::parse(xml)?;
    let root = document.root_element();
    if root.tag_name().name() != "WhiteboardCaptureSession" {
        return Err(ReconstructionError::MissingElement("WhiteboardCaptureSession"));
    }

    let region = find_element(root, "WhiteboardDescription")?;
    let sensor_location = find_element(region, "SensorLocation")
        .ok()
        .and_then(|node| node.attribute("corner"))
        .unwrap_or(SENSOR_CORNER)
        .to_string();
    let description = WhiteboardDescription {
        sensor_location,
        diagonally_opposite: read_coords(region, "DiagonallyOppositeCoords")?,
        vertically_opposite: read_coords(region, "VerticallyOppositeCoords")?,
        horizontally_opposite: read_coords(region, "HorizontallyOppositeCoords")?,
    };

    let stroke_set = find_element(root, "StrokeSet")?;
    let strokes = stroke_set
        .descendants()
        .filter(|node| node.has_tag_name("Stroke"))
        .map(|stroke| {
            let points = stroke
                .descendants()
                .filter(|node| node.has_tag_name("Point"))
                .map(|point| read_point(point, "Point"))
                .collect::<Result<Vec<_>>>()?;
            Ok(Stroke {
                colour: stroke
                    .attribute("colour")
                    .unwrap_or(DEFAULT_STROKE_COLOUR)
                    .to_string(),
                points,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "[parse_capture_document] Read {} strokes on a {}x{} canvas.",
        strokes.len(),
        format_coord(description.diagonally_opposite.x),
        format_coord(description.diagonally_opposite.y)
    );
    Ok(StrokeDocument {
        description,
        strokes,
    })
}

fn find_element<'a, 'input>(
    parent: Node<'a, 'input>,
    name: &'static str,
) -> Result<Node<'a, 'input>> {
    parent
        .descendants()
        .find(|node| node.has_tag_name(name))
        .ok_or(ReconstructionError::MissingElement(name))
}

fn read_coords(region: Node, element: &'static str) -> Result<Point> {
    read_point(find_element(region, element)?, element)
}

fn read_point(node: Node, element: &'static str) -> Result<Point> {
    let coordinate = |attribute: &'static str| -> Result<f64> {
        let value = node
            .attribute(attribute)
            .ok_or(ReconstructionError::MissingAttribute { element, attribute })?;
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ReconstructionError::InvalidCoordinate {
                element,
                value: value.to_string(),
            })
    };
    Ok(Point::new(coordinate("x")?, coordinate("y")?))
}

/// Path data of one stroke: `M x y ` followed by `L x y ` for every further point.
///
/// An empty stroke yields an empty string.
pub fn reconstruct_path_data(stroke: &Stroke) -> Result<String> {
    let mut d = String::new();
    write_reconstructed_path_data(&mut d, stroke)?;
    Ok(d)
}

/// Appends the reconstructed path data of `stroke` to `out`.
pub fn write_reconstructed_path_data(out: &mut String, stroke: &Stroke) -> std::fmt::Result {
    let Some((first, rest)) = stroke.points.split_first() else {
        return Ok(());
    };
    write!(out, "M{} {} ", format_coord(first.x), format_coord(first.y))?;
    for point in rest {
        write!(out, "L {} {} ", format_coord(point.x), format_coord(point.y))?;
    }
    Ok(())
}

/// Builds one SVG per stroke index `k`, each drawing strokes `0..=k`, and reports the
/// number of points in every stroke.
///
/// Empty strokes are counted as zero points and add nothing to the drawing.
pub fn reconstruct_stroke_svgs(
    document: &StrokeDocument,
) -> Result<(Vec<String>, ReconstructionReport)> {
    let canvas = document.canvas();
    let mut report = ReconstructionReport::default();
    let mut svgs = Vec::with_capacity(document.strokes.len());
    let mut d = String::new();

    for (index, stroke) in document.strokes.iter().enumerate() {
        let count = stroke.points.len();
        if count == 0 {
            warn!("Stroke {} has no points.", index);
        } else {
            info!("Stroke {}: {} points", index, count);
        }
        report.points_per_stroke.push(count);
        write_reconstructed_path_data(&mut d, stroke)?;

        let mut svg = String::new();
        writeln!(svg, "{}", XML_DECLARATION)?;
        writeln!(
            svg,
            r#"<svg xmlns="{}" viewBox="0,0,{},{}" width="100%">"#,
            SVG_NAMESPACE,
            format_coord(canvas.width),
            format_coord(canvas.height)
        )?;
        writeln!(svg, r#"<path d="{}"/>"#, d.trim_end())?;
        writeln!(svg, "</svg>")?;
        svgs.push(svg);
    }

    Ok((svgs, report))
}
