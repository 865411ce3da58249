//! Writes capture documents out as capture XML and as polyline SVG.

use super::{
    constants::{CAPTURE_XML_DECLARATION, SVG_NAMESPACE, XML_DECLARATION},
    error::Result,
    utils::{escape_xml_attr, format_coord},
};
use crate::models::{CanvasSpec, Point, Stroke, StrokeDocument};
use std::fmt::Write;

/// Serializes a capture document to XML, tab indented.
///
/// ```text
/// WhiteboardCaptureSession
///   WhiteboardDescription
///     SensorLocation(corner) DiagonallyOppositeCoords(x, y)
///     VerticallyOppositeCoords(x, y) HorizontallyOppositeCoords(x, y)
///   StrokeSet
///     Stroke(colour)*
///       Point(x, y)*
/// ```
pub fn render_capture_xml(document: &StrokeDocument) -> Result<String> {
    let description = &document.description;
    let mut xml = String::new();

    writeln!(xml, "{}", CAPTURE_XML_DECLARATION)?;
    writeln!(xml, "<WhiteboardCaptureSession>")?;
    writeln!(xml, "\t<WhiteboardDescription>")?;
    writeln!(
        xml,
        "\t\t<SensorLocation corner=\"{}\" />",
        escape_xml_attr(&description.sensor_location)
    )?;
    write_coords(&mut xml, "DiagonallyOppositeCoords", description.diagonally_opposite)?;
    write_coords(&mut xml, "VerticallyOppositeCoords", description.vertically_opposite)?;
    write_coords(
        &mut xml,
        "HorizontallyOppositeCoords",
        description.horizontally_opposite,
    )?;
    writeln!(xml, "\t</WhiteboardDescription>")?;

    if document.strokes.is_empty() {
        writeln!(xml, "\t<StrokeSet />")?;
    } else {
        writeln!(xml, "\t<StrokeSet>")?;
        for stroke in &document.strokes {
            let colour = escape_xml_attr(&stroke.colour);
            if stroke.points.is_empty() {
                writeln!(xml, "\t\t<Stroke colour=\"{}\" />", colour)?;
                continue;
            }
            writeln!(xml, "\t\t<Stroke colour=\"{}\">", colour)?;
            for point in &stroke.points {
                writeln!(
                    xml,
                    "\t\t\t<Point x=\"{}\" y=\"{}\" />",
                    format_coord(point.x),
                    format_coord(point.y)
                )?;
            }
            writeln!(xml, "\t\t</Stroke>")?;
        }
        writeln!(xml, "\t</StrokeSet>")?;
    }
    writeln!(xml, "</WhiteboardCaptureSession>")?;

    Ok(xml)
}

fn write_coords(xml: &mut String, tag: &str, point: Point) -> std::fmt::Result {
    writeln!(
        xml,
        "\t\t<{} x=\"{}\" y=\"{}\" />",
        tag,
        format_coord(point.x),
        format_coord(point.y)
    )
}

/// Appends the polyline of one stroke: `M x y ` then `L x,y` for every further point.
pub fn write_stroke_path_data(out: &mut String, stroke: &Stroke) -> std::fmt::Result {
    let Some((first, rest)) = stroke.points.split_first() else {
        return Ok(());
    };
    write!(out, "M{} {} ", format_coord(first.x), format_coord(first.y))?;
    for (i, point) in rest.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "L {},{}", format_coord(point.x), format_coord(point.y))?;
    }
    Ok(())
}

/// Renders `strokes` as a single `<path>` on a canvas-sized viewBox.
pub fn render_strokes_svg(canvas: CanvasSpec, strokes: &[Stroke]) -> Result<String> {
    let mut d = String::new();
    for stroke in strokes {
        write_stroke_path_data(&mut d, stroke)?;
    }

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
    Ok(svg)
}

/// The normalized single-path SVG of a whole document.
pub fn render_normalized_svg(document: &StrokeDocument) -> Result<String> {
    render_strokes_svg(document.canvas(), &document.strokes)
}

/// One SVG per stroke index `k`, showing strokes `0..=k`, for progressive replay.
///
/// Accumulation is scoped to `document`; nothing carries over between documents.
pub fn render_stroke_history(document: &StrokeDocument) -> Result<Vec<String>> {
    let canvas = document.canvas();
    (1..=document.strokes.len())
        .map(|end| render_strokes_svg(canvas, &document.strokes[..end]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WhiteboardDescription;

    fn sample_document() -> StrokeDocument {
        StrokeDocument {
            description: WhiteboardDescription {
                sensor_location: "top_left".to_string(),
                diagonally_opposite: Point::new(400.0, 200.0),
                vertically_opposite: Point::new(40.0, 200.0),
                horizontally_opposite: Point::new(400.0, 20.0),
            },
            strokes: vec![
                Stroke {
                    colour: "black".to_string(),
                    points: vec![
                        Point::new(0.0, 200.0),
                        Point::new(10.0, 190.0),
                        Point::new(20.5, 180.0),
                    ],
                },
                Stroke {
                    colour: "black".to_string(),
                    points: vec![Point::new(300.0, 50.0), Point::new(400.0, 0.0)],
                },
            ],
        }
    }

    #[test]
    fn test_capture_xml_layout() {
        let xml = render_capture_xml(&sample_document()).expect("render should succeed");
        assert!(xml.starts_with("<?xml version='1.0' encoding='utf-8'?>\n<WhiteboardCaptureSession>"));
        assert!(xml.contains("\t\t<SensorLocation corner=\"top_left\" />\n"));
        assert!(xml.contains("\t\t<DiagonallyOppositeCoords x=\"400\" y=\"200\" />\n"));
        assert!(xml.contains("\t\t<VerticallyOppositeCoords x=\"40\" y=\"200\" />\n"));
        assert!(xml.contains("\t\t<HorizontallyOppositeCoords x=\"400\" y=\"20\" />\n"));
        assert_eq!(xml.matches("<Stroke colour=\"black\">").count(), 2);
        assert_eq!(xml.matches("<Point ").count(), 5);
        assert!(xml.contains("\t\t\t<Point x=\"20.5\" y=\"180\" />\n"));
        assert!(xml.ends_with("</WhiteboardCaptureSession>\n"));

        // Well-formed XML.
        roxmltree::Document::parse(&xml).expect("capture XML should parse");
    }

    #[test]
    fn test_normalized_svg_path_data() {
        let svg = render_normalized_svg(&sample_document()).expect("render should succeed");
        assert!(svg.contains(r#"viewBox="0,0,400,200" width="100%""#));
        assert!(svg.contains(
            r#"<path d="M0 200 L 10,190 L 20.5,180M300 50 L 400,0"/>"#
        ));
        roxmltree::Document::parse(&svg).expect("SVG should parse");
    }

    #[test]
    fn test_stroke_history_accumulates_within_document() {
        let history = render_stroke_history(&sample_document()).expect("render should succeed");
        assert_eq!(history.len(), 2);
        assert!(history[0].contains(r#"d="M0 200 L 10,190 L 20.5,180""#));
        assert!(!history[0].contains("M300"));
        // The second frame repeats the first stroke exactly once.
        assert_eq!(history[1].matches("L 10,190").count(), 1);
        assert!(history[1].contains("M300 50 L 400,0"));
    }

    #[test]
    fn test_empty_stroke_set() {
        let mut document = sample_document();
        document.strokes.clear();
        let xml = render_capture_xml(&document).expect("render should succeed");
        assert!(xml.contains("\t<StrokeSet />\n"));
        assert!(render_stroke_history(&document)
            .expect("render should succeed")
            .is_empty());
    }
}
