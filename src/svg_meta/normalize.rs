//! Rewrites basic shapes into paths and collects path data.

use super::{
    error::{Result, SvgMetaError},
    SVG_NAMESPACE,
};
use regex::Regex;
use std::{borrow::Cow, fmt::Write};

fn points_separator_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*(?:,|\s)\s*").expect("valid regex"))
}

/// Attributes folded into the generated `d`, per shape element.
fn geometry_attributes(tag: &str) -> &'static [&'static str] {
    match tag {
        "line" => &["x1", "y1", "x2", "y2"],
        "polyline" | "polygon" => &["points"],
        _ => &[],
    }
}

fn is_svg_shape(node: &roxmltree::Node) -> bool {
    let tag = node.tag_name();
    node.is_element()
        && tag.namespace() == Some(SVG_NAMESPACE)
        && matches!(tag.name(), "line" | "polyline" | "polygon")
}

/// Rewrites every SVG `<line>`, `<polyline>` and `<polygon>` element in `svg` into an
/// equivalent `<path>` element, keeping all other attributes and the rest of the
/// document byte for byte.
///
/// Returns the input unchanged (borrowed) when there is nothing to rewrite.
///
/// # Errors
/// Fails on malformed XML, missing geometry attributes and unparsable point lists.
pub fn lines_polylines_and_polygons_to_paths(svg: &str) -> Result<Cow<'_, str>> {
    let document = roxmltree::Document::parse(svg)?;
    let shapes: Vec<_> = document.descendants().filter(is_svg_shape).collect();
    if shapes.is_empty() {
        return Ok(Cow::Borrowed(svg));
    }

    let mut out = String::with_capacity(svg.len());
    let mut cursor = 0;
    for node in shapes {
        let range = node.range();
        if range.start < cursor {
            // Nested inside an element that was already rewritten.
            continue;
        }
        out.push_str(&svg[cursor..range.start]);
        write_path_element(&mut out, svg, node)?;
        cursor = range.end;
    }
    out.push_str(&svg[cursor..]);
    Ok(Cow::Owned(out))
}

/// Returns the `d` attribute of every `path` element in document order.
///
/// Elements without a `d` attribute yield an empty string.
pub fn collect_path_data(svg: &str) -> Result<Vec<String>> {
    let document = roxmltree::Document::parse(svg)?;
    Ok(document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "path")
        .map(|node| node.attribute("d").unwrap_or_default().to_string())
        .collect())
}

/// Builds the path data equivalent to a shape element.
fn shape_path_data(node: roxmltree::Node) -> Result<String> {
    let tag = node.tag_name().name();
    let required = |attribute: &'static str| {
        node.attribute(attribute)
            .ok_or_else(|| SvgMetaError::MissingAttribute {
                element: tag.to_string(),
                attribute,
            })
    };

    if tag == "line" {
        return Ok(format!(
            "M{} {} L{} {}",
            required("x1")?,
            required("y1")?,
            required("x2")?,
            required("y2")?
        ));
    }

    let points = required("points")?;
    let numbers = points_separator_regex()
        .split(points.trim())
        .map(|token| token.parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| SvgMetaError::InvalidPoints(points.to_string()))?;

    let mut d = String::from("M");
    for (i, pair) in numbers.chunks_exact(2).enumerate() {
        if i > 0 {
            d.push('L');
        }
        write!(d, "{} {}", pair[0], pair[1])?;
    }
    if tag == "polygon" {
        d.push('Z');
    }
    Ok(d)
}

fn write_path_element(out: &mut String, source: &str, node: roxmltree::Node) -> Result<()> {
    let d = shape_path_data(node)?;
    let consumed = geometry_attributes(node.tag_name().name());

    // Keep the prefix when the SVG namespace is not the default one.
    let tag = match node.lookup_namespace_uri(None) {
        Some(SVG_NAMESPACE) => "path".to_string(),
        _ => match node.lookup_prefix(SVG_NAMESPACE) {
            Some(prefix) if !prefix.is_empty() => format!("{}:path", prefix),
            _ => "path".to_string(),
        },
    };

    write!(out, "<{}", tag)?;
    for attribute in node.attributes() {
        let value = escape_attribute(attribute.value());
        match attribute.namespace() {
            None if consumed.contains(&attribute.name()) => {}
            None => write!(out, " {}=\"{}\"", attribute.name(), value)?,
            Some(uri) => match node.lookup_prefix(uri) {
                Some(prefix) if !prefix.is_empty() => {
                    write!(out, " {}:{}=\"{}\"", prefix, attribute.name(), value)?
                }
                _ => write!(out, " {}=\"{}\"", attribute.name(), value)?,
            },
        }
    }
    write!(out, " d=\"{}\"", d)?;

    match (node.first_child(), node.last_child()) {
        (Some(first), Some(last)) => {
            out.push('>');
            out.push_str(&source[first.range().start..last.range().end]);
            write!(out, "</{}>", tag)?;
        }
        _ => out.push_str("/>"),
    }
    Ok(())
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_shapes_returns_input() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0 L1 1"/></svg>"#;
        let result = lines_polylines_and_polygons_to_paths(svg).expect("valid svg");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_shapes_outside_svg_namespace_are_kept() {
        let svg = r#"<svg><line x1="0" y1="0" x2="1" y2="1"/></svg>"#;
        let result = lines_polylines_and_polygons_to_paths(svg).expect("valid svg");
        assert_eq!(result, svg);
    }

    #[test]
    fn test_line_becomes_path() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><line id="a" x1="0" y1="1.5" x2="20" y2="30" stroke="red"/></svg>"#;
        let result = lines_polylines_and_polygons_to_paths(svg).expect("valid svg");
        assert_eq!(
            result,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="a" stroke="red" d="M0 1.5 L20 30"/></svg>"#
        );
    }

    #[test]
    fn test_polyline_and_polygon() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <polyline points="10,20 30,40  50 , 60"/>
  <polygon points=" 0 0 10 0 10 10 "><title>box</title></polygon>
</svg>"#;
        let result = lines_polylines_and_polygons_to_paths(svg).expect("valid svg");
        assert_eq!(
            collect_path_data(&result).expect("rewritten svg parses"),
            vec!["M10 20L30 40L50 60", "M0 0L10 0L10 10Z"]
        );
        assert!(result.contains(r#"<path d="M0 0L10 0L10 10Z"><title>box</title></path>"#));
    }

    #[test]
    fn test_prefixed_svg_namespace() {
        let svg = r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:line x1="0" y1="0" x2="1" y2="1"/></svg:svg>"#;
        let result = lines_polylines_and_polygons_to_paths(svg).expect("valid svg");
        assert!(result.contains(r#"<svg:path d="M0 0 L1 1"/>"#));
    }

    #[test]
    fn test_invalid_shapes() {
        let missing = r#"<svg xmlns="http://www.w3.org/2000/svg"><line x1="0" y1="0" x2="1"/></svg>"#;
        assert!(matches!(
            lines_polylines_and_polygons_to_paths(missing),
            Err(SvgMetaError::MissingAttribute { attribute: "y2", .. })
        ));

        let bad_points = r#"<svg xmlns="http://www.w3.org/2000/svg"><polygon points="1,2 x,4"/></svg>"#;
        assert!(matches!(
            lines_polylines_and_polygons_to_paths(bad_points),
            Err(SvgMetaError::InvalidPoints(_))
        ));
    }

    #[test]
    fn test_collect_path_data_in_document_order() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <path d="M1 1"/>
  <g><path d="M2 2"/><path/></g>
  <path d="M3 3"/>
</svg>"#;
        assert_eq!(
            collect_path_data(svg).expect("valid svg"),
            vec!["M1 1", "M2 2", "", "M3 3"]
        );
    }
}
