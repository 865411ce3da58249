//! Flattens SVG line art into whiteboard stroke-capture documents.
//!
//! Pipeline, per document:
//! 1. Optionally rewrite `<line>`/`<polyline>`/`<polygon>` into `<path>` elements.
//! 2. Collect every path's `d` string in document order and parse it ([`parser`]).
//! 3. Order the paths left to right by start point ([`ordering`]).
//! 4. Track the bounds of all sampled points ([`tracker`]).
//! 5. Map every sample onto the device canvas ([`mapper`]) and assemble the strokes.
//!
//! The resulting [`StrokeDocument`] is written out by [`emitter`].
//!
//! # Limitations
//! *   Stroke order is a left-to-right heuristic; static SVG has no timing data.
//! *   Styles, transforms and non-path shapes other than lines, polylines and polygons
//!     are ignored.

pub mod constants;
pub mod emitter;
mod error;
pub mod mapper;
pub mod options;
pub mod ordering;
pub mod parser;
pub mod sampler;
mod structure;
pub mod tracker;
mod utils;

pub use emitter::{
    render_capture_xml, render_normalized_svg, render_stroke_history, render_strokes_svg,
};
pub use error::{ConversionError, Result};
pub use options::ConversionOptions;
pub use parser::parse_path;
pub use utils::format_coord;

use crate::models::StrokeDocument;
use crate::svg_meta::{collect_path_data, lines_polylines_and_polygons_to_paths};
use log::{debug, info, warn};
use ordering::order_strokes;
use std::borrow::Cow;
use structure::build_stroke_document;

/// Converts the SVG document in `svg` into a capture document.
///
/// # Errors
/// Fails on malformed XML, malformed path data, invalid options, and documents whose
/// sampled points have no drawable extent.
pub fn convert_svg_to_capture(svg: &str, options: &ConversionOptions) -> Result<StrokeDocument> {
    options.validate()?;

    let normalized = if options.normalize_shapes {
        lines_polylines_and_polygons_to_paths(svg)?
    } else {
        Cow::Borrowed(svg)
    };
    if let Cow::Owned(_) = normalized {
        debug!("[convert_svg_to_capture] Rewrote lines/polylines/polygons into paths.");
    }

    let path_data = collect_path_data(&normalized)?;
    convert_path_data(&path_data, options)
}

/// Converts a list of path `d` strings, given in source order, into a capture document.
///
/// Blank strings are skipped with a warning; any other unparsable string fails the
/// whole document.
pub fn convert_path_data<S: AsRef<str>>(
    path_data: &[S],
    options: &ConversionOptions,
) -> Result<StrokeDocument> {
    options.validate()?;

    let mut paths = Vec::with_capacity(path_data.len());
    for (index, data) in path_data.iter().enumerate() {
        let data = data.as_ref();
        if data.trim().is_empty() {
            warn!("Path {} has no path data; skipping it.", index);
            continue;
        }
        paths.push(parse_path(data)?);
    }

    order_strokes(&mut paths);
    let document = build_stroke_document(&paths, options)?;
    info!(
        "Converted {} paths into {} strokes ({} points, canvas {}x{}).",
        path_data.len(),
        document.strokes.len(),
        document.point_count(),
        format_coord(document.canvas().width),
        format_coord(document.canvas().height)
    );
    Ok(document)
}
