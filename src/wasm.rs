//! wasm-bindgen entry points for converting drawings in the browser.
//!
//! Errors cross the boundary as strings; call [`init_logging`] once to route `log`
//! output to the browser console.

use crate::converters::capture::{
    convert_svg_to_capture, render_capture_xml, render_normalized_svg, render_stroke_history,
    ConversionOptions,
};
use crate::converters::reconstruct::{parse_capture_document, reconstruct_stroke_svgs};
use crate::errors::Result;
use crate::models::StrokeDocument;
use crate::svg_meta::{svg_page_size_from_str, PageSizeOptions};
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn options(samples_per_segment: usize, canvas_width: f64) -> ConversionOptions {
    ConversionOptions::default()
        .with_samples_per_segment(samples_per_segment)
        .with_canvas_width(canvas_width)
}

fn capture(svg: &str, samples_per_segment: usize, canvas_width: f64) -> Result<StrokeDocument> {
    Ok(convert_svg_to_capture(
        svg,
        &options(samples_per_segment, canvas_width),
    )?)
}

fn capture_xml(svg: &str, samples_per_segment: usize, canvas_width: f64) -> Result<String> {
    let document = capture(svg, samples_per_segment, canvas_width)?;
    Ok(render_capture_xml(&document)?)
}

fn replay_frames(xml: &str) -> Result<Vec<String>> {
    let document = parse_capture_document(xml)?;
    let (frames, _) = reconstruct_stroke_svgs(&document)?;
    Ok(frames)
}

fn page_size_mm(svg: &str, dpi: Option<f64>) -> Result<Vec<f64>> {
    let options = PageSizeOptions {
        dpi,
        ..PageSizeOptions::default()
    };
    let size = svg_page_size_from_str(svg, &options)?;
    Ok(vec![size.width_mm, size.height_mm])
}

/// Installs the console logger and, when enabled, the panic hook.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second call finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen(js_name = svgToCaptureXml)]
pub fn svg_to_capture_xml(
    svg: &str,
    samples_per_segment: usize,
    canvas_width: f64,
) -> std::result::Result<String, JsValue> {
    capture_xml(svg, samples_per_segment, canvas_width).map_err(to_js_error)
}

/// The normalized single-path SVG of a drawing.
#[wasm_bindgen(js_name = svgToPolylineSvg)]
pub fn svg_to_polyline_svg(
    svg: &str,
    samples_per_segment: usize,
    canvas_width: f64,
) -> std::result::Result<String, JsValue> {
    capture(svg, samples_per_segment, canvas_width)
        .and_then(|document| Ok(render_normalized_svg(&document)?))
        .map_err(to_js_error)
}

/// Cumulative per-stroke SVG frames of a drawing.
#[wasm_bindgen(js_name = svgToStrokeHistory)]
pub fn svg_to_stroke_history(
    svg: &str,
    samples_per_segment: usize,
    canvas_width: f64,
) -> std::result::Result<Vec<String>, JsValue> {
    capture(svg, samples_per_segment, canvas_width)
        .and_then(|document| Ok(render_stroke_history(&document)?))
        .map_err(to_js_error)
}

/// Replay frames rebuilt from a capture XML document.
#[wasm_bindgen(js_name = reconstructCapture)]
pub fn reconstruct_capture(xml: &str) -> std::result::Result<Vec<String>, JsValue> {
    replay_frames(xml).map_err(to_js_error)
}

/// `[width_mm, height_mm]` of an SVG document.
#[wasm_bindgen(js_name = svgPageSize)]
pub fn svg_page_size(svg: &str, dpi: Option<f64>) -> std::result::Result<Vec<f64>, JsValue> {
    page_size_mm(svg, dpi).map_err(to_js_error)
}
