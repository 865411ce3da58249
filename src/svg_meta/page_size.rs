//! Physical page size of an SVG document.

use super::{
    error::{Result, SvgMetaError},
    units::{css_dimension_to_mm, MM_PER_INCH},
    INKSCAPE_NAMESPACE, SVG_NAMESPACE,
};
use crate::models::PageSize;
use log::debug;

/// The CSS reference resolution.
pub const DEFAULT_DPI: f64 = 96.0;
/// Resolution assumed for documents written by Inkscape before 0.92.
pub const LEGACY_INKSCAPE_DPI: f64 = 90.0;
/// Resolution assumed for documents written by Adobe Illustrator.
pub const ILLUSTRATOR_DPI: f64 = 72.0;

const FIRST_96_DPI_INKSCAPE: [u32; 3] = [0, 92, 0];

/// How to resolve the pixel size of an SVG document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSizeOptions {
    /// Explicit DPI. When set, no authoring-tool heuristics are applied.
    pub dpi: Option<f64>,
    /// Detect Illustrator output through its `enable-background` attribute.
    pub use_illustrator_heuristic: bool,
}

impl Default for PageSizeOptions {
    fn default() -> Self {
        Self {
            dpi: None,
            use_illustrator_heuristic: true,
        }
    }
}

/// Returns the page size of the `<svg>` element `root`, in millimetres.
///
/// Without an explicit DPI the standard 96 DPI is assumed unless:
/// * `inkscape:version` names a release older than 0.92, which used 90 DPI;
/// * `enable-background` equals `"new "` followed by the `viewBox`, which Illustrator
///   writes and which marks 72 DPI output. Illustrator SVGs do not identify
///   themselves otherwise, so this can be turned off with
///   [`PageSizeOptions::use_illustrator_heuristic`].
///
/// # Errors
/// Fails when `root` is not an `<svg>` element, when `width` or `height` is missing or
/// not an absolute length, or when the Inkscape version cannot be read.
pub fn get_svg_page_size(root: roxmltree::Node, options: &PageSizeOptions) -> Result<PageSize> {
    let tag = root.tag_name();
    let in_svg_namespace = matches!(tag.namespace(), None | Some(SVG_NAMESPACE));
    if !root.is_element() || tag.name() != "svg" || !in_svg_namespace {
        return Err(SvgMetaError::NotSvgRoot(tag.name().to_string()));
    }

    let dpi = match options.dpi {
        Some(dpi) => dpi,
        None => detect_dpi(root, options.use_illustrator_heuristic)?,
    };
    let pixels_per_mm = dpi / MM_PER_INCH;

    let (Some(width), Some(height)) = (root.attribute("width"), root.attribute("height")) else {
        return Err(SvgMetaError::MissingDimensions);
    };

    Ok(PageSize {
        width_mm: css_dimension_to_mm(width, pixels_per_mm)?,
        height_mm: css_dimension_to_mm(height, pixels_per_mm)?,
    })
}

/// Parses `svg` and resolves the page size of its root element.
pub fn svg_page_size_from_str(svg: &str, options: &PageSizeOptions) -> Result<PageSize> {
    let document = roxmltree::Document::parse(svg)?;
    get_svg_page_size(document.root_element(), options)
}

fn detect_dpi(root: roxmltree::Node, use_illustrator_heuristic: bool) -> Result<f64> {
    let mut dpi = DEFAULT_DPI;

    if let Some(version) = root.attribute((INKSCAPE_NAMESPACE, "version")) {
        if inkscape_version(version)?.as_slice() < FIRST_96_DPI_INKSCAPE.as_slice() {
            debug!("[detect_dpi] Legacy Inkscape {} detected, using 90 DPI", version);
            dpi = LEGACY_INKSCAPE_DPI;
        }
    }

    if use_illustrator_heuristic {
        let enable_background = root.attribute("enable-background");
        let view_box = root.attribute("viewBox").unwrap_or("");
        if enable_background == Some(format!("new {}", view_box).as_str()) {
            debug!("[detect_dpi] Illustrator enable-background found, using 72 DPI");
            dpi = ILLUSTRATOR_DPI;
        }
    }

    Ok(dpi)
}

/// Reads the dotted release number at the start of an `inkscape:version` value, e.g.
/// `"0.92.2 2405546, 2018-03-11"` → `[0, 92, 2]`.
fn inkscape_version(version: &str) -> Result<Vec<u32>> {
    let number = version.split(' ').next().unwrap_or_default();
    number
        .split('.')
        .map(|part| part.parse::<u32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| SvgMetaError::InvalidInkscapeVersion(version.to_string()))
}
