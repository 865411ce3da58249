//! SVG metadata helpers: absolute length conversion, physical page size, and
//! normalization of basic shapes into paths.

mod error;
pub mod normalize;
pub mod page_size;
pub mod units;

pub use error::{Result, SvgMetaError};
pub use normalize::{collect_path_data, lines_polylines_and_polygons_to_paths};
pub use page_size::{get_svg_page_size, svg_page_size_from_str, PageSizeOptions};
pub use units::css_dimension_to_mm;

/// Relevant XML namespace URIs used by SVGs.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const INKSCAPE_NAMESPACE: &str = "http://www.inkscape.org/namespaces/inkscape";
