//! CSS absolute length parsing.

use super::error::{Result, SvgMetaError};
use regex::Regex;

pub const MM_PER_CM: f64 = 10.0;
pub const MM_PER_QUARTER_MM: f64 = 0.25;
pub const MM_PER_INCH: f64 = 25.4;
pub const MM_PER_PICA: f64 = MM_PER_INCH / 6.0;
pub const MM_PER_POINT: f64 = MM_PER_INCH / 72.0;

/// Pixels per millimetre at the CSS reference resolution of 96 DPI.
pub const DEFAULT_PIXELS_PER_MM: f64 = 96.0 / MM_PER_INCH;

fn length_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*[+]?\s*([0-9.]+)\s*(cm|mm|Q|in|pc|pt|px|)\s*$").expect("valid regex")
    })
}

// Same shape with any alphabetic (or percent) unit, to tell "bad unit" from "bad syntax".
fn any_unit_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*[+]?\s*[0-9.]+\s*([A-Za-z]+|%)\s*$").expect("valid regex")
    })
}

/// Converts a CSS length such as `"3cm"` into millimetres.
///
/// Supports `mm`, `cm`, `Q`, `in`, `pc`, `pt` and `px`; a bare number is read as
/// pixels. Pixel values are converted with `pixels_per_mm`.
///
/// # Errors
/// * [`SvgMetaError::UnsupportedUnit`] for relative or unknown units (`em`, `%`, `vw`,
///   wrong case such as `MM`).
/// * [`SvgMetaError::MalformedLength`] for anything else that is not a single
///   non-negative number with an optional unit.
pub fn css_dimension_to_mm(dimension: &str, pixels_per_mm: f64) -> Result<f64> {
    let Some(captures) = length_regex().captures(dimension) else {
        if let Some(unit) = any_unit_regex()
            .captures(dimension)
            .and_then(|c| c.get(1))
        {
            return Err(SvgMetaError::UnsupportedUnit {
                dimension: dimension.to_string(),
                unit: unit.as_str().to_string(),
            });
        }
        return Err(SvgMetaError::MalformedLength(dimension.to_string()));
    };

    let number: f64 = captures[1]
        .parse()
        .map_err(|_| SvgMetaError::MalformedLength(dimension.to_string()))?;

    let mm = match &captures[2] {
        "mm" => number,
        "cm" => number * MM_PER_CM,
        "Q" => number * MM_PER_QUARTER_MM,
        "in" => number * MM_PER_INCH,
        "pc" => number * MM_PER_PICA,
        "pt" => number * MM_PER_POINT,
        _ => number / pixels_per_mm,
    };
    Ok(mm)
}
