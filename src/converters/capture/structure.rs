//! Assembles a [`StrokeDocument`] from ordered paths in two passes: bounds first, then
//! mapping and sampling of every stroke.

use super::{
    error::Result, mapper::CoordinateMapper, options::ConversionOptions, sampler::sample,
    tracker::track_bounds,
};
use crate::models::{Path, Stroke, StrokeDocument};
use log::debug;

/// Builds the capture document for `paths`, which are expected in stroke order.
///
/// Each stroke starts with the mapped start point of its path, followed by
/// `samples_per_segment` mapped samples of every segment after the first.
pub(crate) fn build_stroke_document(
    paths: &[Path],
    options: &ConversionOptions,
) -> Result<StrokeDocument> {
    let samples = options.samples_per_segment;

    // 1. Bounds over everything that will be emitted.
    let bounds = track_bounds(paths, samples);

    // 2. One mapper for the whole document.
    let mapper = CoordinateMapper::new(&bounds, options.canvas_width)?;
    debug!(
        "[build_stroke_document] Canvas {:?}, scale {:?}",
        mapper.canvas(),
        mapper.scale()
    );

    // 3. Strokes.
    let strokes = paths
        .iter()
        .map(|path| {
            let mut points =
                Vec::with_capacity(1 + path.len().saturating_sub(1) * samples);
            points.push(mapper.map(path.start_point()));
            for segment in path.segments().iter().skip(1) {
                points.extend(sample(segment, samples).into_iter().map(|p| mapper.map(p)));
            }
            Stroke {
                colour: options.stroke_colour.clone(),
                points,
            }
        })
        .collect();

    Ok(StrokeDocument {
        description: mapper.description(),
        strokes,
    })
}
