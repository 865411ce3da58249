//! Directory orchestration: converts every SVG of an input directory and writes the
//! capture artifacts, reporting per-file success or failure without stopping early.
//!
//! Every artifact of a file is rendered in memory first; each output file is then
//! written to a hidden temporary sibling and renamed into place, so a failed run never
//! leaves a truncated artifact behind.

use crate::converters::capture::{
    convert_svg_to_capture, render_capture_xml, render_normalized_svg, render_stroke_history,
    ConversionOptions,
};
use crate::converters::reconstruct::{
    parse_capture_document, reconstruct_stroke_svgs, ReconstructionReport,
};
use crate::errors::{CaptureError, Result};
use indexmap::IndexMap;
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a batch run reads its input and writes each kind of artifact.
///
/// Only the capture XML is always written; the other outputs are produced when
/// their directory is set.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchLayout {
    pub input_dir: PathBuf,
    /// `<stem>.xml` capture documents.
    pub xml_dir: PathBuf,
    /// `<stem>.svg` normalized single-path SVGs.
    pub svg_dir: Option<PathBuf>,
    /// `<stem>/<k>.svg` cumulative replay frames.
    pub stroke_history_dir: Option<PathBuf>,
    /// `<stem>.json` renditions of the capture document.
    pub json_dir: Option<PathBuf>,
}

impl BatchLayout {
    pub fn new(input_dir: impl Into<PathBuf>, xml_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            xml_dir: xml_dir.into(),
            svg_dir: None,
            stroke_history_dir: None,
            json_dir: None,
        }
    }

    pub fn with_svg_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.svg_dir = Some(dir.into());
        self
    }

    pub fn with_stroke_history_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stroke_history_dir = Some(dir.into());
        self
    }

    pub fn with_json_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.json_dir = Some(dir.into());
        self
    }
}

/// Summary of one successfully converted file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedFile {
    pub strokes: usize,
    pub points: usize,
    /// Every file written for this input, capture XML first.
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug)]
pub enum FileOutcome {
    Converted(ConvertedFile),
    Failed(CaptureError),
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Converted(_))
    }
}

/// Per-file outcomes of a batch run, keyed by input file name in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: IndexMap<String, FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.files.values().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// File names and errors of the failed inputs.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &CaptureError)> {
        self.files.iter().filter_map(|(name, outcome)| match outcome {
            FileOutcome::Failed(err) => Some((name.as_str(), err)),
            FileOutcome::Converted(_) => None,
        })
    }
}

/// Converts every `*.svg` file of `layout.input_dir`, in file-name order.
///
/// # Errors
/// Only invalid options and an unreadable input directory abort the run. Failures of
/// individual files are recorded in the returned [`BatchReport`].
pub fn convert_directory(layout: &BatchLayout, options: &ConversionOptions) -> Result<BatchReport> {
    options.validate()?;

    let mut report = BatchReport::default();
    for path in svg_files(&layout.input_dir)? {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let outcome = match convert_file(&path, layout, options) {
            Ok(converted) => {
                info!(
                    "{}: {} strokes, {} points, {} files written.",
                    name,
                    converted.strokes,
                    converted.points,
                    converted.outputs.len()
                );
                FileOutcome::Converted(converted)
            }
            Err(err) => {
                error!("{}: {}", name, err);
                FileOutcome::Failed(err)
            }
        };
        report.files.insert(name, outcome);
    }

    info!(
        "Batch finished: {} converted, {} failed.",
        report.succeeded(),
        report.failed()
    );
    Ok(report)
}

/// Lists the SVG files of `dir` sorted by file name.
fn svg_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| CaptureError::io(dir, source))? {
        let path = entry.map_err(|source| CaptureError::io(dir, source))?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("svg") {
            warn!("Skipping non-SVG file {}", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Converts one SVG file and writes its artifacts according to `layout`.
pub fn convert_file(
    input: &Path,
    layout: &BatchLayout,
    options: &ConversionOptions,
) -> Result<ConvertedFile> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CaptureError::InvalidInput(format!("no file name in {}", input.display())))?;

    let svg = fs::read_to_string(input).map_err(|source| CaptureError::io(input, source))?;
    let document = convert_svg_to_capture(&svg, options)?;

    // Render everything before touching the output directories.
    let mut artifacts: Vec<(PathBuf, String)> = vec![(
        layout.xml_dir.join(format!("{}.xml", stem)),
        render_capture_xml(&document)?,
    )];
    if let Some(dir) = &layout.svg_dir {
        artifacts.push((
            dir.join(format!("{}.svg", stem)),
            render_normalized_svg(&document)?,
        ));
    }
    let mut history = None;
    if let Some(dir) = &layout.stroke_history_dir {
        let frames = render_stroke_history(&document)?;
        history = Some((dir.join(stem), frames.len()));
        artifacts.extend(
            frames
                .into_iter()
                .enumerate()
                .map(|(k, svg)| (dir.join(stem).join(format!("{}.svg", k)), svg)),
        );
    }
    if let Some(dir) = &layout.json_dir {
        artifacts.push((
            dir.join(format!("{}.json", stem)),
            serde_json::to_string_pretty(&document)?,
        ));
    }

    let mut outputs = Vec::with_capacity(artifacts.len());
    for (path, contents) in artifacts {
        write_atomically(&path, &contents)?;
        outputs.push(path);
    }
    if let Some((frame_dir, count)) = history {
        remove_stale_frames(&frame_dir, count)?;
    }

    Ok(ConvertedFile {
        strokes: document.strokes.len(),
        points: document.point_count(),
        outputs,
    })
}

/// Reads a capture XML file and writes its cumulative replay frames as
/// `out_dir/<k>.svg`.
pub fn reconstruct_file(xml: &Path, out_dir: &Path) -> Result<ReconstructionReport> {
    let contents = fs::read_to_string(xml).map_err(|source| CaptureError::io(xml, source))?;
    let document = parse_capture_document(&contents)?;
    let (frames, report) = reconstruct_stroke_svgs(&document)?;

    for (k, svg) in frames.iter().enumerate() {
        write_atomically(&out_dir.join(format!("{}.svg", k)), svg)?;
    }
    remove_stale_frames(out_dir, frames.len())?;
    info!(
        "{}: reconstructed {} strokes ({} points) into {}",
        xml.display(),
        frames.len(),
        report.total_points(),
        out_dir.display()
    );
    Ok(report)
}

/// Deletes replay frames `<k>.svg` with `k >= count` left in `dir` by an earlier run.
///
/// Other files in `dir` are left alone.
fn remove_stale_frames(dir: &Path, count: usize) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(source) => return Err(CaptureError::io(dir, source)),
    };
    for entry in entries {
        let path = entry.map_err(|source| CaptureError::io(dir, source))?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("svg") {
            continue;
        }
        let index = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<usize>().ok());
        if matches!(index, Some(k) if k >= count) {
            fs::remove_file(&path).map_err(|source| CaptureError::io(&path, source))?;
            debug!("[remove_stale_frames] Removed {}", path.display());
        }
    }
    Ok(())
}

/// Writes `contents` to a temporary sibling of `path`, then renames it into place.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CaptureError::InvalidInput(format!("no file name in {}", path.display())))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CaptureError::io(parent, source))?;
    }

    let tmp = path.with_file_name(format!(".{}.tmp", file_name));
    fs::write(&tmp, contents).map_err(|source| CaptureError::io(&tmp, source))?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(CaptureError::io(path, source));
    }
    debug!("[write_atomically] Wrote {}", path.display());
    Ok(())
}
