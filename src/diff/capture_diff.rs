use crate::converters::capture::format_coord;
use crate::converters::reconstruct::write_reconstructed_path_data;
use crate::models::StrokeDocument;
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;

/// Holds the results of a capture-document comparison, formatted as a Markdown report.
#[derive(Debug)]
pub struct CaptureDiffReport {
    pub markdown_report: String,
    pub has_differences: bool,
}

/// One line for the canvas, then one reconstructed path line per stroke.
fn document_lines(document: &StrokeDocument) -> Result<String, std::fmt::Error> {
    let canvas = document.canvas();
    let mut text = String::new();
    writeln!(
        text,
        "canvas {} x {}",
        format_coord(canvas.width),
        format_coord(canvas.height)
    )?;
    for (index, stroke) in document.strokes.iter().enumerate() {
        let mut d = String::new();
        write_reconstructed_path_data(&mut d, stroke)?;
        writeln!(
            text,
            "stroke {} ({} points, {}): {}",
            index,
            stroke.points.len(),
            stroke.colour,
            d.trim_end()
        )?;
    }
    Ok(text)
}

/// Compares two capture documents stroke by stroke and generates a Markdown report.
///
/// # Arguments
/// * `base` - The reference document.
/// * `changed` - The document compared against it.
/// * `base_name` - Name used for `base` in the report and diff header.
/// * `changed_name` - Name used for `changed` in the report and diff header.
///
/// # Returns
/// A `CaptureDiffReport` with the Markdown text and whether any stroke differs.
pub fn compare_capture_documents(
    base: &StrokeDocument,
    changed: &StrokeDocument,
    base_name: &str,
    changed_name: &str,
) -> Result<CaptureDiffReport, std::fmt::Error> {
    let base_text = document_lines(base)?;
    let changed_text = document_lines(changed)?;
    let has_differences = base_text != changed_text;
    let mut report = String::new();

    writeln!(report, "# Summary of Capture Changes\n")?;
    writeln!(report, "---")?;
    writeln!(report, "## Comparison: `{}` vs `{}`\n", base_name, changed_name)?;
    writeln!(report, "| | `{}` | `{}` |", base_name, changed_name)?;
    writeln!(report, "|---|---|---|")?;
    writeln!(
        report,
        "| Strokes | {} | {} |",
        base.strokes.len(),
        changed.strokes.len()
    )?;
    writeln!(
        report,
        "| Points | {} | {} |\n",
        base.point_count(),
        changed.point_count()
    )?;

    if has_differences {
        let diff = TextDiff::from_lines(&base_text, &changed_text);
        let (mut added, mut removed) = (0, 0);
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => added += 1,
                ChangeTag::Delete => removed += 1,
                ChangeTag::Equal => (),
            }
        }

        writeln!(report, "> Capture documents differ.")?;
        writeln!(report, "> - Lines Added: {}", added)?;
        writeln!(report, "> - Lines Removed: {}\n", removed)?;

        let hunks = diff
            .unified_diff()
            .header(base_name, changed_name)
            .context_radius(2)
            .to_string();
        writeln!(report, "```diff")?;
        report.push_str(&hunks);
        if !hunks.ends_with('\n') {
            report.push('\n');
        }
        writeln!(report, "```")?;
    } else {
        writeln!(report, "> No differences found between capture documents.")?;
    }

    writeln!(report, "\n---")?;

    Ok(CaptureDiffReport {
        markdown_report: report,
        has_differences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Stroke, WhiteboardDescription};

    fn document(last: Point) -> StrokeDocument {
        StrokeDocument {
            description: WhiteboardDescription {
                sensor_location: "top_left".to_string(),
                diagonally_opposite: Point::new(400.0, 200.0),
                vertically_opposite: Point::new(0.0, 200.0),
                horizontally_opposite: Point::new(400.0, 0.0),
            },
            strokes: vec![
                Stroke {
                    colour: "black".to_string(),
                    points: vec![Point::new(0.0, 200.0), Point::new(100.0, 150.0)],
                },
                Stroke {
                    colour: "black".to_string(),
                    points: vec![Point::new(300.0, 50.0), last],
                },
            ],
        }
    }

    #[test]
    fn test_capture_diff_no_changes() {
        let doc = document(Point::new(400.0, 0.0));
        let result = compare_capture_documents(&doc, &doc, "a.xml", "b.xml").expect("report");
        assert!(!result.has_differences);
        assert!(result.markdown_report.contains("# Summary of Capture Changes"));
        assert!(result.markdown_report.contains("## Comparison: `a.xml` vs `b.xml`"));
        assert!(result.markdown_report.contains("| Strokes | 2 | 2 |"));
        assert!(result
            .markdown_report
            .contains("> No differences found between capture documents."));
        assert!(result.markdown_report.ends_with("---\n"));
    }

    #[test]
    fn test_capture_diff_with_changes() {
        let base = document(Point::new(400.0, 0.0));
        let changed = document(Point::new(390.5, 10.0));
        let result =
            compare_capture_documents(&base, &changed, "base.xml", "changed.xml").expect("report");
        let report = &result.markdown_report;

        assert!(result.has_differences);
        assert!(report.contains("> - Lines Added: 1"));
        assert!(report.contains("> - Lines Removed: 1"));
        assert!(report
            .lines()
            .any(|line| line.starts_with("--- ") && line.ends_with("base.xml")));
        assert!(report
            .lines()
            .any(|line| line.starts_with("+++ ") && line.ends_with("changed.xml")));
        assert!(report.contains("-stroke 1 (2 points, black): M300 50 L 400 0\n"));
        assert!(report.contains("+stroke 1 (2 points, black): M300 50 L 390.5 10\n"));
        assert!(report.contains(" stroke 0 (2 points, black): M0 200 L 100 150\n"));
        assert!(report.ends_with("---\n"));
    }
}
