use std::fs;
use svg_capture_tools::batch::{convert_directory, reconstruct_file, BatchLayout, FileOutcome};
use svg_capture_tools::{parse_capture_document, CaptureError, ConversionOptions};

const GOOD_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50">
  <path d="M 60 10 L 100 50"/>
  <path d="M 0 0 C 10 40, 30 40, 50 25"/>
</svg>"#;

const BAD_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <path d="M 0 0 L 10 10"/>
  <path d="M 1 q"/>
</svg>"#;

#[test]
fn test_batch_collects_and_continues() {
    let root = tempfile::tempdir().expect("tempdir");
    let input = root.path().join("svg");
    fs::create_dir_all(&input).expect("input dir");
    fs::write(input.join("good.svg"), GOOD_SVG).expect("write good");
    fs::write(input.join("bad.svg"), BAD_SVG).expect("write bad");
    fs::write(input.join("notes.txt"), "not an svg").expect("write notes");

    let layout = BatchLayout::new(&input, root.path().join("xml"))
        .with_svg_dir(root.path().join("new"))
        .with_stroke_history_dir(root.path().join("history"))
        .with_json_dir(root.path().join("json"));
    let options = ConversionOptions::default().with_samples_per_segment(5);

    let report = convert_directory(&layout, &options).expect("batch should run");

    let names: Vec<_> = report.files.keys().cloned().collect();
    assert_eq!(names, vec!["bad.svg", "good.svg"]);
    assert_eq!(report.succeeded(), 1);
    assert!(report.has_failures());

    let (failed_name, err) = report.failures().next().expect("one failure");
    assert_eq!(failed_name, "bad.svg");
    assert!(matches!(err, CaptureError::Conversion(_)));
    assert!(!root.path().join("xml").join("bad.xml").exists());

    let FileOutcome::Converted(converted) = &report.files["good.svg"] else {
        panic!("good.svg should convert");
    };
    assert_eq!(converted.strokes, 2);
    // Capture XML, normalized SVG, two history frames and JSON.
    assert_eq!(converted.outputs.len(), 5);
    for output in &converted.outputs {
        assert!(output.exists(), "{} missing", output.display());
    }
    assert!(root.path().join("history").join("good").join("1.svg").exists());

    let xml = fs::read_to_string(root.path().join("xml").join("good.xml")).expect("xml");
    let document = parse_capture_document(&xml).expect("capture should parse");
    assert_eq!(document.strokes.len(), 2);
    assert_eq!(document.point_count(), converted.points);

    let json = fs::read_to_string(root.path().join("json").join("good.json")).expect("json");
    let from_json: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(from_json["strokes"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_reconstruct_file_writes_replay_frames() {
    let root = tempfile::tempdir().expect("tempdir");
    let input = root.path().join("svg");
    fs::create_dir_all(&input).expect("input dir");
    fs::write(input.join("good.svg"), GOOD_SVG).expect("write good");

    let layout = BatchLayout::new(&input, root.path().join("xml"));
    let report = convert_directory(&layout, &ConversionOptions::default()).expect("batch");
    assert!(!report.has_failures());

    let check_dir = root.path().join("check");
    let reconstruction = reconstruct_file(&root.path().join("xml").join("good.xml"), &check_dir)
        .expect("reconstruction should succeed");

    // One start point plus ten samples of the single drawn segment per stroke.
    assert_eq!(reconstruction.points_per_stroke, vec![11, 11]);
    let last = fs::read_to_string(check_dir.join("1.svg")).expect("frame");
    assert_eq!(last.matches('M').count(), 2);
    assert!(last.contains(r#"viewBox="0,0,400,200""#));
}

#[test]
fn test_rerun_drops_frames_of_removed_strokes() {
    let root = tempfile::tempdir().expect("tempdir");
    let input = root.path().join("svg");
    fs::create_dir_all(&input).expect("input dir");
    let history = root.path().join("history");
    let layout =
        BatchLayout::new(&input, root.path().join("xml")).with_stroke_history_dir(&history);

    fs::write(input.join("drawing.svg"), GOOD_SVG).expect("write first version");
    convert_directory(&layout, &ConversionOptions::default()).expect("first run");
    assert!(history.join("drawing").join("1.svg").exists());

    let single_stroke = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <path d="M 0 0 L 100 50"/>
</svg>"#;
    fs::write(input.join("drawing.svg"), single_stroke).expect("write second version");
    let report = convert_directory(&layout, &ConversionOptions::default()).expect("second run");
    assert!(!report.has_failures());

    assert!(history.join("drawing").join("0.svg").exists());
    assert!(!history.join("drawing").join("1.svg").exists());
}
