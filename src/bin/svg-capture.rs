use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use svg_capture_tools::batch::{convert_directory, reconstruct_file, write_atomically, BatchLayout};
use svg_capture_tools::svg_meta::{
    lines_polylines_and_polygons_to_paths, svg_page_size_from_str, PageSizeOptions,
};
use svg_capture_tools::ConversionOptions;

fn usage() -> &'static str {
    "svg-capture\n\
\n\
USAGE:\n\
  svg-capture convert <svg-dir> --xml <dir> [--svg <dir>] [--history <dir>] [--json <dir>] [--config <file.json>] [--samples <n>] [--width <w>] [--no-normalize]\n\
  svg-capture reconstruct <capture.xml> --out <dir>\n\
  svg-capture page-size <file.svg> [--dpi <n>] [--no-illustrator-heuristic]\n\
  svg-capture normalize <file.svg> [--out <file.svg>]\n\
  svg-capture diff <base.xml> <changed.xml>\n\
\n\
NOTES:\n\
  - Logging defaults to info; set RUST_LOG to change it.\n\
  - convert exits with status 1 when any input file failed.\n\
"
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Convert,
    Reconstruct,
    PageSize,
    Normalize,
    Diff,
}

#[derive(Debug, Default)]
struct Args {
    command: Option<Command>,
    inputs: Vec<String>,
    xml_dir: Option<PathBuf>,
    svg_dir: Option<PathBuf>,
    history_dir: Option<PathBuf>,
    json_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    samples: Option<usize>,
    width: Option<f64>,
    no_normalize: bool,
    out: Option<PathBuf>,
    dpi: Option<f64>,
    no_illustrator_heuristic: bool,
}

fn parse_args(argv: &[String]) -> Result<Args> {
    let mut args = Args::default();
    let mut it = argv.iter().skip(1);

    while let Some(a) = it.next() {
        let mut value = |flag: &str| {
            it.next()
                .cloned()
                .with_context(|| format!("{} needs a value\n\n{}", flag, usage()))
        };
        match a.as_str() {
            "--help" | "-h" => bail!("{}", usage()),
            "convert" if args.command.is_none() => args.command = Some(Command::Convert),
            "reconstruct" if args.command.is_none() => args.command = Some(Command::Reconstruct),
            "page-size" if args.command.is_none() => args.command = Some(Command::PageSize),
            "normalize" if args.command.is_none() => args.command = Some(Command::Normalize),
            "diff" if args.command.is_none() => args.command = Some(Command::Diff),
            "--xml" => args.xml_dir = Some(value(a.as_str())?.into()),
            "--svg" => args.svg_dir = Some(value(a.as_str())?.into()),
            "--history" => args.history_dir = Some(value(a.as_str())?.into()),
            "--json" => args.json_dir = Some(value(a.as_str())?.into()),
            "--config" => args.config = Some(value(a.as_str())?.into()),
            "--out" => args.out = Some(value(a.as_str())?.into()),
            "--samples" => {
                let v = value(a.as_str())?;
                args.samples = Some(v.parse().with_context(|| format!("invalid --samples '{}'", v))?);
            }
            "--width" => {
                let v = value(a.as_str())?;
                args.width = Some(v.parse().with_context(|| format!("invalid --width '{}'", v))?);
            }
            "--dpi" => {
                let v = value(a.as_str())?;
                args.dpi = Some(v.parse().with_context(|| format!("invalid --dpi '{}'", v))?);
            }
            "--no-normalize" => args.no_normalize = true,
            "--no-illustrator-heuristic" => args.no_illustrator_heuristic = true,
            other if other.starts_with('-') => bail!("unknown option {}\n\n{}", other, usage()),
            input => args.inputs.push(input.to_string()),
        }
    }

    Ok(args)
}

/// Returns the single positional argument, or a usage error.
fn single_input(args: &Args) -> Result<&Path> {
    match args.inputs.as_slice() {
        [input] => Ok(Path::new(input)),
        _ => bail!("expected exactly one input\n\n{}", usage()),
    }
}

fn conversion_options(args: &Args) -> Result<ConversionOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            ConversionOptions::from_json_str(&json)
                .with_context(|| format!("invalid options in {}", path.display()))?
        }
        None => ConversionOptions::default(),
    };
    if let Some(samples) = args.samples {
        options.samples_per_segment = samples;
    }
    if let Some(width) = args.width {
        options.canvas_width = width;
    }
    if args.no_normalize {
        options.normalize_shapes = false;
    }
    Ok(options)
}

/// Returns whether every input succeeded.
fn run_convert(args: &Args) -> Result<bool> {
    let input_dir = single_input(args)?;
    let Some(xml_dir) = &args.xml_dir else {
        bail!("convert needs --xml <dir>\n\n{}", usage());
    };

    let mut layout = BatchLayout::new(input_dir, xml_dir);
    layout.svg_dir = args.svg_dir.clone();
    layout.stroke_history_dir = args.history_dir.clone();
    layout.json_dir = args.json_dir.clone();

    let report = convert_directory(&layout, &conversion_options(args)?)?;
    for (name, err) in report.failures() {
        eprintln!("FAILED {}: {}", name, err);
    }
    println!(
        "{} converted, {} failed",
        report.succeeded(),
        report.failed()
    );
    Ok(!report.has_failures())
}

fn run_reconstruct(args: &Args) -> Result<()> {
    let xml = single_input(args)?;
    let Some(out_dir) = &args.out else {
        bail!("reconstruct needs --out <dir>\n\n{}", usage());
    };
    let report = reconstruct_file(xml, out_dir)?;
    for (index, count) in report.points_per_stroke.iter().enumerate() {
        println!("Stroke {}: {} points", index, count);
    }
    Ok(())
}

fn run_page_size(args: &Args) -> Result<()> {
    let path = single_input(args)?;
    let svg = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let options = PageSizeOptions {
        dpi: args.dpi,
        use_illustrator_heuristic: !args.no_illustrator_heuristic,
    };
    let size = svg_page_size_from_str(&svg, &options)?;
    println!("{} x {} mm", size.width_mm, size.height_mm);
    Ok(())
}

fn run_normalize(args: &Args) -> Result<()> {
    let path = single_input(args)?;
    let svg = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let normalized = lines_polylines_and_polygons_to_paths(&svg)?;
    match &args.out {
        Some(out) => write_atomically(out, &normalized)?,
        None => print!("{}", normalized),
    }
    Ok(())
}

#[cfg(feature = "diff")]
fn run_diff(args: &Args) -> Result<bool> {
    use svg_capture_tools::{compare_capture_documents, parse_capture_document};

    let [base, changed] = args.inputs.as_slice() else {
        bail!("diff needs two capture files\n\n{}", usage());
    };
    let read = |path: &str| -> Result<_> {
        let xml = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
        parse_capture_document(&xml).with_context(|| format!("invalid capture document {}", path))
    };
    let report = compare_capture_documents(&read(base)?, &read(changed)?, base, changed)?;
    print!("{}", report.markdown_report);
    Ok(!report.has_differences)
}

#[cfg(not(feature = "diff"))]
fn run_diff(_args: &Args) -> Result<bool> {
    bail!("svg-capture was built without the `diff` feature");
}

fn run(args: &Args) -> Result<bool> {
    match args.command {
        Some(Command::Convert) => run_convert(args),
        Some(Command::Reconstruct) => run_reconstruct(args).map(|_| true),
        Some(Command::PageSize) => run_page_size(args).map(|_| true),
        Some(Command::Normalize) => run_normalize(args).map(|_| true),
        Some(Command::Diff) => run_diff(args),
        None => bail!("{}", usage()),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let argv: Vec<String> = std::env::args().collect();
    let result = parse_args(&argv).and_then(|args| run(&args));
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(2);
        }
    }
}
