use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use gray_methods::io::{CompareConfig, CompareReport, MethodRange, TimingsMs};
use gray_methods::{compare, load_pixel_grid, render_figure, LoadError};
use gray_methods_core::{init_with_level, level_from_verbosity};
use log::info;

/// Convert an image to grayscale with the lightness, average, and luminosity
/// methods and write a labeled side-by-side figure.
#[derive(Debug, Parser)]
#[command(name = "gray-methods", version, about)]
struct Cli {
    /// Input image (any RGB-decodable raster format).
    image: Option<PathBuf>,

    /// Output PNG for the composed figure; defaults next to the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file; command-line paths override its entries.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON run report to this path.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Figure caption.
    #[arg(long)]
    caption: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = init_with_level(level_from_verbosity(cli.verbose));

    if let Err(err) = run(cli) {
        if let Some(LoadError::InputNotFound { path }) = err.downcast_ref::<LoadError>() {
            eprintln!("error: input image '{path}' was not found");
        } else {
            eprintln!("error: {err}");
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = match &cli.config {
        Some(path) => CompareConfig::load_json(path)?,
        None => CompareConfig::new("leaves.jpg"),
    };
    if let Some(image) = &cli.image {
        cfg.image_path = image.display().to_string();
    }
    if let Some(output) = &cli.output {
        cfg.output_path = Some(output.display().to_string());
    }
    if let Some(report) = &cli.report {
        cfg.report_path = Some(report.display().to_string());
    }
    if let Some(caption) = cli.caption {
        cfg.caption = caption;
    }

    let t_total = Instant::now();

    let t_load = Instant::now();
    let grid = load_pixel_grid(&cfg.image_path)?;
    let load_image_ms = t_load.elapsed().as_millis() as u64;
    info!(
        "loaded {} ({}x{})",
        cfg.image_path,
        grid.width(),
        grid.height()
    );

    let t_convert = Instant::now();
    let set = compare(&grid);
    let convert_ms = t_convert.elapsed().as_millis() as u64;

    let t_render = Instant::now();
    let figure = render_figure(&grid, &set, &cfg.caption, &cfg.layout)?;
    let output_path = cfg.output_path();
    gray_methods_montage::write_png(&output_path, &figure)?;
    let render_ms = t_render.elapsed().as_millis() as u64;

    if let Some(report_path) = &cfg.report_path {
        let methods = set
            .maps()
            .iter()
            .map(|(method, map)| {
                let (min, max) = map.intensity_range();
                MethodRange {
                    method: *method,
                    min,
                    max,
                }
            })
            .collect();

        let report = CompareReport {
            image_path: cfg.image_path.clone(),
            output_path: output_path.display().to_string(),
            width: grid.width(),
            height: grid.height(),
            methods,
            timings_ms: TimingsMs {
                load_image: load_image_ms,
                convert: convert_ms,
                render: render_ms,
                total: t_total.elapsed().as_millis() as u64,
            },
        };
        report.write_json(report_path)?;
        info!("wrote report JSON to {report_path}");
    }

    Ok(())
}
