use mser_detector::config::mser::{load_config, PolarityMode};
use mser_detector::diagnostics::PipelineTrace;
use mser_detector::image::io::{
    coverage_to_gray, load_grayscale_image, save_grayscale_u8, write_json_file, GrayImageU8,
};
use mser_detector::{membership_counts, Grid, MserDetector, SelectedRegion};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let loaded = load_grayscale_image(&config.input)?;
    let gray = if config.invert {
        loaded.inverted()
    } else {
        loaded
    };
    let view = gray.as_view();
    let grid =
        Grid::from_image(&view, config.connectivity.build()).map_err(|e| e.to_string())?;

    let polarities = match config.polarities {
        PolarityMode::Configured => vec![config.params.polarity],
        PolarityMode::Both => vec![
            config.params.polarity,
            config.params.polarity.inverted(),
        ],
    };

    let mut regions: Vec<SelectedRegion> = Vec::new();
    let mut traces: Vec<PipelineTrace> = Vec::new();
    for polarity in polarities {
        let detector = MserDetector::new(config.params.with_polarity(polarity));
        let report = detector
            .detect_with_diagnostics(&grid)
            .map_err(|e| e.to_string())?;
        println!("{}", report.trace.summary());
        regions.extend(report.regions);
        traces.push(report.trace);
    }
    println!(
        "{}x{} image, {} regions",
        gray.width(),
        gray.height(),
        regions.len()
    );

    if let Some(path) = &config.output.report_json {
        let summary = DemoReport {
            width: gray.width(),
            height: gray.height(),
            regions: &regions,
            traces: &traces,
        };
        write_json_file(path, &summary)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(path) = &config.output.coverage_image {
        let counts = membership_counts(&grid, &regions).map_err(|e| e.to_string())?;
        let coverage = GrayImageU8::new(gray.width(), gray.height(), coverage_to_gray(&counts));
        save_grayscale_u8(&coverage, path)?;
        println!("Coverage image written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: mser_demo <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoReport<'a> {
    width: usize,
    height: usize,
    regions: &'a [SelectedRegion],
    traces: &'a [PipelineTrace],
}
