use mser_detector::config::volume::load_config;
use mser_detector::image::io::{coverage_to_gray, load_raw_volume, write_json_file, write_raw_volume};
use mser_detector::{membership_counts, Grid, MserDetector};
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

    let volume = match &config.input {
        Some(path) => load_raw_volume(path, config.shape)?,
        None => synthetic_volume(config.shape),
    };
    let grid = Grid::new(&volume, config.shape, config.connectivity.build())
        .map_err(|e| e.to_string())?;

    let detector = MserDetector::new(config.params);
    let report = detector
        .detect_with_diagnostics(&grid)
        .map_err(|e| e.to_string())?;
    println!("{}", report.trace.summary());
    for region in &report.regions {
        let coords = grid
            .coords(region.representative)
            .map_err(|e| e.to_string())?;
        println!(
            "  seed={:?} level={} size={} score={:.3}",
            coords, region.level, region.size, region.score
        );
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(path) = &config.output.coverage_raw {
        let counts = membership_counts(&grid, &report.regions).map_err(|e| e.to_string())?;
        write_raw_volume(path, &coverage_to_gray(&counts))?;
        println!("Coverage volume written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: mser3d_demo <config.json>".to_string()
}

/// Sum of three Gaussian blobs scaled to 0..=255.
fn synthetic_volume(shape: [usize; 3]) -> Vec<u8> {
    let [w, h, d] = shape;
    let centers = [
        ([0.3, 0.3, 0.3], 0.12),
        ([0.7, 0.6, 0.4], 0.08),
        ([0.5, 0.5, 0.75], 0.1),
    ];
    let mut field = Vec::with_capacity(w * h * d);
    for z in 0..d {
        for y in 0..h {
            for x in 0..w {
                let p = [
                    x as f32 / w.max(1) as f32,
                    y as f32 / h.max(1) as f32,
                    z as f32 / d.max(1) as f32,
                ];
                let v: f32 = centers
                    .iter()
                    .map(|(c, sigma)| {
                        let r2: f32 = (0..3).map(|k| (p[k] - c[k]).powi(2)).sum();
                        (-r2 / (2.0 * sigma * sigma)).exp()
                    })
                    .sum();
                field.push(v);
            }
        }
    }
    let max = field.iter().copied().fold(0.0f32, f32::max).max(f32::EPSILON);
    field
        .iter()
        .map(|&v| (v / max * 255.0).round() as u8)
        .collect()
}
