use lane_convergence::config::tracking;
use lane_convergence::diagnostics::TrackingReport;
use lane_convergence::io::{load_frames, write_json_file};
use lane_convergence::logger;
use lane_convergence::ConvergenceDetector;
use log::{debug, info};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logger::init_with_level(logger::level_from_env())
        .map_err(|e| format!("Failed to install logger: {e}"))?;

    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = tracking::load_config(Path::new(&config_path))?;
    let frames = load_frames(&config.input)?;
    info!(
        "Loaded {} frames from {}",
        frames.len(),
        config.input.display()
    );

    let params = config.detector.resolve();
    debug!("detector params: {params:?}");
    let mut detector = ConvergenceDetector::new(params);

    let mut report = TrackingReport::default();
    for frame in &frames {
        let frame_report = detector.process_detailed(frame);
        if frame_report.result.confirmed {
            debug!(
                "frame {} tracking at {:?}",
                frame_report.frame_index, frame_report.result.point
            );
        }
        report.push(frame_report);
    }

    write_json_file(&config.output.result_json, &report)?;

    println!(
        "Processed {} frames: {} with a convergence point, {} confirmed (first at {})",
        report.frame_count,
        report.frames_with_point,
        report.confirmed_frames,
        report
            .first_confirmed_frame
            .map_or_else(|| "-".to_string(), |i| i.to_string())
    );
    println!(
        "Saved tracking report to {}",
        config.output.result_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: track_demo <config.json>".to_string()
}
