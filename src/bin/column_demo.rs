use std::env;
use std::path::Path;
use timetable_grid::config::columns::{self, RuntimeConfig};
use timetable_grid::diagnostics::DetectionReport;
use timetable_grid::image::io::{load_rgb_image, save_rgb_png, write_json_file};
use timetable_grid::ColumnDetector;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = columns::load_config(Path::new(&config_path))?;

    let photo = load_rgb_image(&config.input_path).map_err(|e| e.to_string())?;
    let detector = ColumnDetector::new(config.params.clone());
    let report = detector.detect_with_diagnostics(photo.as_view());
    // The decoded photograph is no longer needed once the crops exist.
    drop(photo);

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report.trace).map_err(|e| e.to_string())?;
        println!("\nJSON report written to {}", path.display());
    }

    save_crops(&config, &report)?;
    Ok(())
}

fn usage() -> String {
    "Usage: column_demo <config.json>".to_string()
}

fn print_text_summary(report: &DetectionReport) {
    let trace = &report.trace;
    println!("Detection summary");
    println!("  input: {}x{}", trace.input.width, trace.input.height);
    println!("  reached: {:?}", trace.reached);
    match &trace.header {
        Some(h) => println!("  header: rows {}..{}", h.top, h.bottom),
        None => println!("  header: not found"),
    }
    println!("  horizontal lines: {:?}", trace.horizontal_lines);
    println!(
        "  vertical lines: {:?} (scan rows={})",
        trace.vertical_lines, trace.scan_rows
    );
    if let Some(sol) = &trace.boundaries {
        println!(
            "  boundaries: {:?} time={}% ({}px) day_width={:.2} mean_error={:.2}px",
            sol.boundaries, sol.time_percent, sol.time_width, sol.day_width, sol.mean_error_px
        );
    }

    match &report.result {
        Ok(grid) => {
            println!("\nColumns (left to right)");
            for col in &grid.columns {
                println!(
                    "  [{}] {:<9} {} x={}..{} colored={:.3} content={}",
                    col.physical_index,
                    col.day.english_name(),
                    col.day.arabic_name(),
                    col.bounds.x_left,
                    col.bounds.x_right,
                    col.colored_ratio,
                    col.has_content
                );
            }
        }
        Err(failure) => println!("\nDetection failed: {failure} -> use fallback extraction"),
    }

    let timings = trace
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\nTimings (ms): {} total={:.3}",
        timings, trace.timings.total_ms
    );
}

fn save_crops(config: &RuntimeConfig, report: &DetectionReport) -> Result<(), String> {
    let (Some(dir), Ok(grid)) = (&config.output.crops_dir, &report.result) else {
        return Ok(());
    };
    for col in &grid.columns {
        let name = format!(
            "col{}_{}.png",
            col.physical_index,
            col.day.english_name().to_lowercase()
        );
        save_rgb_png(&col.image, &dir.join(name)).map_err(|e| e.to_string())?;
    }
    println!("Column crops written to {}", dir.display());
    Ok(())
}
