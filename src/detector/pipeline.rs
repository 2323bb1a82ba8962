//! Detector pipeline driving column detection end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use timetable_grid::{ColumnDetector, DetectorParams};
//! use timetable_grid::image::ImageRgb8;
//!
//! # fn example(photo: ImageRgb8) {
//! let detector = ColumnDetector::new(DetectorParams::default());
//! match detector.detect(photo) {
//!     Ok(grid) => println!("{} active columns", grid.active_columns().count()),
//!     Err(failure) => println!("falling back: {failure}"),
//! }
//! # }
//! ```
use super::params::DetectorParams;
use super::DetectionStage;
use crate::boundaries::solve_boundaries;
use crate::columns::{extract_columns, ColumnGrid};
use crate::days::DayLayout;
use crate::diagnostics::{ColumnSummary, DetectionReport, InputDescriptor, PipelineTrace};
use crate::diagnostics::timing::elapsed_ms;
use crate::error::DetectionFailure;
use crate::header::locate_header;
use crate::image::ImageRgb8;
use crate::rules::{expand_scan_rows, find_horizontal_lines, find_vertical_lines};
use log::{debug, info};
use std::time::Instant;

/// Stateless detector: every call works only on the image it is given, so
/// one instance can serve many threads.
#[derive(Clone, Debug)]
pub struct ColumnDetector {
    params: DetectorParams,
    layout: DayLayout,
}

impl ColumnDetector {
    pub fn new(params: DetectorParams) -> Self {
        let layout = params.layout();
        Self { params, layout }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    pub fn layout(&self) -> &DayLayout {
        &self.layout
    }

    /// Detect and crop the seven day columns. `Err` means the caller should
    /// use its fallback extraction path.
    pub fn detect(&self, image: ImageRgb8) -> Result<ColumnGrid, DetectionFailure> {
        self.detect_with_diagnostics(image).result
    }

    /// Run the detector and return the result with a stage-by-stage trace.
    pub fn detect_with_diagnostics(&self, image: ImageRgb8) -> DetectionReport {
        debug!("ColumnDetector::detect start w={} h={}", image.w, image.h);
        let total_start = Instant::now();
        let mut trace = PipelineTrace::new(InputDescriptor {
            width: image.w,
            height: image.h,
        });

        let result = self.run(&image, &mut trace);
        trace.timings.total_ms = elapsed_ms(total_start);
        match &result {
            Ok(grid) => info!(
                "ColumnDetector::detect boundaries={:?} time={}% active={} total_ms={:.3}",
                grid.boundaries(),
                grid.solution.time_percent,
                grid.active_columns().count(),
                trace.timings.total_ms
            ),
            Err(failure) => {
                debug!(
                    "ColumnDetector::detect failed after {:?}: {}",
                    failure.stage(),
                    failure
                );
                trace.failure = Some(failure.clone());
            }
        }
        DetectionReport { result, trace }
    }

    fn run(
        &self,
        image: &ImageRgb8,
        trace: &mut PipelineTrace,
    ) -> Result<ColumnGrid, DetectionFailure> {
        let params = &self.params;

        let start = Instant::now();
        let header = locate_header(image, &params.header);
        trace.timings.push_since("header", start);
        let header = header.ok_or(DetectionFailure::HeaderNotFound)?;
        trace.header = Some(header);
        trace.reached = DetectionStage::HeaderFound;

        let start = Instant::now();
        let horizontal = find_horizontal_lines(image, header.bottom, &params.rules);
        trace.timings.push_since("horizontal_lines", start);
        trace.horizontal_lines = horizontal.clone();
        let required = params.rules.horizontal.min_lines;
        if horizontal.len() < required {
            return Err(DetectionFailure::InsufficientHorizontalLines {
                found: horizontal.len(),
                required,
            });
        }
        trace.reached = DetectionStage::HorizontalLinesFound;

        let start = Instant::now();
        let scan_rows = expand_scan_rows(
            &horizontal,
            header.bottom,
            image.h,
            params.rules.scan_radius,
        );
        let vertical = find_vertical_lines(image, &scan_rows, &params.rules);
        trace.timings.push_since("vertical_lines", start);
        trace.scan_rows = scan_rows.len();
        trace.vertical_lines = vertical.clone();
        let required = params.rules.vertical.min_lines.max(2);
        if vertical.len() < required {
            return Err(DetectionFailure::InsufficientVerticalLines {
                found: vertical.len(),
                required,
            });
        }
        trace.reached = DetectionStage::VerticalLinesFound;

        let start = Instant::now();
        let solution = solve_boundaries(&vertical, &params.time_column)?;
        trace.timings.push_since("boundaries", start);
        trace.boundaries = Some(solution.clone());
        trace.reached = DetectionStage::BoundariesSolved;

        let start = Instant::now();
        let content_bottom = horizontal.last().copied().unwrap_or(image.h);
        let columns = extract_columns(
            image,
            &solution,
            header,
            content_bottom,
            &self.layout,
            &params.content,
        );
        trace.timings.push_since("columns", start);
        trace.columns = columns.iter().map(ColumnSummary::from).collect();
        trace.reached = DetectionStage::ColumnsExtracted;

        Ok(ColumnGrid {
            header,
            horizontal_lines: horizontal,
            vertical_lines: vertical,
            solution,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbImageBuf;

    const BLUE: [u8; 3] = [50, 80, 140];
    const GRAY: [u8; 3] = [150, 150, 150];

    #[test]
    fn blank_image_fails_at_header() {
        let img = RgbImageBuf::filled(200, 100, [255, 255, 255]);
        let report = ColumnDetector::new(DetectorParams::default())
            .detect_with_diagnostics(img.as_view());
        assert_eq!(report.result.unwrap_err(), DetectionFailure::HeaderNotFound);
        assert_eq!(report.trace.reached, DetectionStage::Start);
        assert_eq!(report.trace.failure, Some(DetectionFailure::HeaderNotFound));
    }

    #[test]
    fn zero_sized_image_is_a_detection_failure() {
        let img = RgbImageBuf::filled(0, 0, [0, 0, 0]);
        let result = ColumnDetector::new(DetectorParams::default()).detect(img.as_view());
        assert_eq!(result.unwrap_err(), DetectionFailure::HeaderNotFound);
    }

    #[test]
    fn two_horizontal_lines_are_not_enough() {
        let mut img = RgbImageBuf::filled(200, 100, [255, 255, 255]);
        img.fill_rect(0, 0, 200, 10, BLUE);
        img.fill_rect(0, 30, 200, 31, GRAY);
        img.fill_rect(0, 90, 200, 91, GRAY);
        let report = ColumnDetector::new(DetectorParams::default())
            .detect_with_diagnostics(img.as_view());
        assert_eq!(
            report.result.unwrap_err(),
            DetectionFailure::InsufficientHorizontalLines {
                found: 2,
                required: 3
            }
        );
        assert_eq!(report.trace.reached, DetectionStage::HeaderFound);
        assert!(report.trace.boundaries.is_none());
        assert!(report.trace.columns.is_empty());
    }

    #[test]
    fn rows_without_vertical_rules_fail_vertical_stage() {
        let mut img = RgbImageBuf::filled(200, 100, [255, 255, 255]);
        img.fill_rect(0, 0, 200, 10, BLUE);
        // Full-width rules but no vertical ones: every column collects
        // three gray hits out of fifteen scan rows.
        for y in [30, 60, 90] {
            img.fill_rect(0, y, 200, y + 1, GRAY);
        }
        let report = ColumnDetector::new(DetectorParams::default())
            .detect_with_diagnostics(img.as_view());
        assert_eq!(
            report.result.unwrap_err(),
            DetectionFailure::InsufficientVerticalLines {
                found: 0,
                required: 2
            }
        );
        assert_eq!(report.trace.reached, DetectionStage::HorizontalLinesFound);
        assert_eq!(report.trace.horizontal_lines, vec![30, 60, 90]);
    }
}
