#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod columns;
pub mod days;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod recognizer;

// Stage internals – public for tools and tuning, but less stable.
pub mod boundaries;
pub mod config;
pub mod header;
pub mod pixel;
pub mod rules;

// --- High-level re-exports -------------------------------------------------

pub use crate::columns::{ColumnDescriptor, ColumnGrid, PixelBounds};
pub use crate::days::{DayLayout, DaySlot, TableDirection};
pub use crate::detector::{ColumnDetector, DetectionStage, DetectorParams};
pub use crate::diagnostics::{DetectionReport, PipelineTrace};
pub use crate::error::{DetectionFailure, GridError};
pub use crate::recognizer::{read_schedule, ColumnRecognizer, RawEntry, ReadOutcome, ScheduleEntry};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use timetable_grid::prelude::*;
///
/// # fn main() {
/// let photo = RgbImageBuf::filled(640, 480, [255, 255, 255]);
/// let detector = ColumnDetector::new(DetectorParams::default());
/// let report = detector.detect_with_diagnostics(photo.as_view());
/// println!("found={} total_ms={:.3}", report.found(), report.trace.timings.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, RgbImageBuf};
    pub use crate::{ColumnDetector, ColumnGrid, DaySlot, DetectionFailure, DetectorParams};
}
