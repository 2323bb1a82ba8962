//! Serializable diagnostics returned alongside detection results.
//!
//! `DetectionReport` is the entry point: it pairs the detector result with a
//! `PipelineTrace` recording what every stage saw, so a failed run on a real
//! photograph can be inspected without re-running with extra logging.

pub mod pipeline;
pub mod timing;

pub use pipeline::{ColumnSummary, DetectionReport, InputDescriptor, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
