use super::timing::TimingBreakdown;
use crate::boundaries::BoundarySolution;
use crate::columns::{ColumnDescriptor, ColumnGrid, PixelBounds};
use crate::days::DaySlot;
use crate::detector::DetectionStage;
use crate::error::DetectionFailure;
use crate::header::HeaderBand;
use serde::Serialize;

/// Result produced by [`ColumnDetector::detect_with_diagnostics`](crate::ColumnDetector).
#[derive(Clone, Debug)]
pub struct DetectionReport {
    pub result: Result<ColumnGrid, DetectionFailure>,
    pub trace: PipelineTrace,
}

impl DetectionReport {
    pub fn found(&self) -> bool {
        self.result.is_ok()
    }
}

/// Stage-by-stage record of one detector run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    /// Last stage completed successfully.
    pub reached: DetectionStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<DetectionFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderBand>,
    pub horizontal_lines: Vec<usize>,
    pub scan_rows: usize,
    pub vertical_lines: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<BoundarySolution>,
    pub columns: Vec<ColumnSummary>,
}

impl PipelineTrace {
    pub fn new(input: InputDescriptor) -> Self {
        Self {
            input,
            timings: TimingBreakdown::default(),
            reached: DetectionStage::Start,
            failure: None,
            header: None,
            horizontal_lines: Vec::new(),
            scan_rows: 0,
            vertical_lines: Vec::new(),
            boundaries: None,
            columns: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Column descriptor without its pixels.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSummary {
    pub day: DaySlot,
    pub physical_index: usize,
    pub bounds: PixelBounds,
    pub colored_ratio: f32,
    pub has_content: bool,
}

impl From<&ColumnDescriptor> for ColumnSummary {
    fn from(col: &ColumnDescriptor) -> Self {
        Self {
            day: col.day,
            physical_index: col.physical_index,
            bounds: col.bounds,
            colored_ratio: col.colored_ratio,
            has_content: col.has_content,
        }
    }
}
