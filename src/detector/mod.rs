//! Timetable column detector.
//!
//! Overview
//! - Locates the header band of header-blue rows.
//! - Finds horizontal rule lines below the header by per-row gray density,
//!   then vertical rule lines by per-column gray density sampled only around
//!   the horizontal lines.
//! - Solves eight day-column dividers from the outer grid edges and the
//!   interior vertical lines with a small search over the time-column width.
//! - Crops the seven day columns, assigns each its day from the fixed table
//!   layout and flags the ones holding coloured class blocks.
//!
//! Stages run in the order of [`DetectionStage`]. A stage that lacks
//! evidence ends the run with a [`DetectionFailure`](crate::DetectionFailure),
//! which callers treat as "use the fallback path".
//!
//! Modules
//! - [`params`] – immutable configuration passed at construction.
//! - `pipeline` – the [`ColumnDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::DetectorParams;
pub use pipeline::ColumnDetector;

use serde::Serialize;

/// Detector state; each variant is reached only after the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectionStage {
    Start,
    HeaderFound,
    HorizontalLinesFound,
    VerticalLinesFound,
    BoundariesSolved,
    ColumnsExtracted,
}
