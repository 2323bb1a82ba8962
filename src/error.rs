//! Error types for timetable grid detection.
//!
//! Two types reflect two failure modes:
//!
//! * [`GridError`] is fatal: the input could not be decoded, or an artifact
//!   could not be written. There is no partial result.
//! * [`DetectionFailure`] is non-fatal: a pipeline stage did not find enough
//!   evidence. It tells the caller to take its fallback extraction path and
//!   is never escalated to a process error.

use crate::detector::DetectionStage;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors: undecodable input and artifact I/O.
#[derive(Debug, Error)]
pub enum GridError {
    /// The image bytes could not be parsed.
    #[error("Failed to decode image {source_name}: {source}")]
    Decode {
        source_name: String,
        #[source]
        source: image::ImageError,
    },

    /// Encoding an image for output failed.
    #[error("Failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Staged detection failure; the caller should fall back.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetectionFailure {
    #[error("no header band found")]
    HeaderNotFound,

    #[error("insufficient horizontal lines: found {found}, need {required}")]
    InsufficientHorizontalLines { found: usize, required: usize },

    #[error("insufficient vertical lines: found {found}, need {required}")]
    InsufficientVerticalLines { found: usize, required: usize },

    /// The outer vertical lines are too close together to hold seven
    /// strictly increasing day dividers.
    #[error("grid too narrow for seven day columns: width {grid_width}px")]
    DegenerateGrid { grid_width: usize },
}

impl DetectionFailure {
    /// Last stage the detector completed before giving up.
    pub fn stage(&self) -> DetectionStage {
        match self {
            DetectionFailure::HeaderNotFound => DetectionStage::Start,
            DetectionFailure::InsufficientHorizontalLines { .. } => DetectionStage::HeaderFound,
            DetectionFailure::InsufficientVerticalLines { .. } => {
                DetectionStage::HorizontalLinesFound
            }
            DetectionFailure::DegenerateGrid { .. } => DetectionStage::VerticalLinesFound,
        }
    }
}
