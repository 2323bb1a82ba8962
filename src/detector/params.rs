//! Parameter types configuring the detector stages.
//!
//! Defaults match the university timetables the detector was calibrated on
//! (dark blue header, mid-gray rule lines, pastel class blocks). For other
//! lighting conditions start with the gray band and the header colour range.

use crate::boundaries::TimeColumnSearch;
use crate::days::{DayLayout, TableDirection};
use crate::header::HeaderParams;
use crate::pixel::ContentParams;
use crate::rules::RuleParams;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters; every field falls back to its default when
/// omitted from a JSON config.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectorParams {
    pub header: HeaderParams,
    /// Gray classifier and both rule-line passes.
    pub rules: RuleParams,
    /// Candidate time-column shares of the grid width.
    pub time_column: TimeColumnSearch,
    /// Content test applied to each cropped column.
    pub content: ContentParams,
    /// Reading direction of the day columns.
    pub direction: TableDirection,
}

impl DetectorParams {
    pub fn layout(&self) -> DayLayout {
        DayLayout::new(self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_calibrated_thresholds() {
        let params = DetectorParams::default();
        assert_eq!(params.header.density, 0.3);
        assert_eq!(params.rules.gray.channel_tolerance, 25);
        assert_eq!(params.rules.horizontal.merge_gap, 3);
        assert_eq!(params.rules.vertical.merge_gap, 4);
        assert_eq!(params.rules.horizontal.min_lines, 3);
        assert_eq!(params.rules.vertical.min_lines, 2);
        assert_eq!(params.rules.scan_radius, 2);
        assert_eq!(params.time_column, TimeColumnSearch::default());
        assert_eq!(params.content.density, 0.03);
        assert_eq!(params.direction, TableDirection::RightToLeft);
    }

    #[test]
    fn partial_json_overrides_keep_other_defaults() {
        let json = r#"{
            "rules": { "gray": { "brightness_max": 210.0 }, "vertical": { "merge_gap": 6 } },
            "time_column": { "max_percent": 15 },
            "direction": "leftToRight"
        }"#;
        let params: DetectorParams = serde_json::from_str(json).expect("parse params");
        assert_eq!(params.rules.gray.brightness_max, 210.0);
        assert_eq!(params.rules.gray.brightness_min, 90.0);
        assert_eq!(params.rules.vertical.merge_gap, 6);
        assert_eq!(params.rules.horizontal.merge_gap, 3);
        assert_eq!(params.time_column.min_percent, 7);
        assert_eq!(params.time_column.max_percent, 15);
        assert_eq!(params.direction, TableDirection::LeftToRight);
    }
}
