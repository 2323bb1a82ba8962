//! Rule-line detection below the header.
//!
//! Overview
//! - Horizontal pass: every row below the header votes with its neutral-gray
//!   density; winning rows are merged into single line positions.
//! - Vertical pass: only rows within a small radius of the horizontal lines
//!   are sampled, because rule lines cross at right angles and the rows in
//!   between are full of coloured class blocks. Each column votes with the
//!   number of gray hits across those rows.
//!
//! Both passes share [`profile::DensityProfile`] for voting and
//! [`cluster::merge_adjacent`] for merging.

pub mod cluster;
pub mod profile;

pub use cluster::merge_adjacent;
pub use profile::{Axis, DensityProfile};

use crate::image::ImageRgb8;
use crate::pixel::GrayBand;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

/// Thresholds for one rule-line axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleLineParams {
    /// Required gray density per row (horizontal) or per column (vertical).
    pub density: f32,
    /// Hits at most this far apart merge into one line.
    pub merge_gap: usize,
    /// Fewer merged lines than this is a detection failure.
    pub min_lines: usize,
}

impl RuleLineParams {
    pub fn horizontal() -> Self {
        Self {
            density: 0.3,
            merge_gap: 3,
            min_lines: 3,
        }
    }

    pub fn vertical() -> Self {
        Self {
            density: 0.3,
            merge_gap: 4,
            min_lines: 2,
        }
    }
}

/// Partial per-axis settings read from configuration; missing fields keep
/// the axis defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RuleLineOverrides {
    density: Option<f32>,
    merge_gap: Option<usize>,
    min_lines: Option<usize>,
}

impl RuleLineOverrides {
    fn resolve(self, base: RuleLineParams) -> RuleLineParams {
        RuleLineParams {
            density: self.density.unwrap_or(base.density),
            merge_gap: self.merge_gap.unwrap_or(base.merge_gap),
            min_lines: self.min_lines.unwrap_or(base.min_lines),
        }
    }
}

fn horizontal_overrides<'de, D: Deserializer<'de>>(de: D) -> Result<RuleLineParams, D::Error> {
    Ok(RuleLineOverrides::deserialize(de)?.resolve(RuleLineParams::horizontal()))
}

fn vertical_overrides<'de, D: Deserializer<'de>>(de: D) -> Result<RuleLineParams, D::Error> {
    Ok(RuleLineOverrides::deserialize(de)?.resolve(RuleLineParams::vertical()))
}

/// Settings for both passes plus the shared gray classifier.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleParams {
    pub gray: GrayBand,
    #[serde(deserialize_with = "horizontal_overrides")]
    pub horizontal: RuleLineParams,
    #[serde(deserialize_with = "vertical_overrides")]
    pub vertical: RuleLineParams,
    /// Rows sampled above and below each horizontal line in the vertical pass.
    pub scan_radius: usize,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            gray: GrayBand::default(),
            horizontal: RuleLineParams::horizontal(),
            vertical: RuleLineParams::vertical(),
            scan_radius: 2,
        }
    }
}

/// Horizontal rule rows at or below `start_y`, strictly increasing.
pub fn find_horizontal_lines(
    image: &ImageRgb8,
    start_y: usize,
    params: &RuleParams,
) -> Vec<usize> {
    let rows: Vec<usize> = (start_y.min(image.h)..image.h).collect();
    let profile = DensityProfile::build(image, Axis::Horizontal, &rows, |px| {
        params.gray.is_neutral_gray(px)
    });
    let hits = profile.winners(params.horizontal.density);
    let lines = merge_adjacent(&hits, params.horizontal.merge_gap);
    debug!(
        "find_horizontal_lines start_y={} candidate_rows={} lines={:?}",
        start_y,
        hits.len(),
        lines
    );
    lines
}

/// Rows within `radius` of each horizontal line, restricted to
/// `[start_y, end_y)`. Overlapping neighbourhoods keep their duplicates.
pub fn expand_scan_rows(
    lines: &[usize],
    start_y: usize,
    end_y: usize,
    radius: usize,
) -> Vec<usize> {
    let window = radius
        .saturating_mul(2)
        .saturating_add(1)
        .min(end_y.saturating_sub(start_y));
    let mut rows = Vec::with_capacity(lines.len().saturating_mul(window));
    for &line in lines {
        let lo = line.saturating_sub(radius).max(start_y);
        let hi = line.saturating_add(radius).saturating_add(1).min(end_y);
        rows.extend(lo..hi);
    }
    rows
}

/// Vertical rule columns sampled at `scan_rows`, strictly increasing. The
/// first and last entries are the grid edges.
pub fn find_vertical_lines(
    image: &ImageRgb8,
    scan_rows: &[usize],
    params: &RuleParams,
) -> Vec<usize> {
    let profile = DensityProfile::build(image, Axis::Vertical, scan_rows, |px| {
        params.gray.is_neutral_gray(px)
    });
    let hits = profile.winners(params.vertical.density);
    let lines = merge_adjacent(&hits, params.vertical.merge_gap);
    debug!(
        "find_vertical_lines scan_rows={} candidate_cols={} lines={:?}",
        scan_rows.len(),
        hits.len(),
        lines
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbImageBuf;

    const GRAY: [u8; 3] = [150, 150, 150];
    const WHITE: [u8; 3] = [255, 255, 255];

    fn grid(width: usize, height: usize, rows: &[usize], cols: &[usize]) -> RgbImageBuf {
        let mut img = RgbImageBuf::filled(width, height, WHITE);
        for &y in rows {
            img.fill_rect(0, y, width, y + 1, GRAY);
        }
        for &x in cols {
            img.fill_rect(x, 0, x + 1, height, GRAY);
        }
        img
    }

    #[test]
    fn thick_horizontal_lines_merge() {
        let img = grid(60, 80, &[20, 21, 22, 40, 60, 61], &[]);
        let lines = find_horizontal_lines(&img.as_view(), 10, &RuleParams::default());
        assert_eq!(lines, vec![21, 40, 60]);
    }

    #[test]
    fn rows_above_start_are_ignored() {
        let img = grid(60, 80, &[5, 30, 50], &[]);
        let lines = find_horizontal_lines(&img.as_view(), 10, &RuleParams::default());
        assert_eq!(lines, vec![30, 50]);
    }

    #[test]
    fn scan_rows_are_clipped_to_content() {
        let rows = expand_scan_rows(&[11, 40, 78], 10, 80, 2);
        assert_eq!(rows, vec![10, 11, 12, 13, 38, 39, 40, 41, 42, 76, 77, 78, 79]);
    }

    #[test]
    fn huge_scan_radius_covers_whole_range() {
        let rows = expand_scan_rows(&[3, 20], 2, 25, usize::MAX);
        let span: Vec<usize> = (2..25).collect();
        assert_eq!(rows, [span.clone(), span].concat());
    }

    #[test]
    fn vertical_lines_found_from_scan_rows() {
        let img = grid(100, 60, &[10, 30, 50], &[2, 3, 40, 97]);
        let scan = expand_scan_rows(&[10, 30, 50], 5, 60, 2);
        let lines = find_vertical_lines(&img.as_view(), &scan, &RuleParams::default());
        assert_eq!(lines, vec![2, 40, 97]);
    }

    #[test]
    fn vertical_pass_ignores_rows_between_lines() {
        let mut img = grid(100, 60, &[10, 50], &[0, 99]);
        // A gray blob between the rule rows must not produce a vertical line.
        img.fill_rect(45, 20, 48, 40, GRAY);
        let scan = expand_scan_rows(&[10, 50], 5, 60, 2);
        let lines = find_vertical_lines(&img.as_view(), &scan, &RuleParams::default());
        assert_eq!(lines, vec![0, 99]);
    }

    #[test]
    fn partial_axis_overrides_keep_axis_defaults() {
        let params: RuleParams =
            serde_json::from_str(r#"{ "vertical": { "merge_gap": 6 }, "horizontal": {} }"#)
                .expect("parse");
        assert_eq!(params.vertical.merge_gap, 6);
        assert_eq!(params.vertical.min_lines, 2);
        assert_eq!(params.horizontal, RuleLineParams::horizontal());
        assert_eq!(params.scan_radius, 2);
    }
}
