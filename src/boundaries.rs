//! Column boundary solver.
//!
//! The table is seven equal day columns followed by one narrower time
//! column whose share of the grid width varies between source documents.
//! The solver tries each integer percentage in the configured range, lays
//! out seven equal dividers over the remaining width, and scores the layout
//! by the mean distance from every interior detected vertical line to its
//! nearest expected divider. The first candidate with the lowest score wins.

use crate::error::DetectionFailure;
use log::debug;
use serde::{Deserialize, Serialize};

/// Number of day columns in the table.
pub const DAY_COLUMNS: usize = 7;

/// Inclusive percentage range searched for the time-column width.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeColumnSearch {
    pub min_percent: u32,
    pub max_percent: u32,
}

impl Default for TimeColumnSearch {
    fn default() -> Self {
        Self {
            min_percent: 7,
            max_percent: 13,
        }
    }
}

/// Score of one candidate time-column percentage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub time_percent: u32,
    pub mean_error_px: f32,
}

/// Winning layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundarySolution {
    /// Eight day-column dividers, left to right.
    pub boundaries: [usize; DAY_COLUMNS + 1],
    pub grid_left: usize,
    pub grid_right: usize,
    pub time_percent: u32,
    pub time_width: usize,
    pub day_width: f64,
    pub mean_error_px: f32,
    /// Every candidate tried, in search order.
    pub candidates: Vec<CandidateScore>,
}

impl BoundarySolution {
    /// Horizontal extent of the time column, `[b7, grid_right)`.
    pub fn time_column(&self) -> (usize, usize) {
        (self.boundaries[DAY_COLUMNS], self.grid_right)
    }
}

/// Layout of the day columns for a given time-column share.
#[derive(Clone, Copy, Debug)]
struct Layout {
    grid_left: usize,
    time_width: usize,
    day_width: f64,
}

impl Layout {
    fn new(grid_left: usize, grid_right: usize, percent: u32) -> Self {
        let grid_width = grid_right - grid_left;
        let time_width = grid_width * percent as usize / 100;
        let day_width = (grid_width - time_width) as f64 / DAY_COLUMNS as f64;
        Self {
            grid_left,
            time_width,
            day_width,
        }
    }

    /// Divider `i` floored to whole pixels; `day_width` stays real-valued so
    /// rounding does not compound across columns.
    #[inline]
    fn divider(&self, i: usize) -> usize {
        (self.grid_left as f64 + i as f64 * self.day_width) as usize
    }

    fn dividers(&self) -> [usize; DAY_COLUMNS + 1] {
        std::array::from_fn(|i| self.divider(i))
    }
}

/// Mean distance from each interior line to its nearest expected position.
/// An empty interior set scores zero.
fn mean_error(interior: &[usize], expected: &[usize]) -> f32 {
    if interior.is_empty() {
        return 0.0;
    }
    let total: usize = interior
        .iter()
        .map(|&x| expected.iter().map(|&e| x.abs_diff(e)).min().unwrap_or(0))
        .sum();
    total as f32 / interior.len() as f32
}

/// Solve the eight day-column dividers from detected vertical lines.
///
/// `vertical_lines` must be strictly increasing with at least two entries;
/// its first and last elements are taken as the grid edges.
pub fn solve_boundaries(
    vertical_lines: &[usize],
    search: &TimeColumnSearch,
) -> Result<BoundarySolution, DetectionFailure> {
    let (Some(&grid_left), Some(&grid_right)) = (vertical_lines.first(), vertical_lines.last())
    else {
        return Err(DetectionFailure::InsufficientVerticalLines {
            found: vertical_lines.len(),
            required: 2,
        });
    };
    let grid_width = grid_right.saturating_sub(grid_left);
    let interior = if vertical_lines.len() > 2 {
        &vertical_lines[1..vertical_lines.len() - 1]
    } else {
        &[][..]
    };

    let mut candidates = Vec::new();
    let mut best: Option<(Layout, CandidateScore)> = None;
    for percent in search.min_percent..=search.max_percent.min(99) {
        let layout = Layout::new(grid_left, grid_left + grid_width, percent);
        let mut expected = layout.dividers().to_vec();
        expected.push(grid_right);
        let score = CandidateScore {
            time_percent: percent,
            mean_error_px: mean_error(interior, &expected),
        };
        candidates.push(score);
        if best
            .as_ref()
            .map_or(true, |(_, b)| score.mean_error_px < b.mean_error_px)
        {
            best = Some((layout, score));
        }
    }

    let Some((layout, score)) = best else {
        return Err(DetectionFailure::DegenerateGrid { grid_width });
    };
    if layout.day_width < 1.0 {
        return Err(DetectionFailure::DegenerateGrid { grid_width });
    }
    let boundaries = layout.dividers();
    debug!(
        "solve_boundaries grid={}..{} time={}% ({}px) day_width={:.2} error={:.2}px boundaries={:?}",
        grid_left,
        grid_right,
        score.time_percent,
        layout.time_width,
        layout.day_width,
        score.mean_error_px,
        boundaries
    );
    Ok(BoundarySolution {
        boundaries,
        grid_left,
        grid_right,
        time_percent: score.time_percent,
        time_width: layout.time_width,
        day_width: layout.day_width,
        mean_error_px: score.mean_error_px,
        candidates,
    })
}
