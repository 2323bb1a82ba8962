//! Density voting along one image axis.
//!
//! Both rule-line passes follow the same recipe: classify pixels, count
//! hits per row (or per column) over a set of samples, and keep the
//! positions whose hit density clears a threshold. [`DensityProfile`]
//! captures the counting; [`Axis`] fixes which way the lines run.

use crate::image::{ImageRgb8, ImageView, Rgb};
use serde::Serialize;

/// Orientation of the rule lines being searched for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// Lines are rows; each candidate row is sampled across the full width.
    Horizontal,
    /// Lines are columns; each column is sampled at the given scan rows.
    Vertical,
}

impl Axis {
    /// Horizontal rows must strictly exceed the density; vertical columns
    /// need only reach it (and always at least one hit).
    fn clears(self, hits: usize, samples: usize, density: f32) -> bool {
        let needed = samples as f32 * density;
        match self {
            Axis::Horizontal => hits as f32 > needed,
            Axis::Vertical => hits as f32 >= needed.max(1.0),
        }
    }
}

/// Hit counts per candidate position.
#[derive(Clone, Debug)]
pub struct DensityProfile {
    pub axis: Axis,
    /// Candidate row (horizontal) or column (vertical) indices, ascending.
    pub positions: Vec<usize>,
    pub hits: Vec<usize>,
    /// Samples taken per position.
    pub samples: usize,
}

impl DensityProfile {
    /// Count `is_hit` pixels.
    ///
    /// For [`Axis::Horizontal`] every row in `scan` is a candidate sampled
    /// over the whole width. For [`Axis::Vertical`] every column is a
    /// candidate sampled at each row of `scan`; duplicated scan rows count
    /// once per occurrence.
    pub fn build<F>(image: &ImageRgb8, axis: Axis, scan: &[usize], is_hit: F) -> Self
    where
        F: Fn(Rgb) -> bool,
    {
        match axis {
            Axis::Horizontal => {
                let hits = scan
                    .iter()
                    .map(|&y| image.row(y).iter().filter(|&&px| is_hit(px)).count())
                    .collect();
                Self {
                    axis,
                    positions: scan.to_vec(),
                    hits,
                    samples: image.w,
                }
            }
            Axis::Vertical => {
                let mut hits = vec![0usize; image.w];
                for &y in scan {
                    for (x, &px) in image.row(y).iter().enumerate() {
                        if is_hit(px) {
                            hits[x] += 1;
                        }
                    }
                }
                Self {
                    axis,
                    positions: (0..image.w).collect(),
                    hits,
                    samples: scan.len(),
                }
            }
        }
    }

    /// Positions whose density clears `density`, in ascending order.
    pub fn winners(&self, density: f32) -> Vec<usize> {
        if self.samples == 0 {
            return Vec::new();
        }
        self.positions
            .iter()
            .zip(&self.hits)
            .filter(|&(_, &hits)| self.axis.clears(hits, self.samples, density))
            .map(|(&pos, _)| pos)
            .collect()
    }
}
