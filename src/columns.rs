//! Day-column cropping and content classification.

use crate::boundaries::{BoundarySolution, DAY_COLUMNS};
use crate::days::{DayLayout, DaySlot};
use crate::header::HeaderBand;
use crate::image::{ImageRgb8, ImageView, RgbImageBuf};
use crate::pixel::ContentParams;
use log::debug;
use serde::Serialize;

/// Crop rectangle `[x_left, x_right) × [y_top, y_bottom)` in source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelBounds {
    pub x_left: usize,
    pub y_top: usize,
    pub x_right: usize,
    pub y_bottom: usize,
}

impl PixelBounds {
    pub fn width(&self) -> usize {
        self.x_right - self.x_left
    }

    pub fn height(&self) -> usize {
        self.y_bottom - self.y_top
    }
}

/// One cropped day column.
#[derive(Clone, Debug)]
pub struct ColumnDescriptor {
    pub day: DaySlot,
    /// Position counted left to right in the photograph.
    pub physical_index: usize,
    pub bounds: PixelBounds,
    pub image: RgbImageBuf,
    /// Fraction of sampled pixels classified as coloured.
    pub colored_ratio: f32,
    pub has_content: bool,
}

/// Successful detection: the solved grid and its seven day columns in
/// physical (left-to-right) order.
#[derive(Clone, Debug)]
pub struct ColumnGrid {
    pub header: HeaderBand,
    pub horizontal_lines: Vec<usize>,
    pub vertical_lines: Vec<usize>,
    pub solution: BoundarySolution,
    pub columns: Vec<ColumnDescriptor>,
}

impl ColumnGrid {
    pub fn boundaries(&self) -> &[usize; DAY_COLUMNS + 1] {
        &self.solution.boundaries
    }

    /// Columns flagged as holding class blocks, left to right.
    pub fn active_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.has_content)
    }

    pub fn column_for(&self, day: DaySlot) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.day == day)
    }

    /// Horizontal extent of the time column, `[b7, grid_right)`.
    pub fn time_column(&self) -> (usize, usize) {
        self.solution.time_column()
    }
}

/// Fraction of sampled pixels that are coloured. Samples every
/// `sample_stride`-th pixel along both axes; an empty image scores zero.
pub fn colored_ratio<I>(image: &I, params: &ContentParams) -> f32
where
    I: ImageView<Pixel = crate::image::Rgb>,
{
    let stride = params.sample_stride.max(1);
    let mut sampled = 0usize;
    let mut colored = 0usize;
    for y in (0..image.height()).step_by(stride) {
        for &px in image.row(y).iter().step_by(stride) {
            sampled += 1;
            if params.is_colored(px) {
                colored += 1;
            }
        }
    }
    colored as f32 / sampled.max(1) as f32
}

/// Whether a sampled coloured `ratio` marks a column as holding classes.
pub fn has_content(ratio: f32, params: &ContentParams) -> bool {
    ratio > params.density
}

/// Crop the seven day columns between `header.bottom` and `content_bottom`.
pub fn extract_columns(
    image: &ImageRgb8,
    solution: &BoundarySolution,
    header: HeaderBand,
    content_bottom: usize,
    layout: &DayLayout,
    content: &ContentParams,
) -> Vec<ColumnDescriptor> {
    let b = &solution.boundaries;
    (0..DAY_COLUMNS)
        .map(|physical| {
            let bounds = PixelBounds {
                x_left: b[physical],
                y_top: header.bottom,
                x_right: b[physical + 1],
                y_bottom: content_bottom,
            };
            let crop = image.crop(bounds.x_left, bounds.y_top, bounds.x_right, bounds.y_bottom);
            let ratio = colored_ratio(&crop.as_view(), content);
            let day = layout.day_at(physical);
            let has_content = has_content(ratio, content);
            debug!(
                "extract_columns slot={} day={} x={}..{} colored={:.3} has_content={}",
                physical, day, bounds.x_left, bounds.x_right, ratio, has_content
            );
            ColumnDescriptor {
                day,
                physical_index: physical,
                bounds,
                image: crop,
                colored_ratio: ratio,
                has_content,
            }
        })
        .collect()
}
