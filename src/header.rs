//! Header band location.
//!
//! The timetable header is a solid band of blue rows at the top of the
//! table. The locator walks rows top-down and returns the first contiguous
//! run of rows whose header-pixel density exceeds the configured fraction.

use crate::image::{ImageRgb8, ImageView};
use crate::pixel::HeaderColor;
use log::debug;
use serde::{Deserialize, Serialize};

/// Row range `[top, bottom)` classified as header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderBand {
    pub top: usize,
    pub bottom: usize,
}

impl HeaderBand {
    pub fn height(&self) -> usize {
        self.bottom - self.top
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderParams {
    pub color: HeaderColor,
    /// Fraction of the row width that must be header-blue.
    pub density: f32,
}

impl Default for HeaderParams {
    fn default() -> Self {
        Self {
            color: HeaderColor::default(),
            density: 0.3,
        }
    }
}

/// Find the first header band; `None` when no row reaches the density.
pub fn locate_header(image: &ImageRgb8, params: &HeaderParams) -> Option<HeaderBand> {
    let needed = image.w as f32 * params.density;
    let mut top: Option<usize> = None;
    let mut bottom = 0usize;
    for (y, row) in image.rows().enumerate() {
        let count = row
            .iter()
            .filter(|&&px| params.color.is_header_pixel(px))
            .count();
        if count as f32 > needed {
            top.get_or_insert(y);
            bottom = y + 1;
        } else if top.is_some() {
            break;
        }
    }
    let band = top.map(|top| HeaderBand { top, bottom });
    match band {
        Some(b) => debug!("locate_header rows {}..{}", b.top, b.bottom),
        None => debug!("locate_header no row above density {:.2}", params.density),
    }
    band
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbImageBuf;

    const BLUE: [u8; 3] = [50, 80, 140];

    #[test]
    fn uniform_background_has_no_header() {
        let img = RgbImageBuf::filled(40, 30, [245, 245, 245]);
        assert_eq!(locate_header(&img.as_view(), &HeaderParams::default()), None);
    }

    #[test]
    fn finds_first_band_only() {
        let mut img = RgbImageBuf::filled(40, 30, [255, 255, 255]);
        img.fill_rect(0, 3, 40, 8, BLUE);
        img.fill_rect(0, 15, 40, 20, BLUE);
        let band = locate_header(&img.as_view(), &HeaderParams::default()).expect("band");
        assert_eq!(band, HeaderBand { top: 3, bottom: 8 });
        assert_eq!(band.height(), 5);
    }

    #[test]
    fn sparse_rows_do_not_count() {
        let mut img = RgbImageBuf::filled(40, 30, [255, 255, 255]);
        // 12 of 40 pixels is exactly 30%, which does not exceed the density.
        img.fill_rect(0, 5, 12, 10, BLUE);
        assert_eq!(locate_header(&img.as_view(), &HeaderParams::default()), None);
        img.fill_rect(0, 5, 13, 10, BLUE);
        assert!(locate_header(&img.as_view(), &HeaderParams::default()).is_some());
    }
}
