//! Per-pixel colour predicates.
//!
//! All predicates are total over RGB triples and carry their thresholds in
//! small `serde`-deserializable parameter structs so that alternative
//! lighting profiles can be loaded from configuration.

use crate::image::Rgb;
use serde::{Deserialize, Serialize};

/// Exclusive per-channel range identifying header-blue pixels.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderColor {
    pub min: Rgb,
    pub max: Rgb,
}

impl Default for HeaderColor {
    fn default() -> Self {
        Self {
            min: [30, 50, 70],
            max: [100, 130, 180],
        }
    }
}

impl HeaderColor {
    #[inline]
    pub fn is_header_pixel(&self, px: Rgb) -> bool {
        (0..3).all(|c| self.min[c] < px[c] && px[c] < self.max[c])
    }
}

/// Neutral gray used by the rule lines of the grid.
///
/// A pixel qualifies when every pairwise channel difference is below
/// `channel_tolerance` and its mean lies strictly inside
/// `(brightness_min, brightness_max)`. Both rule-line passes share one
/// instance.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GrayBand {
    pub channel_tolerance: u8,
    pub brightness_min: f32,
    pub brightness_max: f32,
}

impl Default for GrayBand {
    fn default() -> Self {
        Self {
            channel_tolerance: 25,
            brightness_min: 90.0,
            brightness_max: 200.0,
        }
    }
}

impl GrayBand {
    #[inline]
    pub fn is_neutral_gray(&self, px: Rgb) -> bool {
        let [r, g, b] = px;
        let tol = self.channel_tolerance;
        if r.abs_diff(g) >= tol || g.abs_diff(b) >= tol || r.abs_diff(b) >= tol {
            return false;
        }
        let mean = mean_brightness(px);
        self.brightness_min < mean && mean < self.brightness_max
    }
}

/// Colour-composition test used to decide whether a column holds class
/// blocks.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentParams {
    /// Pixels with every channel above this are background white.
    pub white_min: u8,
    /// Pixels with every channel within this of their mean are neutral.
    pub gray_tolerance: f32,
    /// Pixels with every channel below this are borders or text.
    pub black_max: u8,
    /// Sample every `sample_stride`-th pixel along both axes.
    pub sample_stride: usize,
    /// Colored fraction of samples above which a column has content.
    pub density: f32,
}

impl Default for ContentParams {
    fn default() -> Self {
        Self {
            white_min: 230,
            gray_tolerance: 15.0,
            black_max: 30,
            sample_stride: 3,
            density: 0.03,
        }
    }
}

impl ContentParams {
    /// True for pixels that are neither near-white, neutral, nor near-black.
    #[inline]
    pub fn is_colored(&self, px: Rgb) -> bool {
        if px.iter().all(|&c| c > self.white_min) {
            return false;
        }
        let mean = mean_brightness(px);
        if px
            .iter()
            .all(|&c| (c as f32 - mean).abs() < self.gray_tolerance)
        {
            return false;
        }
        !px.iter().all(|&c| c < self.black_max)
    }
}

#[inline]
pub fn mean_brightness(px: Rgb) -> f32 {
    (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_range_is_exclusive() {
        let header = HeaderColor::default();
        assert!(header.is_header_pixel([50, 80, 140]));
        assert!(!header.is_header_pixel([30, 80, 140]));
        assert!(!header.is_header_pixel([50, 130, 140]));
        assert!(!header.is_header_pixel([255, 255, 255]));
    }

    #[test]
    fn gray_requires_neutral_channels_inside_band() {
        let gray = GrayBand::default();
        assert!(gray.is_neutral_gray([150, 150, 150]));
        assert!(gray.is_neutral_gray([140, 155, 160]));
        assert!(!gray.is_neutral_gray([255, 255, 255]), "white is too bright");
        assert!(!gray.is_neutral_gray([40, 40, 40]), "black is too dark");
        assert!(!gray.is_neutral_gray([90, 90, 90]), "band is exclusive");
        assert!(!gray.is_neutral_gray([120, 140, 160]), "r-b spread is 40");
        assert!(!gray.is_neutral_gray([200, 80, 60]));
    }

    #[test]
    fn colored_excludes_white_gray_and_black() {
        let content = ContentParams::default();
        assert!(!content.is_colored([250, 250, 250]));
        assert!(!content.is_colored([128, 130, 126]));
        assert!(!content.is_colored([10, 12, 20]));
        assert!(content.is_colored([230, 120, 40]));
        assert!(content.is_colored([90, 200, 120]));
    }
}
