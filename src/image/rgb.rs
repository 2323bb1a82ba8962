//! RGB image views and owned buffers.
//!
//! The detector never mutates its input, so it works on a borrowed
//! [`ImageRgb8`] view. Cropped day columns outlive the decoded photograph
//! and are therefore copied into an owned [`RgbImageBuf`].

use super::traits::ImageView;

/// One pixel as `[r, g, b]`.
pub type Rgb = [u8; 3];

/// Borrowed, read-only RGB image. `stride` counts pixels between rows.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [Rgb],
}

impl<'a> ImageRgb8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.stride + x]
    }

    /// Copy the rectangle `[x0, x1) × [y0, y1)` into an owned buffer.
    ///
    /// Coordinates are clamped to the image, so an out-of-range rectangle
    /// yields a smaller (possibly empty) crop rather than panicking.
    pub fn crop(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> RgbImageBuf {
        let x1 = x1.min(self.w);
        let y1 = y1.min(self.h);
        let x0 = x0.min(x1);
        let y0 = y0.min(y1);
        let width = x1 - x0;
        let height = y1 - y0;
        let mut data = Vec::with_capacity(width * height);
        for y in y0..y1 {
            data.extend_from_slice(&self.row(y)[x0..x1]);
        }
        RgbImageBuf::new(width, height, data)
    }
}

impl<'a> ImageView for ImageRgb8<'a> {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned, tightly packed RGB buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImageBuf {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl RgbImageBuf {
    /// Wrap `data` (row-major, `width * height` pixels).
    pub fn new(width: usize, height: usize, data: Vec<Rgb>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Buffer of `width × height` pixels all set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgb) -> Self {
        Self::new(width, height, vec![fill; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// Paint the rectangle `[x0, x1) × [y0, y1)`, clamped to the buffer.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, px: Rgb) {
        let xa = x0.min(self.width);
        let xb = x1.min(self.width).max(xa);
        for y in y0.min(self.height)..y1.min(self.height) {
            let start = y * self.width;
            self.data[start + xa..start + xb].fill(px);
        }
    }

    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> RgbImageBuf {
        let data = (0..width * height)
            .map(|i| [(i % width) as u8, (i / width) as u8, 0])
            .collect();
        RgbImageBuf::new(width, height, data)
    }

    #[test]
    fn crop_copies_requested_rectangle() {
        let img = gradient(10, 8);
        let crop = img.as_view().crop(2, 3, 5, 7);
        assert_eq!((crop.width(), crop.height()), (3, 4));
        assert_eq!(crop.as_view().get(0, 0), [2, 3, 0]);
        assert_eq!(crop.as_view().get(2, 3), [4, 6, 0]);
    }

    #[test]
    fn crop_clamps_to_image() {
        let img = gradient(4, 4);
        let crop = img.as_view().crop(3, 3, 40, 40);
        assert_eq!((crop.width(), crop.height()), (1, 1));
        let empty = img.as_view().crop(9, 9, 12, 12);
        assert!(empty.as_view().is_empty());
    }

    #[test]
    fn strided_view_rows_skip_padding() {
        let data: Vec<Rgb> = (0..12).map(|i| [i as u8, 0, 0]).collect();
        let view = ImageRgb8 {
            w: 3,
            h: 3,
            stride: 4,
            data: &data,
        };
        let firsts: Vec<u8> = view.rows().map(|row| row[0][0]).collect();
        assert_eq!(firsts, vec![0, 4, 8]);
        assert!(!view.is_contiguous());
    }
}
