//! Grid types: the decoded grayscale source and its region averages.

use image::GrayImage;

use crate::error::{Result, StippleError};

/// Immutable 8-bit grayscale image in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a row-major luma buffer.
    ///
    /// Fails with `InvalidConfig` if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(StippleError::InvalidConfig(format!(
                "pixel buffer holds {} values but {}x{} needs {}",
                pixels.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Grid of a single brightness value.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![value; count],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Brightness at column `x`, row `y`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// One row of pixels.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    pub fn from_luma(image: &GrayImage) -> Self {
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            pixels: image.as_raw().clone(),
        }
    }

    pub fn to_luma(&self) -> Result<GrayImage> {
        GrayImage::from_raw(self.width as u32, self.height as u32, self.pixels.clone()).ok_or_else(
            || {
                StippleError::Render(format!(
                    "cannot build a {}x{} luma image",
                    self.width, self.height
                ))
            },
        )
    }
}

/// Region-averaged brightness, one `f64` per cell in row-major order.
///
/// Every value lies in `[0, 255]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BrightnessGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl BrightnessGrid {
    pub(crate) fn from_values(width: usize, height: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            values,
        }
    }

    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            values: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Average brightness of the cell at column `col`, row `row`.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.values[row * self.width + col]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunk size must be non-zero; an empty grid yields no rows either way
        self.values.chunks(self.width.max(1))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or_else(|| {
        StippleError::InvalidConfig(format!("{}x{} grid is too large", width, height))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_buffer() {
        let err = PixelGrid::new(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(err, StippleError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let err = PixelGrid::new(usize::MAX, 2, Vec::new()).unwrap_err();
        assert!(matches!(err, StippleError::InvalidConfig(_)));
        assert!(PixelGrid::filled(usize::MAX, usize::MAX, 0).is_err());
        assert_eq!(PixelGrid::filled(3, 2, 7).unwrap().as_slice(), &[7; 6]);
    }

    #[test]
    fn test_get_is_row_major() {
        let grid = PixelGrid::new(3, 2, vec![0, 1, 2, 10, 11, 12]).unwrap();
        assert_eq!(grid.get(0, 0), 0);
        assert_eq!(grid.get(2, 0), 2);
        assert_eq!(grid.get(1, 1), 11);
        assert_eq!(grid.row(1), &[10, 11, 12]);
    }

    #[test]
    fn test_luma_bridge() {
        let grid = PixelGrid::new(2, 2, vec![0, 64, 128, 255]).unwrap();
        let image = grid.to_luma().unwrap();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 1).0, [255]);
        assert_eq!(PixelGrid::from_luma(&image), grid);
    }

    #[test]
    fn test_empty_brightness_grid_has_no_rows() {
        let grid = BrightnessGrid::empty();
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn test_brightness_rows() {
        let grid = BrightnessGrid::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let rows: Vec<&[f64]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
        assert_eq!(grid.get(1, 0), 2.0);
    }
}
