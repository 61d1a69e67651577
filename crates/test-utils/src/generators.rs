//! Synthetic grayscale pixel buffers.
//!
//! Every generator returns a row-major `Vec<u8>` of `width * height`
//! brightness values (0 = black, 255 = white), ready for
//! `PixelGrid::new(width, height, pixels)`.

/// Pure black.
pub const BLACK: u8 = 0;
/// Pure white.
pub const WHITE: u8 = 255;

/// Creates a buffer where every pixel has the same brightness.
///
/// # Example
///
/// ```
/// use test_utils::create_uniform_pixels;
///
/// let pixels = create_uniform_pixels(4, 3, 128);
/// assert_eq!(pixels.len(), 12);
/// assert!(pixels.iter().all(|&p| p == 128));
/// ```
pub fn create_uniform_pixels(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// Creates a checkerboard of `block` x `block` squares.
///
/// The block containing pixel `(0, 0)` is `first`, its neighbours are
/// `second`, alternating in both directions. Partial blocks at the right
/// and bottom edges continue the pattern.
pub fn create_checkerboard_pixels(
    width: usize,
    height: usize,
    block: usize,
    first: u8,
    second: u8,
) -> Vec<u8> {
    let block = block.max(1);
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let even = (col / block + row / block) % 2 == 0;
            data.push(if even { first } else { second });
        }
    }
    data
}

/// Creates a left-to-right ramp from black to white.
///
/// Column `col` has brightness `col * 255 / (width - 1)` (integer math), so
/// the first column is 0 and the last is 255.
pub fn create_horizontal_gradient(width: usize, height: usize) -> Vec<u8> {
    let span = width.saturating_sub(1).max(1);
    let mut data = Vec::with_capacity(width * height);
    for _ in 0..height {
        for col in 0..width {
            data.push((col * 255 / span) as u8);
        }
    }
    data
}

/// Creates a buffer where each pixel encodes its position: `(col + row * 16) % 256`.
///
/// Useful for checking that rotations and crops move the right pixels.
pub fn create_indexed_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(((col + row * 16) % 256) as u8);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let pixels = create_uniform_pixels(3, 2, WHITE);
        assert_eq!(pixels, vec![255; 6]);
    }

    #[test]
    fn test_checkerboard_blocks() {
        let pixels = create_checkerboard_pixels(4, 4, 2, BLACK, WHITE);
        #[rustfmt::skip]
        let expected = vec![
            0,   0,   255, 255,
            0,   0,   255, 255,
            255, 255, 0,   0,
            255, 255, 0,   0,
        ];
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_checkerboard_partial_edge() {
        let pixels = create_checkerboard_pixels(5, 1, 2, BLACK, WHITE);
        assert_eq!(pixels, vec![0, 0, 255, 255, 0]);
    }

    #[test]
    fn test_gradient_endpoints() {
        let pixels = create_horizontal_gradient(6, 2);
        assert_eq!(pixels[0], 0);
        assert_eq!(pixels[5], 255);
        assert_eq!(pixels[6], 0);
        assert!(pixels[..6].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_single_column_gradient() {
        assert_eq!(create_horizontal_gradient(1, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_indexed() {
        let pixels = create_indexed_pixels(3, 2);
        assert_eq!(pixels, vec![0, 1, 2, 16, 17, 18]);
    }
}
