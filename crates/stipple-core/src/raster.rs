//! Raster collaborators: decode a source image, save the grayscale copy.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::grid::PixelGrid;

/// Decode any format the `image` crate understands and convert to 8-bit luma.
pub fn load_grayscale(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    let decoded = image::open(path)?;
    let grid = PixelGrid::from_luma(&decoded.to_luma8());
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded source image"
    );
    Ok(grid)
}

/// Decode an in-memory image.
pub fn decode_grayscale(bytes: &[u8]) -> Result<PixelGrid> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(PixelGrid::from_luma(&decoded.to_luma8()))
}

/// Write `grid` as an image; the format follows the file extension.
pub fn save_grayscale(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    grid.to_luma()?.save(path)?;
    info!(path = %path.display(), "Saved grayscale image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StippleError;

    #[test]
    fn test_save_then_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let grid = PixelGrid::new(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap();

        save_grayscale(&grid, &path).unwrap();
        assert_eq!(load_grayscale(&path).unwrap(), grid);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_grayscale(dir.path().join("absent.jpg")).unwrap_err();
        assert!(matches!(err, StippleError::Image(_)));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(decode_grayscale(b"not an image").is_err());
    }
}
