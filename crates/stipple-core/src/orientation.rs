//! Orientation pre-pass run before sampling.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::PixelGrid;

/// How the source is oriented before it is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Keep the decoded orientation.
    #[default]
    AsIs,
    /// Rotate landscape sources a quarter turn clockwise.
    Portrait,
}

impl Orientation {
    pub fn apply(self, grid: PixelGrid) -> PixelGrid {
        match self {
            Orientation::AsIs => grid,
            Orientation::Portrait => ensure_portrait(grid),
        }
    }

    /// Whether `apply` would rotate `grid`.
    pub fn rotates(self, grid: &PixelGrid) -> bool {
        self == Orientation::Portrait && grid.width() > grid.height()
    }

    /// Borrowing form of [`Orientation::apply`]; copies only when rotating.
    pub fn orient(self, grid: &PixelGrid) -> Cow<'_, PixelGrid> {
        if self.rotates(grid) {
            debug!(
                width = grid.width(),
                height = grid.height(),
                "Rotating landscape source to portrait"
            );
            Cow::Owned(rotate_clockwise(grid))
        } else {
            Cow::Borrowed(grid)
        }
    }

    /// Grid dimensions after orientation, without touching pixels.
    pub fn oriented_dimensions(self, grid: &PixelGrid) -> (usize, usize) {
        let (width, height) = grid.dimensions();
        if self.rotates(grid) {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// Rotate 90 degrees clockwise. Pixel `(x, y)` moves to `(height - 1 - y, x)`.
pub fn rotate_clockwise(grid: &PixelGrid) -> PixelGrid {
    let (width, height) = grid.dimensions();
    let mut rotated = vec![0u8; width * height];

    // Output is `height` columns wide.
    for y in 0..height {
        let row = grid.row(y);
        let out_x = height - 1 - y;
        for (x, &value) in row.iter().enumerate() {
            rotated[x * height + out_x] = value;
        }
    }

    PixelGrid::from_parts(height, width, rotated)
}

/// Rotate only when the grid is wider than tall.
pub fn ensure_portrait(grid: PixelGrid) -> PixelGrid {
    if grid.width() > grid.height() {
        debug!(
            width = grid.width(),
            height = grid.height(),
            "Rotating landscape source to portrait"
        );
        rotate_clockwise(&grid)
    } else {
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x2() -> PixelGrid {
        // 0 1 2
        // 3 4 5
        PixelGrid::new(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap()
    }

    #[test]
    fn test_rotate_clockwise() {
        let rotated = rotate_clockwise(&grid_3x2());
        // 3 0
        // 4 1
        // 5 2
        assert_eq!(rotated.dimensions(), (2, 3));
        assert_eq!(rotated.as_slice(), &[3, 0, 4, 1, 5, 2]);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let original = grid_3x2();
        let mut grid = original.clone();
        for _ in 0..4 {
            grid = rotate_clockwise(&grid);
        }
        assert_eq!(grid, original);
    }

    #[test]
    fn test_ensure_portrait_rotates_landscape_only() {
        assert_eq!(ensure_portrait(grid_3x2()).dimensions(), (2, 3));

        let portrait = PixelGrid::new(2, 3, vec![9; 6]).unwrap();
        assert_eq!(ensure_portrait(portrait.clone()), portrait);

        let square = PixelGrid::new(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(ensure_portrait(square.clone()), square);
    }

    #[test]
    fn test_as_is_keeps_landscape() {
        let grid = grid_3x2();
        assert_eq!(Orientation::AsIs.apply(grid.clone()), grid);
        assert_eq!(Orientation::Portrait.apply(grid).dimensions(), (2, 3));
    }

    #[test]
    fn test_orient_borrows_unless_rotating() {
        let landscape = grid_3x2();
        let rotated = Orientation::Portrait.orient(&landscape);
        assert!(matches!(rotated, Cow::Owned(_)));
        assert_eq!(rotated.dimensions(), (2, 3));
        assert_eq!(Orientation::Portrait.oriented_dimensions(&landscape), (2, 3));

        assert!(matches!(Orientation::AsIs.orient(&landscape), Cow::Borrowed(_)));
        assert_eq!(Orientation::AsIs.oriented_dimensions(&landscape), (3, 2));

        let portrait = rotated.into_owned();
        assert!(matches!(Orientation::Portrait.orient(&portrait), Cow::Borrowed(_)));
    }
}
