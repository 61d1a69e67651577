//! Common test fixtures for stippler tests.

/// Page sizes as `(width, height)` in page units.
pub mod pages {
    /// A5 in tenths of a millimetre.
    pub const A5: (f64, f64) = (1485.0, 2100.0);

    /// Small portrait page used by the checkerboard scenario.
    pub const SMALL_PORTRAIT: (f64, f64) = (100.0, 150.0);

    /// Square page, aspect ratio 1.
    pub const SQUARE: (f64, f64) = (100.0, 100.0);

    /// Landscape page, aspect ratio 2.
    pub const WIDE: (f64, f64) = (200.0, 100.0);
}

/// Source image sizes as `(width, height)` in pixels.
pub mod sources {
    pub const LANDSCAPE_4_3: (usize, usize) = (640, 480);
    pub const PORTRAIT_3_4: (usize, usize) = (480, 640);
    pub const SQUARE: (usize, usize) = (300, 300);
    pub const PANORAMA: (usize, usize) = (1200, 200);
    pub const SLIVER: (usize, usize) = (1, 999);
    pub const ZERO_HEIGHT: (usize, usize) = (10, 0);
}

/// Scratch directory removed when dropped.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("stippler-test-")
        .tempdir()
        .expect("failed to create scratch directory")
}
