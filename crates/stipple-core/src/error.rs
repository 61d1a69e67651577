//! Error types for the stippling pipeline.

use thiserror::Error;

/// Errors that can occur while turning a pixel grid into a dot drawing.
#[derive(Error, Debug)]
pub enum StippleError {
    /// The source image has a zero dimension; no page fit can be computed.
    #[error("degenerate source image {width}x{height}: both dimensions must be non-zero")]
    DegenerateInput { width: usize, height: usize },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Filesystem or writer failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster decode/encode failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Rasterization failure in the preview backend.
    #[error("render error: {0}")]
    Render(String),

    /// A drawing command arrived after the sink was finished.
    #[error("sink already finished")]
    SinkFinished,
}

pub type Result<T> = std::result::Result<T, StippleError>;
