//! Stippled vector drawings from raster photographs.
//!
//! A grayscale image is averaged over square regions, each region becomes a
//! dot whose size grows with darkness, and the dots are placed on a fixed
//! page with the photo's aspect ratio preserved:
//! - [`sampler`]: box-average brightness grid
//! - [`layout`]: page fit and dot geometry
//! - [`emitter`]: replay dots into one or more [`sink::DrawSink`]s
//! - [`svg_sink`] / [`preview`]: SVG documents and PNG previews
//!
//! [`pipeline::Pipeline`] chains the stages for a single configuration.

pub mod config;
pub mod emitter;
pub mod error;
pub mod grid;
pub mod layout;
pub mod orientation;
pub mod pipeline;
pub mod preview;
pub mod raster;
pub mod sampler;
pub mod sink;
pub mod svg_sink;

pub use config::{PageSize, Preset, StippleConfig};
pub use error::{Result, StippleError};
pub use grid::{BrightnessGrid, PixelGrid};
pub use layout::{Dot, Layout, PageGeometry};
pub use orientation::Orientation;
pub use pipeline::{Pipeline, RunSummary};
pub use sink::{CommandRecorder, DotStyle, DrawCommand, DrawSink, StyledSink};
