//! End-to-end run: orient, sample, lay out, emit.

use serde::Serialize;
use tracing::info;

use crate::config::StippleConfig;
use crate::emitter::emit;
use crate::error::Result;
use crate::grid::PixelGrid;
use crate::layout::{layout, Layout, PageGeometry};
use crate::sampler::sample;
use crate::sink::StyledSink;

/// Counts and geometry from one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub source_width: usize,
    pub source_height: usize,
    pub grid_width: usize,
    pub grid_height: usize,
    pub dots: usize,
    pub geometry: PageGeometry,
}

/// A validated configuration ready to process images.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: StippleConfig,
}

impl Pipeline {
    /// Validate `config` up front; nothing runs with a bad configuration.
    pub fn new(config: StippleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StippleConfig {
        &self.config
    }

    /// Apply the configured orientation pre-pass.
    pub fn prepare(&self, grid: PixelGrid) -> PixelGrid {
        self.config.orientation.apply(grid)
    }

    /// Page placement for `grid` once oriented.
    ///
    /// Fails with `DegenerateInput` exactly when `run` would, so callers can
    /// reject a source before creating any output.
    pub fn geometry(&self, grid: &PixelGrid) -> Result<PageGeometry> {
        let (width, height) = self.config.orientation.oriented_dimensions(grid);
        PageGeometry::fit(width, height, self.config.page)
    }

    /// Orient, sample, lay out and write to `sinks`.
    ///
    /// Grids that already went through [`Pipeline::prepare`] are not rotated
    /// again. A degenerate source fails before any sink is touched.
    pub fn run(&self, grid: &PixelGrid, sinks: &mut [StyledSink<'_>]) -> Result<RunSummary> {
        let oriented = self.config.orientation.orient(grid);
        let grid: &PixelGrid = &oriented;
        let region_size = self.config.region_size;
        let brightness = sample(grid, region_size)?;
        let Layout { geometry, dots } =
            layout(&brightness, region_size, grid.dimensions(), &self.config)?;

        emit(&dots, &geometry, sinks)?;

        let summary = RunSummary {
            source_width: grid.width(),
            source_height: grid.height(),
            grid_width: brightness.width(),
            grid_height: brightness.height(),
            dots: dots.len(),
            geometry,
        };

        info!(
            source_width = summary.source_width,
            source_height = summary.source_height,
            grid_width = summary.grid_width,
            grid_height = summary.grid_height,
            dots = summary.dots,
            sinks = sinks.len(),
            "Stipple drawing complete"
        );

        Ok(summary)
    }
}
