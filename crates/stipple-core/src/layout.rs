//! Dot layout: fit the source onto the page and size one dot per cell.
//!
//! The source image is scaled uniformly into the largest rectangle of the
//! same aspect ratio that fits the page, then centered. A single scale
//! factor, `fitted_width / original_width`, maps source pixels to page
//! units on both axes.
//!
//! Dot size is a linear inverse of brightness: a black cell gets
//! `max_dot_diameter`, a white one gets nothing. Emitted coordinates and
//! radii are truncated toward zero to whole page units.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{PageSize, StippleConfig};
use crate::error::{Result, StippleError};
use crate::grid::BrightnessGrid;

/// Brightness of pure white.
pub const WHITE: f64 = 255.0;

/// Page placement derived from the source dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page: PageSize,
    pub fitted_width: f64,
    pub fitted_height: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    /// Source pixel to page unit factor, shared by both axes.
    pub scale: f64,
}

impl PageGeometry {
    /// Fit an `original_width` x `original_height` image onto `page`.
    ///
    /// The fitted box touches the page on the aspect-limited axis and is
    /// letterboxed on the other. Zero-sized sources are rejected.
    pub fn fit(original_width: usize, original_height: usize, page: PageSize) -> Result<Self> {
        if original_width == 0 || original_height == 0 {
            return Err(StippleError::DegenerateInput {
                width: original_width,
                height: original_height,
            });
        }

        let original_width = original_width as f64;
        let aspect_ratio = original_width / original_height as f64;

        let (fitted_width, fitted_height) = if aspect_ratio > page.aspect() {
            (page.width, page.width / aspect_ratio)
        } else {
            (page.height * aspect_ratio, page.height)
        };

        Ok(Self {
            page,
            fitted_width,
            fitted_height,
            x_offset: (page.width - fitted_width) / 2.0,
            y_offset: (page.height - fitted_height) / 2.0,
            scale: fitted_width / original_width,
        })
    }

    /// Map a point in source pixels to page units.
    #[inline]
    pub fn to_page(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale + self.x_offset,
            y * self.scale + self.y_offset,
        )
    }

    /// Page size in whole units, as written to output documents.
    pub fn canvas_size(&self) -> (i64, i64) {
        (truncate(self.page.width), truncate(self.page.height))
    }
}

/// One emitted dot in page units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub x: i64,
    pub y: i64,
    pub radius: i64,
    /// Unscaled diameter in source pixels.
    pub diameter: f64,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub geometry: PageGeometry,
    /// Row-major, top to bottom then left to right.
    pub dots: Vec<Dot>,
}

/// Dot diameter in source pixels for a cell of brightness `brightness`.
#[inline]
pub fn dot_diameter(brightness: f64, max_dot_diameter: f64) -> f64 {
    (WHITE - brightness) / WHITE * max_dot_diameter
}

/// Compute the page geometry and the visible dots for `grid`.
///
/// `original_size` is the `(width, height)` of the image `grid` was sampled
/// from, and `region_size` the sampling granularity. The config is
/// validated before anything else.
pub fn layout(
    grid: &BrightnessGrid,
    region_size: usize,
    original_size: (usize, usize),
    config: &StippleConfig,
) -> Result<Layout> {
    let config = StippleConfig {
        region_size,
        ..config.clone()
    };
    config.validate()?;

    let geometry = PageGeometry::fit(original_size.0, original_size.1, config.page)?;
    let mut dots = Vec::new();
    let mut skipped = 0usize;

    for (row, values) in grid.rows().enumerate() {
        for (col, &brightness) in values.iter().enumerate() {
            let diameter = dot_diameter(brightness, config.max_dot_diameter);
            if diameter < config.min_visible_diameter {
                skipped += 1;
                continue;
            }

            let (x, y) = geometry.to_page((col * region_size) as f64, (row * region_size) as f64);
            let radius = diameter / 2.0 * geometry.scale;

            dots.push(Dot {
                x: truncate(x),
                y: truncate(y),
                radius: truncate(radius),
                diameter,
            });
        }
    }

    debug!(
        fitted_width = geometry.fitted_width,
        fitted_height = geometry.fitted_height,
        scale = geometry.scale,
        dots = dots.len(),
        skipped,
        "Laid out dots"
    );

    Ok(Layout { geometry, dots })
}

/// Drop the fractional part, rounding toward zero.
#[inline]
fn truncate(value: f64) -> i64 {
    value as i64
}
