//! PNG preview of a dot drawing.
//!
//! The preview builds the same SVG document as [`SvgSink`], then renders it
//! with resvg onto a tiny-skia pixmap. `pixels_per_unit` sets the raster
//! resolution relative to page units (0.1 turns a 1485-unit A5 page into a
//! 148 px wide image).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, StippleError};
use crate::layout::Dot;
use crate::sink::{DotStyle, DrawSink};
use crate::svg_sink::SvgSink;

/// Default raster resolution: one pixel per page unit.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 1.0;

/// Raster sink that writes a PNG to `W` on `finish`.
pub struct PreviewSink<W: Write> {
    svg: SvgSink<Vec<u8>>,
    writer: W,
    pixels_per_unit: f32,
    canvas: Option<(i64, i64)>,
}

impl<W: Write> PreviewSink<W> {
    pub fn new(writer: W, pixels_per_unit: f32) -> Result<Self> {
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(StippleError::InvalidConfig(format!(
                "preview scale must be positive, got {}",
                pixels_per_unit
            )));
        }
        Ok(Self {
            svg: SvgSink::new(Vec::new()),
            writer,
            pixels_per_unit,
            canvas: None,
        })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PreviewSink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>, pixels_per_unit: f32) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), pixels_per_unit)
    }
}

impl<W: Write> DrawSink for PreviewSink<W> {
    fn draw_background(&mut self, width: i64, height: i64) -> Result<()> {
        self.canvas = Some((width, height));
        self.svg.draw_background(width, height)
    }

    fn draw_circle(&mut self, dot: &Dot, style: DotStyle) -> Result<()> {
        self.svg.draw_circle(dot, style)
    }

    fn finish(&mut self) -> Result<()> {
        self.svg.finish()?;
        let (width, height) = self
            .canvas
            .ok_or_else(|| StippleError::Render("preview finished without a background".into()))?;

        let png = rasterize(self.svg.get_ref(), width, height, self.pixels_per_unit)?;
        self.writer.write_all(&png)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render SVG bytes for a `width` x `height` page into PNG bytes.
fn rasterize(svg: &[u8], width: i64, height: i64, pixels_per_unit: f32) -> Result<Vec<u8>> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg, &opt)
        .map_err(|e| StippleError::Render(format!("failed to parse SVG: {}", e)))?;

    let px_width = ((width as f32) * pixels_per_unit).round().max(1.0) as u32;
    let px_height = ((height as f32) * pixels_per_unit).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(px_width, px_height).ok_or_else(|| {
        StippleError::Render(format!(
            "cannot allocate a {}x{} preview",
            px_width, px_height
        ))
    })?;

    let transform = tiny_skia::Transform::from_scale(pixels_per_unit, pixels_per_unit);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    debug!(px_width, px_height, "Rendered preview");

    pixmap
        .encode_png()
        .map_err(|e| StippleError::Render(format!("failed to encode PNG: {}", e)))
}
