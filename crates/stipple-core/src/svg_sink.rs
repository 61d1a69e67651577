//! SVG document sink built on the `svg` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use svg::node::element::{Circle, Rectangle};
use svg::{Document, Node};

use crate::error::{Result, StippleError};
use crate::layout::Dot;
use crate::sink::{DotStyle, DrawSink, BACKGROUND_STYLE};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Builds one SVG document and writes it to `W` on `finish`.
pub struct SvgSink<W: Write> {
    writer: W,
    document: Option<Document>,
}

impl<W: Write> SvgSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document: Some(Document::new().set("xmlns", SVG_NAMESPACE)),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn document(&mut self) -> Result<&mut Document> {
        self.document.as_mut().ok_or(StippleError::SinkFinished)
    }
}

impl SvgSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write the document there.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> DrawSink for SvgSink<W> {
    fn draw_background(&mut self, width: i64, height: i64) -> Result<()> {
        let document = self.document()?;
        document.assign("width", width);
        document.assign("height", height);
        document.assign("viewBox", (0, 0, width, height));
        document.append(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("style", BACKGROUND_STYLE),
        );
        Ok(())
    }

    fn draw_circle(&mut self, dot: &Dot, style: DotStyle) -> Result<()> {
        self.document()?.append(
            Circle::new()
                .set("cx", dot.x)
                .set("cy", dot.y)
                .set("r", dot.radius)
                .set("style", style.svg_style()),
        );
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = self.document.take().ok_or(StippleError::SinkFinished)?;
        svg::write(&mut self.writer, &document)?;
        self.writer.flush()?;
        Ok(())
    }
}
