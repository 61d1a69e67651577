//! Drawing targets for emitted dots.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StippleError};
use crate::layout::Dot;

/// How every dot in one output is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotStyle {
    /// Solid black disc, no outline.
    Filled,
    /// Black outline, no fill.
    Hollow,
}

impl DotStyle {
    pub const ALL: [DotStyle; 2] = [DotStyle::Hollow, DotStyle::Filled];

    /// SVG `style` attribute for a dot.
    pub fn svg_style(self) -> &'static str {
        match self {
            DotStyle::Filled => "fill:black;stroke:none",
            DotStyle::Hollow => "fill:none;stroke:black",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DotStyle::Filled => "filled",
            DotStyle::Hollow => "hollow",
        }
    }
}

impl std::str::FromStr for DotStyle {
    type Err = StippleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "filled" | "fill" => Ok(DotStyle::Filled),
            "hollow" | "outline" => Ok(DotStyle::Hollow),
            other => Err(StippleError::InvalidConfig(format!(
                "unknown dot style '{}' (expected filled or hollow)",
                other
            ))),
        }
    }
}

/// SVG `style` attribute of the page background.
pub const BACKGROUND_STYLE: &str = "fill:white";

/// A destination for drawing commands.
///
/// Commands arrive as one `draw_background`, any number of `draw_circle`
/// calls, then `finish`. Errors propagate to the caller unchanged.
pub trait DrawSink {
    /// Opaque white rectangle covering the whole page.
    fn draw_background(&mut self, width: i64, height: i64) -> Result<()>;

    fn draw_circle(&mut self, dot: &Dot, style: DotStyle) -> Result<()>;

    /// End the document and flush it.
    fn finish(&mut self) -> Result<()>;
}

/// A sink paired with the style used for every dot written to it.
pub struct StyledSink<'a> {
    pub style: DotStyle,
    pub sink: &'a mut dyn DrawSink,
}

impl<'a> StyledSink<'a> {
    pub fn new(style: DotStyle, sink: &'a mut dyn DrawSink) -> Self {
        Self { style, sink }
    }
}

/// One recorded drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum DrawCommand {
    Background { width: i64, height: i64 },
    Circle { x: i64, y: i64, radius: i64, style: DotStyle },
    End,
}

/// In-memory sink that keeps the command sequence.
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    finished: bool,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of circles recorded.
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    fn push(&mut self, command: DrawCommand) -> Result<()> {
        if self.finished {
            return Err(StippleError::SinkFinished);
        }
        self.commands.push(command);
        Ok(())
    }
}

impl DrawSink for CommandRecorder {
    fn draw_background(&mut self, width: i64, height: i64) -> Result<()> {
        self.push(DrawCommand::Background { width, height })
    }

    fn draw_circle(&mut self, dot: &Dot, style: DotStyle) -> Result<()> {
        self.push(DrawCommand::Circle {
            x: dot.x,
            y: dot.y,
            radius: dot.radius,
            style,
        })
    }

    fn finish(&mut self) -> Result<()> {
        self.push(DrawCommand::End)?;
        self.finished = true;
        Ok(())
    }
}
