//! Vector emission: replay a dot list into one or more styled sinks.

use tracing::debug;

use crate::error::Result;
use crate::layout::{Dot, PageGeometry};
use crate::sink::StyledSink;

/// Draw the page background, every dot, then finish each sink.
///
/// All sinks see the same dots in the same order; only the style differs.
/// Sinks are finished even when `dots` is empty. The first sink error
/// aborts emission and is returned as is.
pub fn emit(dots: &[Dot], geometry: &PageGeometry, sinks: &mut [StyledSink<'_>]) -> Result<()> {
    let (width, height) = geometry.canvas_size();

    for target in sinks.iter_mut() {
        target.sink.draw_background(width, height)?;
    }

    for dot in dots {
        for target in sinks.iter_mut() {
            target.sink.draw_circle(dot, target.style)?;
        }
    }

    for target in sinks.iter_mut() {
        target.sink.finish()?;
    }

    debug!(
        dots = dots.len(),
        sinks = sinks.len(),
        width,
        height,
        "Emitted drawing"
    );

    Ok(())
}
