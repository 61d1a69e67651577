//! Output planning and sink acquisition.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use stipple_core::preview::PreviewSink;
use stipple_core::svg_sink::SvgSink;
use stipple_core::{DotStyle, DrawSink};

use crate::config_loader::{OutputFormat, OutputSpec};

/// `photo.jpg` -> `photo.svg` next to the input.
pub fn default_base(input: &Path) -> PathBuf {
    input.with_extension("svg")
}

/// Insert `suffix` between the file stem and the extension.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    path.with_file_name(name)
}

/// Outputs for `styles` derived from a single base path.
///
/// One style writes to `base` itself. With both styles the hollow drawing
/// takes `base` and the filled one gets a `_filled` suffix. `preview` adds
/// a PNG next to every SVG. A base that would make two outputs share a
/// file (a `.png` base with previews) is rejected.
pub fn plan_outputs(base: &Path, styles: &[DotStyle], preview: bool) -> Result<Vec<OutputSpec>> {
    let mut unique: Vec<DotStyle> = Vec::new();
    for style in styles {
        if !unique.contains(style) {
            unique.push(*style);
        }
    }

    let mut outputs = Vec::new();
    for &style in &unique {
        let path = if unique.len() > 1 && style == DotStyle::Filled {
            with_suffix(base, "_filled")
        } else {
            base.to_path_buf()
        };
        if preview {
            outputs.push(OutputSpec {
                style,
                format: OutputFormat::Png,
                path: path.with_extension("png"),
            });
        }
        outputs.push(OutputSpec {
            style,
            format: OutputFormat::Svg,
            path,
        });
    }
    // SVGs first, previews after, each in style order
    outputs.sort_by_key(|o| o.format == OutputFormat::Png);
    ensure_distinct_paths(&outputs)?;
    Ok(outputs)
}

/// Every output must own its file.
pub fn ensure_distinct_paths(outputs: &[OutputSpec]) -> Result<()> {
    for (i, output) in outputs.iter().enumerate() {
        if outputs[..i].iter().any(|earlier| earlier.path == output.path) {
            bail!(
                "{:?} is used by more than one output; choose a base path ending in .svg",
                output.path
            );
        }
    }
    Ok(())
}

/// Open every output file. Files are flushed and closed when dropped.
pub fn open_sinks(outputs: &[OutputSpec], preview_scale: f32) -> Result<Vec<Box<dyn DrawSink>>> {
    ensure_distinct_paths(outputs)?;
    let mut sinks: Vec<Box<dyn DrawSink>> = Vec::with_capacity(outputs.len());
    for output in outputs {
        let sink: Box<dyn DrawSink> = match output.format {
            OutputFormat::Svg => Box::new(
                SvgSink::create(&output.path)
                    .with_context(|| format!("Failed to create {:?}", output.path))?,
            ),
            OutputFormat::Png => Box::new(
                PreviewSink::create(&output.path, preview_scale)
                    .with_context(|| format!("Failed to create {:?}", output.path))?,
            ),
        };
        info!(
            path = %output.path.display(),
            style = output.style.name(),
            format = ?output.format,
            "Opened output"
        );
        sinks.push(sink);
    }
    Ok(sinks)
}
