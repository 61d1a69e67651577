//! Stippler: photographs to plotter-ready dot drawings.
//!
//! Decodes a raster image, averages its brightness over square regions and
//! writes one SVG (optionally with a PNG preview) per requested dot style,
//! fitted and centered on a fixed page.

mod config_loader;
mod outputs;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use stipple_core::preview::DEFAULT_PIXELS_PER_UNIT;
use stipple_core::raster::{load_grayscale, save_grayscale};
use stipple_core::{DotStyle, Orientation, Pipeline, Preset, StippleError, StyledSink};

use config_loader::{FileConfig, OutputSpec, Overrides};

#[derive(Parser, Debug)]
#[command(name = "stippler")]
#[command(about = "Convert a photograph into a stippled SVG drawing")]
struct Args {
    /// Source image (any format the image decoder supports)
    input: PathBuf,

    /// YAML configuration file
    #[arg(short, long, env = "STIPPLER_CONFIG")]
    config: Option<PathBuf>,

    /// Starting preset: a5-outline or a5-zoom
    #[arg(long)]
    preset: Option<Preset>,

    /// Edge length of each sampling region, in source pixels
    #[arg(long)]
    region_size: Option<usize>,

    /// Page width in page units (tenths of a millimetre for the presets)
    #[arg(long)]
    page_width: Option<f64>,

    /// Page height in page units
    #[arg(long)]
    page_height: Option<f64>,

    /// Diameter of a pure-black dot, in source pixels
    #[arg(long)]
    max_dot_diameter: Option<f64>,

    /// Omit dots smaller than this diameter, in source pixels
    #[arg(long)]
    min_visible_diameter: Option<f64>,

    /// Rotate landscape sources to portrait before sampling
    #[arg(long)]
    portrait: bool,

    /// Dot style(s) to write; repeat for both (default: hollow and filled)
    #[arg(long = "style")]
    styles: Vec<DotStyle>,

    /// Base output path (default: input path with .svg extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a PNG preview next to each SVG
    #[arg(long)]
    preview: bool,

    /// Preview pixels per page unit
    #[arg(long)]
    preview_scale: Option<f32>,

    /// Save the grayscale version of the (oriented) source here
    #[arg(long)]
    grayscale_out: Option<PathBuf>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    summary_json: bool,

    /// Log level
    #[arg(long, env = "STIPPLER_LOG", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            region_size: self.region_size,
            page_width: self.page_width,
            page_height: self.page_height,
            max_dot_diameter: self.max_dot_diameter,
            min_visible_diameter: self.min_visible_diameter,
            orientation: self.portrait.then_some(Orientation::Portrait),
        }
    }

    /// Flags win; the file's output list is used only when no output flag is given.
    fn outputs(&self, file: &FileConfig) -> Result<Vec<OutputSpec>> {
        let flags_given = self.output.is_some() || !self.styles.is_empty() || self.preview;
        if !file.outputs.is_empty() && !flags_given {
            outputs::ensure_distinct_paths(&file.outputs)?;
            return Ok(file.outputs.clone());
        }

        let base = self
            .output
            .clone()
            .unwrap_or_else(|| outputs::default_base(&self.input));
        let styles = if self.styles.is_empty() {
            DotStyle::ALL.to_vec()
        } else {
            self.styles.clone()
        };
        outputs::plan_outputs(&base, &styles, self.preview)
    }
}

fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// Name the pipeline stage an error came from.
fn stage_of(err: &StippleError) -> &'static str {
    match err {
        StippleError::InvalidConfig(_) => "configuration",
        StippleError::DegenerateInput { .. } => "layout",
        StippleError::Io(_)
        | StippleError::Image(_)
        | StippleError::Render(_)
        | StippleError::SinkFinished => "emit",
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json)?;

    let file = match &args.config {
        Some(path) => config_loader::load_file_config(path)?,
        None => FileConfig::default(),
    };
    let config = config_loader::resolve(args.preset, &file, &args.overrides())?;
    let pipeline = Pipeline::new(config).context("configuration stage failed")?;

    info!(
        input = %args.input.display(),
        region_size = pipeline.config().region_size,
        page_width = pipeline.config().page.width,
        page_height = pipeline.config().page.height,
        "Starting stippler"
    );

    let source = load_grayscale(&args.input)
        .with_context(|| format!("decode stage failed for {:?}", args.input))?;
    let source = pipeline.prepare(source);

    // Reject a degenerate source and a bad output plan before any file is created
    let geometry = pipeline.geometry(&source).context("layout stage failed")?;
    let outputs = args.outputs(&file)?;
    info!(
        fitted_width = geometry.fitted_width,
        fitted_height = geometry.fitted_height,
        outputs = outputs.len(),
        "Planned drawing"
    );

    if let Some(path) = &args.grayscale_out {
        save_grayscale(&source, path)
            .with_context(|| format!("grayscale export failed for {:?}", path))?;
    }

    let preview_scale = args
        .preview_scale
        .or(file.preview_scale)
        .unwrap_or(DEFAULT_PIXELS_PER_UNIT);
    let mut sinks = outputs::open_sinks(&outputs, preview_scale)?;
    let mut targets: Vec<StyledSink<'_>> = outputs
        .iter()
        .zip(sinks.iter_mut())
        .map(|(output, sink)| StyledSink::new(output.style, &mut **sink))
        .collect();

    let summary = pipeline.run(&source, &mut targets).map_err(|e| {
        let stage = stage_of(&e);
        anyhow::Error::new(e).context(format!("{} stage failed", stage))
    })?;

    for output in &outputs {
        info!(path = %output.path.display(), style = output.style.name(), "Wrote drawing");
    }

    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
