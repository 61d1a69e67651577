//! Configuration loader for the stippler program.
//!
//! Settings are layered: a named preset, then an optional YAML file, then
//! command-line flags. The YAML file may reference environment variables
//! with `${VAR}` or `${VAR:-default}`.
//!
//! ```yaml
//! preset: a5-zoom
//! region_size: 20
//! page:
//!   width: 1485
//!   height: 2100
//! outputs:
//!   - style: hollow
//!     path: ${OUT_DIR:-.}/portrait.svg
//!   - style: filled
//!     format: png
//!     path: ${OUT_DIR:-.}/portrait_filled.png
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use stipple_core::{DotStyle, Orientation, Preset, StippleConfig};

// ============================================================================
// File schema
// ============================================================================

/// Contents of a stippler YAML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub preset: Option<Preset>,
    pub region_size: Option<usize>,
    pub page: Option<PageOverride>,
    pub max_dot_diameter: Option<f64>,
    pub min_visible_diameter: Option<f64>,
    pub orientation: Option<Orientation>,
    pub preview_scale: Option<f32>,
    pub outputs: Vec<OutputSpec>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageOverride {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Encoding of one output document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

/// One requested output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub style: DotStyle,
    #[serde(default)]
    pub format: OutputFormat,
    pub path: PathBuf,
}

// ============================================================================
// Overrides
// ============================================================================

/// Partial settings applied on top of a base configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub region_size: Option<usize>,
    pub page_width: Option<f64>,
    pub page_height: Option<f64>,
    pub max_dot_diameter: Option<f64>,
    pub min_visible_diameter: Option<f64>,
    pub orientation: Option<Orientation>,
}

impl Overrides {
    pub fn apply(&self, config: &mut StippleConfig) {
        if let Some(v) = self.region_size {
            config.region_size = v;
        }
        if let Some(v) = self.page_width {
            config.page.width = v;
        }
        if let Some(v) = self.page_height {
            config.page.height = v;
        }
        if let Some(v) = self.max_dot_diameter {
            config.max_dot_diameter = v;
        }
        if let Some(v) = self.min_visible_diameter {
            config.min_visible_diameter = v;
        }
        if let Some(v) = self.orientation {
            config.orientation = v;
        }
    }
}

impl FileConfig {
    pub fn overrides(&self) -> Overrides {
        let page = self.page.unwrap_or_default();
        Overrides {
            region_size: self.region_size,
            page_width: page.width,
            page_height: page.height,
            max_dot_diameter: self.max_dot_diameter,
            min_visible_diameter: self.min_visible_diameter,
            orientation: self.orientation,
        }
    }
}

/// Layer preset, file and flag settings into one validated configuration.
///
/// A preset named on the command line wins over one named in the file.
pub fn resolve(
    cli_preset: Option<Preset>,
    file: &FileConfig,
    cli: &Overrides,
) -> Result<StippleConfig> {
    let preset = cli_preset.or(file.preset).unwrap_or_default();
    let mut config = preset.config();
    file.overrides().apply(&mut config);
    cli.apply(&mut config);
    config
        .validate()
        .with_context(|| format!("Invalid configuration (preset {})", preset.name()))?;
    Ok(config)
}

// ============================================================================
// Loading Functions
// ============================================================================

/// Load and parse a stippler YAML file with environment variable substitution.
pub fn load_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config from {:?}", path.as_ref()))?;

    parse_file_config(&content)
        .with_context(|| format!("Failed to parse config from {:?}", path.as_ref()))
}

pub fn parse_file_config(content: &str) -> Result<FileConfig> {
    let expanded = expand_env_vars(content)?;
    let config: FileConfig =
        serde_yaml::from_str(&expanded).context("Invalid stippler config YAML")?;
    Ok(config)
}

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Replace `${VAR}` and `${VAR:-default}` with environment values.
fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next();

            let mut var_expr = String::new();
            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(c) => var_expr.push(c),
                    None => anyhow::bail!("Unclosed variable substitution: ${{{}", var_expr),
                }
            }

            result.push_str(&resolve_var_expr(&var_expr)?);
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}

/// Resolve `VAR` or `VAR:-default`.
fn resolve_var_expr(expr: &str) -> Result<String> {
    if let Some((var_name, default)) = expr.split_once(":-") {
        match std::env::var(var_name.trim()) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Ok(default.to_string()),
        }
    } else {
        std::env::var(expr.trim()).with_context(|| format!("Environment variable {} not set", expr))
    }
}
